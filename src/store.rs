//! 任务存储
//!
//! 内存中按插入顺序保存任务，所有修改都通过这里的方法完成，
//! 每次修改后立即把完整列表写回键值存储。按状态过滤、计数等视图
//! 每次读取时从当前列表重新计算。

use std::collections::HashSet;

use chrono::{DateTime, Duration, Utc};
use mockable::{Clock, DefaultClock};
use uuid::Uuid;

use crate::error::{KanbanError, Result};
use crate::model::{Task, TaskCounts, TaskStatus, TaskUpdate};
use crate::storage::kv::{FileStore, KeyValueStore};

/// 空标题时展示给用户的提示
pub const EMPTY_TITLE_MESSAGE: &str = "Title is required to create a task.";

/// 任务存储
pub struct TaskStore<S = FileStore, C = DefaultClock> {
    tasks: Vec<Task>,
    storage: S,
    key: String,
    clock: C,
}

impl<S: KeyValueStore, C: Clock> TaskStore<S, C> {
    /// 从键值存储加载任务列表
    ///
    /// 条目不存在或内容损坏时得到空列表，不会失败。
    pub fn load(storage: S, key: impl Into<String>, clock: C) -> Self {
        let key = key.into();
        let tasks = match storage.get(&key) {
            Ok(Some(raw)) => match parse_tasks(&raw) {
                Ok(tasks) => repair(tasks),
                Err(e) => {
                    tracing::error!(key = %key, error = %e, "failed to parse stored tasks");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::error!(key = %key, error = %e, "failed to read stored tasks");
                Vec::new()
            }
        };
        tracing::info!(key = %key, count = tasks.len(), "task store loaded");

        Self {
            tasks,
            storage,
            key,
            clock,
        }
    }

    /// 创建任务，状态为 ToDo
    pub fn create(&mut self, title: &str, description: &str) -> Result<Task> {
        let title = title.trim();
        if title.is_empty() {
            return Err(KanbanError::validation(EMPTY_TITLE_MESSAGE));
        }

        let now = self.clock.utc();
        let task = Task {
            id: self.generate_id(now),
            title: title.to_string(),
            description: description.trim().to_string(),
            status: TaskStatus::ToDo,
            created_at: now,
            updated_at: now,
        };

        tracing::debug!(id = %task.id, "task created");
        self.tasks.push(task.clone());
        self.persist();
        Ok(task)
    }

    /// 合并部分字段并刷新 `updated_at`
    pub fn update(&mut self, id: &str, changes: TaskUpdate) -> Result<Task> {
        let Some(index) = self.tasks.iter().position(|t| t.id == id) else {
            tracing::warn!(id = %id, "task not found");
            return Err(KanbanError::not_found(format!("task {}", id)));
        };

        let title = match changes.title {
            Some(ref title) => {
                let title = title.trim();
                if title.is_empty() {
                    return Err(KanbanError::validation(EMPTY_TITLE_MESSAGE));
                }
                Some(title.to_string())
            }
            None => None,
        };

        let now = self.clock.utc();
        let task = &mut self.tasks[index];
        if let Some(title) = title {
            task.title = title;
        }
        if let Some(description) = changes.description {
            task.description = description.trim().to_string();
        }
        if let Some(status) = changes.status {
            task.status = status;
        }
        task.updated_at = advance(task.updated_at, now);

        let updated = task.clone();
        tracing::debug!(id = %id, status = ?updated.status, "task updated");
        self.persist();
        Ok(updated)
    }

    /// 只修改状态
    pub fn update_status(&mut self, id: &str, status: TaskStatus) -> Result<Task> {
        self.update(id, TaskUpdate::status(status))
    }

    /// 删除任务，返回是否确实删除了
    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        let removed = self.tasks.len() < before;
        if removed {
            tracing::debug!(id = %id, "task deleted");
            self.persist();
        }
        removed
    }

    /// 清空全部任务
    pub fn clear_all(&mut self) {
        tracing::info!(count = self.tasks.len(), "clearing all tasks");
        self.tasks.clear();
        self.persist();
    }

    pub fn get_by_id(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// 某一列的任务（保持插入顺序）
    pub fn get_by_status(&self, status: TaskStatus) -> Vec<&Task> {
        self.tasks.iter().filter(|t| t.status == status).collect()
    }

    pub fn all(&self) -> &[Task] {
        &self.tasks
    }

    pub fn counts(&self) -> TaskCounts {
        let mut counts = TaskCounts {
            total: self.tasks.len(),
            ..TaskCounts::default()
        };
        for task in &self.tasks {
            match task.status {
                TaskStatus::ToDo => counts.todo += 1,
                TaskStatus::InProgress => counts.in_progress += 1,
                TaskStatus::Done => counts.done += 1,
            }
        }
        counts
    }

    /// 按 ID 前缀查找，前缀必须唯一
    pub fn find_by_prefix(&self, prefix: &str) -> Result<&Task> {
        if let Some(task) = self.get_by_id(prefix) {
            return Ok(task);
        }
        let mut matches = self.tasks.iter().filter(|t| t.id.starts_with(prefix));
        match (matches.next(), matches.next()) {
            (Some(task), None) => Ok(task),
            (Some(_), Some(_)) => Err(KanbanError::validation(format!(
                "ambiguous task id prefix: {}",
                prefix
            ))),
            (None, _) => Err(KanbanError::not_found(format!("task {}", prefix))),
        }
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.clock.utc()
    }

    #[cfg(test)]
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// 写回存储，失败只记日志
    fn persist(&self) {
        let result = serialize_tasks(&self.tasks).and_then(|raw| self.storage.set(&self.key, &raw));
        match result {
            Ok(()) => tracing::debug!(key = %self.key, count = self.tasks.len(), "tasks persisted"),
            Err(e) => tracing::error!(key = %self.key, error = %e, "failed to persist tasks"),
        }
    }

    /// 生成唯一 ID: task_<毫秒时间戳>_<9 位随机>
    fn generate_id(&self, now: DateTime<Utc>) -> String {
        loop {
            let random = Uuid::new_v4().simple().to_string();
            let id = format!("task_{}_{}", now.timestamp_millis(), &random[..9]);
            if self.get_by_id(&id).is_none() {
                return id;
            }
        }
    }
}

/// 序列化任务列表（JSON 数组）
pub fn serialize_tasks(tasks: &[Task]) -> Result<String> {
    Ok(serde_json::to_string(tasks)?)
}

/// 反序列化任务列表
pub fn parse_tasks(raw: &str) -> Result<Vec<Task>> {
    Ok(serde_json::from_str(raw)?)
}

/// `updated_at` 必须严格递增
fn advance(previous: DateTime<Utc>, now: DateTime<Utc>) -> DateTime<Utc> {
    if now > previous {
        now
    } else {
        previous + Duration::nanoseconds(1)
    }
}

/// 修复加载到的数据: 去掉重复 ID，保证 updated_at >= created_at
fn repair(tasks: Vec<Task>) -> Vec<Task> {
    let mut seen = HashSet::new();
    let mut repaired = Vec::with_capacity(tasks.len());
    for mut task in tasks {
        if !seen.insert(task.id.clone()) {
            tracing::warn!(id = %task.id, "dropping task with duplicate id");
            continue;
        }
        if task.updated_at < task.created_at {
            tracing::warn!(id = %task.id, "updatedAt earlier than createdAt, clamping");
            task.updated_at = task.created_at;
        }
        repaired.push(task);
    }
    repaired
}
