//! 键值存储
//!
//! 任务列表以单个键值条目的形式持久化。`FileStore` 每个键对应
//! `<root>/<key>.json` 一个文件，`MemoryStore` 用于测试。

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::error::{KanbanError, Result};

/// 键值存储接口
pub trait KeyValueStore {
    /// 读取键对应的值，不存在时返回 `None`
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// 写入键值（覆盖）
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }
}

/// 文件键值存储
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// 在 `<data_dir>/storage/` 下创建存储
    pub fn new(data_dir: &Path) -> Self {
        Self {
            root: data_dir.join("storage"),
        }
    }

    #[cfg(test)]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn entry_path(&self, key: &str) -> Result<PathBuf> {
        let name = sanitize_key(key)?;
        Ok(self.root.join(format!("{}.json", name)))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.entry_path(key)?;
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(std::fs::read_to_string(&path)?))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.entry_path(key)?;
        std::fs::create_dir_all(&self.root)?;

        // 先写临时文件再 rename，避免写到一半留下损坏的数据
        let tmp = path.with_extension("json.tmp");
        std::fs::write(&tmp, value)?;
        std::fs::rename(&tmp, &path)?;
        Ok(())
    }
}

/// 内存键值存储
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
    /// 为 true 时所有写操作失败（模拟存储不可用）
    fail_writes: bool,
}

#[cfg(test)]
impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 写操作总是失败的存储
    pub fn failing() -> Self {
        Self {
            entries: RefCell::default(),
            fail_writes: true,
        }
    }
}

#[cfg(test)]
impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        if self.fail_writes {
            return Err(KanbanError::storage("storage is read-only"));
        }
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// 键只允许 [A-Za-z0-9_-]，防止路径穿越
fn sanitize_key(key: &str) -> Result<String> {
    if key.is_empty() {
        return Err(KanbanError::storage("empty storage key"));
    }
    let sanitized: String = key
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();
    Ok(sanitized)
}
