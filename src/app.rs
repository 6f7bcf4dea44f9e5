use std::path::Path;
use std::time::{Duration, Instant};

use mockable::DefaultClock;

use crate::board::{DragState, DropOutcome, DropZoneResolver, Point, Region, ResizeThrottle};
use crate::dialogs::{ConfirmAction, ConfirmDialog, TaskForm, TaskFormMode};
use crate::model::{Task, TaskStatus, TaskUpdate};
use crate::storage::config::Config;
use crate::storage::kv::FileStore;
use crate::store::TaskStore;
use crate::theme::Theme;
use crate::ui_state::UiState;

/// 看板页面状态
#[derive(Debug)]
pub struct BoardState {
    /// 当前焦点列
    pub focused: TaskStatus,
    /// 每列的选中索引
    pub selected: [usize; 3],
    /// 拖拽状态
    pub drag: DragState,
    /// 拖放区域
    pub drop_zones: DropZoneResolver,
    /// resize 节流
    pub resize: ResizeThrottle,
}

impl BoardState {
    pub fn new(resize_throttle: Duration) -> Self {
        let mut resize = ResizeThrottle::new(resize_throttle);
        // 首次渲染后需要计算一次区域
        resize.note_resize();
        Self {
            focused: TaskStatus::ToDo,
            selected: [0; 3],
            drag: DragState::default(),
            drop_zones: DropZoneResolver::new(),
            resize,
        }
    }
}

/// 全局应用状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,
    /// 任务存储
    pub store: TaskStore,
    /// 看板状态
    pub board: BoardState,
    /// UI 状态
    pub ui: UiState,
    /// 新建 / 编辑弹窗
    pub task_form: Option<TaskForm>,
    /// 确认弹窗
    pub confirm_dialog: Option<ConfirmDialog>,
}

impl App {
    pub fn new(data_dir: &Path, config: &Config) -> Self {
        let store = TaskStore::load(
            FileStore::new(data_dir),
            config.board.storage_key.clone(),
            DefaultClock,
        );
        Self::with_store(store, config)
    }

    pub fn with_store(store: TaskStore, config: &Config) -> Self {
        Self {
            should_quit: false,
            store,
            board: BoardState::new(Duration::from_millis(config.board.resize_throttle_ms)),
            ui: UiState::new(Theme::from_name(&config.theme.name)),
            task_form: None,
            confirm_dialog: None,
        }
    }

    // ========== 列与选择 ==========

    /// 某列的任务
    pub fn column_tasks(&self, status: TaskStatus) -> Vec<&Task> {
        self.store.get_by_status(status)
    }

    /// 某列当前选中的索引（已按列长度截断）
    pub fn selected_index(&self, status: TaskStatus) -> Option<usize> {
        let len = self.column_tasks(status).len();
        if len == 0 {
            None
        } else {
            Some(self.board.selected[status.index()].min(len - 1))
        }
    }

    /// 焦点列中选中的任务
    pub fn selected_task(&self) -> Option<&Task> {
        let status = self.board.focused;
        let index = self.selected_index(status)?;
        self.column_tasks(status).get(index).copied()
    }

    pub fn focus_left(&mut self) {
        if let Some(prev) = self.board.focused.prev() {
            self.board.focused = prev;
        }
    }

    pub fn focus_right(&mut self) {
        if let Some(next) = self.board.focused.next() {
            self.board.focused = next;
        }
    }

    pub fn select_next(&mut self) {
        let status = self.board.focused;
        let len = self.column_tasks(status).len();
        if len == 0 {
            return;
        }
        let current = self.selected_index(status).unwrap_or(0);
        self.board.selected[status.index()] = (current + 1) % len;
    }

    pub fn select_previous(&mut self) {
        let status = self.board.focused;
        let len = self.column_tasks(status).len();
        if len == 0 {
            return;
        }
        let current = self.selected_index(status).unwrap_or(0);
        self.board.selected[status.index()] = if current == 0 { len - 1 } else { current - 1 };
    }

    /// 让焦点落到指定任务上
    fn focus_task(&mut self, task_id: &str) {
        let Some(status) = self.store.get_by_id(task_id).map(|t| t.status) else {
            return;
        };
        if let Some(index) = self
            .column_tasks(status)
            .iter()
            .position(|t| t.id == task_id)
        {
            self.board.focused = status;
            self.board.selected[status.index()] = index;
        }
    }

    // ========== 状态变更 ==========

    /// 修改任务状态；目标与当前状态相同时不做任何事
    pub fn move_task(&mut self, task_id: &str, status: TaskStatus) {
        let Some(current) = self.store.get_by_id(task_id).map(|t| t.status) else {
            self.ui.show_toast("Task no longer exists");
            return;
        };
        if current == status {
            return;
        }
        match self.store.update_status(task_id, status) {
            Ok(task) => {
                self.focus_task(&task.id);
                self.ui.show_toast(format!("Moved to {}", status.label()));
            }
            Err(e) => self.ui.show_toast(e.to_string()),
        }
    }

    /// 把选中的任务移到左/右相邻列
    pub fn move_selected(&mut self, forward: bool) {
        let Some(task) = self.selected_task() else {
            return;
        };
        let target = if forward {
            task.status.next()
        } else {
            task.status.prev()
        };
        if let Some(target) = target {
            let id = task.id.clone();
            self.move_task(&id, target);
        }
    }

    // ========== 鼠标拖拽 ==========

    /// 鼠标按下：点中卡片则选中并开始拖拽，否则丢弃未结束的拖拽
    pub fn mouse_down(&mut self, col: u16, row: u16) {
        let Some(task_id) = self.ui.click_areas.card_at(col, row).map(str::to_string) else {
            self.cancel_drag();
            return;
        };
        self.focus_task(&task_id);
        self.board.drag.begin(task_id, Point::new(col, row));
    }

    pub fn mouse_drag(&mut self, col: u16, row: u16) {
        self.board.drag.move_to(Point::new(col, row));
    }

    /// 鼠标松开：解析落点
    pub fn mouse_up(&mut self, col: u16, row: u16) {
        let outcome = self
            .board
            .drag
            .drop_at(Point::new(col, row), &self.board.drop_zones);
        match outcome {
            DropOutcome::Moved { task_id, status } => self.move_task(&task_id, status),
            DropOutcome::Discarded { task_id } => {
                tracing::debug!(id = %task_id, col, row, "drop outside all columns");
            }
            DropOutcome::NotDragging => {}
        }
    }

    /// 放弃当前拖拽（没收到松开事件、弹窗打开等）
    pub fn cancel_drag(&mut self) {
        if let Some(id) = self.board.drag.task_id() {
            tracing::debug!(id = %id, "drag cancelled");
        }
        self.board.drag.cancel();
    }

    /// 拖拽中鼠标所在的目标列
    pub fn drag_hover(&self) -> Option<TaskStatus> {
        match &self.board.drag {
            DragState::Dragging { current, .. } if self.board.drag.has_moved() => {
                self.board.drop_zones.resolve(current.x, current.y)
            }
            _ => None,
        }
    }

    // ========== 布局 ==========

    /// 终端尺寸变化
    pub fn note_resize(&mut self) {
        self.board.resize.note_resize();
    }

    /// 渲染之后调用：需要时用本帧的列区域重新计算拖放区域
    pub fn sync_drop_zones(&mut self, now: Instant) {
        if self.ui.click_areas.columns.is_empty() {
            return;
        }
        if self.board.resize.poll(now) || self.board.drop_zones.is_empty() {
            let regions: Vec<Region> = self
                .ui
                .click_areas
                .columns
                .iter()
                .filter_map(|(rect, status)| Region::from_rect(*status, *rect))
                .collect();
            self.board.drop_zones.recompute_regions(regions);
        }
    }

    // ========== 任务表单 ==========

    pub fn open_new_task_dialog(&mut self) {
        self.cancel_drag();
        self.task_form = Some(TaskForm::create());
    }

    pub fn open_edit_task_dialog(&mut self) {
        if let Some(task) = self.selected_task() {
            let form = TaskForm::edit(&task.id, &task.title, &task.description);
            self.cancel_drag();
            self.task_form = Some(form);
        }
    }

    pub fn close_task_form(&mut self) {
        self.task_form = None;
    }

    /// 提交表单；标题为空时保持弹窗打开并提示
    pub fn submit_task_form(&mut self) {
        let Some(form) = self.task_form.take() else {
            return;
        };

        let result = match &form.mode {
            TaskFormMode::Create => self.store.create(&form.title, &form.description),
            TaskFormMode::Edit { task_id } => self.store.update(
                task_id,
                TaskUpdate {
                    title: Some(form.title.clone()),
                    description: Some(form.description.clone()),
                    status: None,
                },
            ),
        };

        match result {
            Ok(task) => {
                self.focus_task(&task.id);
                let verb = match form.mode {
                    TaskFormMode::Create => "Created",
                    TaskFormMode::Edit { .. } => "Updated",
                };
                self.ui.show_toast(format!("{}: {}", verb, task.title));
            }
            Err(e) if e.is_validation() => {
                self.ui.show_toast(e.to_string());
                self.task_form = Some(form);
            }
            Err(e) => self.ui.show_toast(e.to_string()),
        }
    }

    // ========== 确认弹窗 ==========

    pub fn request_delete_selected(&mut self) {
        if let Some(task) = self.selected_task() {
            let dialog = ConfirmDialog::delete_task(&task.id, &task.title);
            self.cancel_drag();
            self.confirm_dialog = Some(dialog);
        }
    }

    pub fn request_clear_all(&mut self) {
        let total = self.store.counts().total;
        if total > 0 {
            self.cancel_drag();
            self.confirm_dialog = Some(ConfirmDialog::clear_all(total));
        }
    }

    /// 打开帮助面板
    pub fn open_help(&mut self) {
        self.cancel_drag();
        self.ui.show_help = true;
    }

    pub fn confirm_dialog_yes(&mut self) {
        let Some(dialog) = self.confirm_dialog.take() else {
            return;
        };
        match dialog.action {
            ConfirmAction::DeleteTask { task_id } => {
                if self.store.delete(&task_id) {
                    self.ui.show_toast("Task deleted");
                } else {
                    self.ui.show_toast("Task no longer exists");
                }
            }
            ConfirmAction::ClearAll => {
                self.store.clear_all();
                self.board.selected = [0; 3];
                self.ui.show_toast("All tasks cleared");
            }
        }
    }

    pub fn confirm_dialog_no(&mut self) {
        self.confirm_dialog = None;
    }

    /// 退出应用
    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}
