//! 拖拽状态机: Idle → Dragging → (drop) → Idle

use super::drop_zone::{DropZoneResolver, Point};
use crate::model::TaskStatus;

/// 拖拽状态
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        task_id: String,
        /// 按下鼠标时的位置
        origin: Point,
        /// 最近一次拖动到的位置
        current: Point,
    },
}

/// 一次拖拽结束的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropOutcome {
    /// 落在某个列内
    Moved { task_id: String, status: TaskStatus },
    /// 落在所有列之外，丢弃
    Discarded { task_id: String },
    /// 当前没有在拖拽
    NotDragging,
}

impl DragState {
    /// 开始拖拽（已有拖拽会被替换）
    pub fn begin(&mut self, task_id: impl Into<String>, at: Point) {
        *self = DragState::Dragging {
            task_id: task_id.into(),
            origin: at,
            current: at,
        };
    }

    /// 拖动中更新位置
    pub fn move_to(&mut self, at: Point) {
        if let DragState::Dragging { current, .. } = self {
            *current = at;
        }
    }

    /// 松开鼠标：解析落点并回到 Idle
    pub fn drop_at(&mut self, at: Point, resolver: &DropZoneResolver) -> DropOutcome {
        match std::mem::take(self) {
            DragState::Idle => DropOutcome::NotDragging,
            DragState::Dragging { task_id, .. } => match resolver.resolve(at.x, at.y) {
                Some(status) => DropOutcome::Moved { task_id, status },
                None => DropOutcome::Discarded { task_id },
            },
        }
    }

    /// 取消拖拽
    pub fn cancel(&mut self) {
        *self = DragState::Idle;
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, DragState::Dragging { .. })
    }

    pub fn task_id(&self) -> Option<&str> {
        match self {
            DragState::Dragging { task_id, .. } => Some(task_id),
            DragState::Idle => None,
        }
    }

    /// 是否真的移动过（区分单击和拖拽）
    pub fn has_moved(&self) -> bool {
        match self {
            DragState::Dragging {
                origin, current, ..
            } => origin != current,
            DragState::Idle => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::drop_zone::Region;

    fn resolver() -> DropZoneResolver {
        let mut resolver = DropZoneResolver::new();
        resolver.recompute_regions([
            Region::new(TaskStatus::ToDo, Point::new(0, 0), Point::new(9, 9)),
            Region::new(TaskStatus::InProgress, Point::new(10, 0), Point::new(19, 9)),
            Region::new(TaskStatus::Done, Point::new(20, 0), Point::new(29, 9)),
        ]);
        resolver
    }

    #[test]
    fn test_drag_and_drop_into_column() {
        let mut drag = DragState::default();
        drag.begin("task_1", Point::new(2, 2));
        assert!(drag.is_dragging());
        assert_eq!(drag.task_id(), Some("task_1"));

        drag.move_to(Point::new(14, 3));
        assert!(drag.has_moved());

        let outcome = drag.drop_at(Point::new(14, 3), &resolver());
        assert_eq!(
            outcome,
            DropOutcome::Moved {
                task_id: "task_1".to_string(),
                status: TaskStatus::InProgress
            }
        );
        assert_eq!(drag, DragState::Idle);
    }

    #[test]
    fn test_drop_outside_is_discarded() {
        let mut drag = DragState::default();
        drag.begin("task_1", Point::new(2, 2));
        let outcome = drag.drop_at(Point::new(40, 40), &resolver());
        assert_eq!(
            outcome,
            DropOutcome::Discarded {
                task_id: "task_1".to_string()
            }
        );
        assert!(!drag.is_dragging());
    }

    #[test]
    fn test_drop_without_drag() {
        let mut drag = DragState::default();
        assert_eq!(
            drag.drop_at(Point::new(1, 1), &resolver()),
            DropOutcome::NotDragging
        );
        // Idle 时 move_to 无效果
        drag.move_to(Point::new(3, 3));
        assert_eq!(drag, DragState::Idle);
    }

    #[test]
    fn test_cancel() {
        let mut drag = DragState::default();
        drag.begin("task_1", Point::new(2, 2));
        assert!(!drag.has_moved());
        drag.cancel();
        assert_eq!(drag.task_id(), None);
    }
}
