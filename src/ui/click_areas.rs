use ratatui::layout::Rect;

use crate::model::TaskStatus;

/// 每帧渲染时缓存的可点击区域
#[derive(Debug, Default, Clone)]
pub struct ClickAreas {
    /// 任务卡片 (区域, 任务 ID)
    pub task_cards: Vec<(Rect, String)>,
    /// 状态列 (区域, 状态)，用于重新计算拖放区域
    pub columns: Vec<(Rect, TaskStatus)>,
}

impl ClickAreas {
    pub fn reset(&mut self) {
        self.task_cards.clear();
        self.columns.clear();
    }

    /// 查找坐标所在的卡片
    pub fn card_at(&self, col: u16, row: u16) -> Option<&str> {
        self.task_cards
            .iter()
            .find(|(rect, _)| contains(rect, col, row))
            .map(|(_, id)| id.as_str())
    }
}

/// 检查坐标 (col, row) 是否在 Rect 内
pub fn contains(rect: &Rect, col: u16, row: u16) -> bool {
    col >= rect.x
        && col < rect.x + rect.width
        && row >= rect.y
        && row < rect.y + rect.height
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_at() {
        let mut areas = ClickAreas::default();
        areas
            .task_cards
            .push((Rect::new(1, 1, 10, 2), "task_a".to_string()));
        areas
            .task_cards
            .push((Rect::new(1, 4, 10, 2), "task_b".to_string()));

        assert_eq!(areas.card_at(1, 1), Some("task_a"));
        assert_eq!(areas.card_at(10, 5), Some("task_b"));
        assert_eq!(areas.card_at(11, 1), None);
        assert_eq!(areas.card_at(5, 3), None);

        areas.reset();
        assert_eq!(areas.card_at(1, 1), None);
    }
}
