//! 拖放目标检测
//!
//! 每个状态列对应屏幕上的一块矩形区域，拖拽结束时把鼠标坐标映射为状态。

use ratatui::layout::Rect;

use crate::model::TaskStatus;

/// 屏幕坐标（终端单元格）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    pub x: u16,
    pub y: u16,
}

impl Point {
    pub fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }
}

/// 状态列区域，两个角都包含在内
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub status: TaskStatus,
    pub top_left: Point,
    pub bottom_right: Point,
}

impl Region {
    pub fn new(status: TaskStatus, top_left: Point, bottom_right: Point) -> Self {
        Self {
            status,
            top_left,
            bottom_right,
        }
    }

    /// 从 ratatui 的 Rect 构造，空 Rect 返回 None
    pub fn from_rect(status: TaskStatus, rect: Rect) -> Option<Self> {
        if rect.width == 0 || rect.height == 0 {
            return None;
        }
        Some(Self::new(
            status,
            Point::new(rect.x, rect.y),
            Point::new(
                rect.x.saturating_add(rect.width - 1),
                rect.y.saturating_add(rect.height - 1),
            ),
        ))
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.top_left.x
            && x <= self.bottom_right.x
            && y >= self.top_left.y
            && y <= self.bottom_right.y
    }
}

/// 状态 → 区域映射
#[derive(Debug, Default, Clone)]
pub struct DropZoneResolver {
    /// 按列顺序保存，每个状态至多一个
    regions: Vec<Region>,
}

impl DropZoneResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// 用新的列边界整体替换当前映射
    pub fn recompute_regions(&mut self, column_bounds: impl IntoIterator<Item = Region>) {
        let mut regions: Vec<Region> = Vec::with_capacity(TaskStatus::ALL.len());
        for region in column_bounds {
            match regions.iter_mut().find(|r| r.status == region.status) {
                Some(existing) => *existing = region,
                None => regions.push(region),
            }
        }
        regions.sort_by_key(|r| r.status.index());
        tracing::debug!(count = regions.len(), "drop regions recomputed");
        self.regions = regions;
    }

    /// 返回第一个包含该点的区域对应的状态
    pub fn resolve(&self, x: u16, y: u16) -> Option<TaskStatus> {
        self.regions
            .iter()
            .find(|r| r.contains(x, y))
            .map(|r| r.status)
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 三列并排，每列 20x10，列间留 2 格空隙
    fn three_columns() -> DropZoneResolver {
        let mut resolver = DropZoneResolver::new();
        resolver.recompute_regions(TaskStatus::ALL.iter().enumerate().filter_map(|(i, s)| {
            Region::from_rect(*s, Rect::new(i as u16 * 22, 2, 20, 10))
        }));
        resolver
    }

    #[test]
    fn test_point_inside_resolves_to_column() {
        let resolver = three_columns();
        assert_eq!(resolver.resolve(5, 5), Some(TaskStatus::ToDo));
        assert_eq!(resolver.resolve(30, 5), Some(TaskStatus::InProgress));
        assert_eq!(resolver.resolve(50, 5), Some(TaskStatus::Done));
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let resolver = three_columns();
        assert_eq!(resolver.resolve(0, 2), Some(TaskStatus::ToDo));
        assert_eq!(resolver.resolve(19, 11), Some(TaskStatus::ToDo));
        assert_eq!(resolver.resolve(22, 2), Some(TaskStatus::InProgress));
        assert_eq!(resolver.resolve(63, 11), Some(TaskStatus::Done));
    }

    #[test]
    fn test_point_outside_resolves_to_none() {
        let resolver = three_columns();
        // 列之间的空隙
        assert_eq!(resolver.resolve(20, 5), None);
        assert_eq!(resolver.resolve(21, 5), None);
        // 上方 / 下方 / 右侧
        assert_eq!(resolver.resolve(5, 1), None);
        assert_eq!(resolver.resolve(5, 12), None);
        assert_eq!(resolver.resolve(64, 5), None);
    }

    #[test]
    fn test_empty_resolver_resolves_nothing() {
        let resolver = DropZoneResolver::new();
        assert!(resolver.is_empty());
        assert_eq!(resolver.resolve(0, 0), None);
    }

    #[test]
    fn test_recompute_replaces_mapping() {
        let mut resolver = three_columns();
        resolver.recompute_regions([Region::new(
            TaskStatus::Done,
            Point::new(0, 0),
            Point::new(9, 9),
        )]);
        assert_eq!(resolver.resolve(5, 5), Some(TaskStatus::Done));
        assert_eq!(resolver.resolve(30, 5), None);
        assert_eq!(resolver.resolve(12, 5), None);
    }

    #[test]
    fn test_overlap_prefers_column_order() {
        let mut resolver = DropZoneResolver::new();
        resolver.recompute_regions([
            Region::new(TaskStatus::Done, Point::new(0, 0), Point::new(10, 10)),
            Region::new(TaskStatus::ToDo, Point::new(5, 5), Point::new(15, 15)),
        ]);
        assert_eq!(resolver.resolve(7, 7), Some(TaskStatus::ToDo));
        assert_eq!(resolver.resolve(2, 2), Some(TaskStatus::Done));
    }

    #[test]
    fn test_duplicate_status_keeps_last() {
        let mut resolver = DropZoneResolver::new();
        resolver.recompute_regions([
            Region::new(TaskStatus::ToDo, Point::new(0, 0), Point::new(1, 1)),
            Region::new(TaskStatus::ToDo, Point::new(10, 10), Point::new(11, 11)),
        ]);
        assert_eq!(resolver.resolve(0, 0), None);
        assert_eq!(resolver.resolve(10, 10), Some(TaskStatus::ToDo));
    }

    #[test]
    fn test_from_empty_rect() {
        assert!(Region::from_rect(TaskStatus::ToDo, Rect::new(3, 3, 0, 5)).is_none());
        let region = Region::from_rect(TaskStatus::ToDo, Rect::new(3, 3, 1, 1)).unwrap();
        assert_eq!(region.top_left, region.bottom_right);
    }
}
