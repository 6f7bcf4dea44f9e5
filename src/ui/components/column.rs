//! 状态列组件

use chrono::{DateTime, Utc};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::truncate;
use crate::model::{format_relative_time, Task, TaskStatus};
use crate::theme::ThemeColors;

/// 每张卡片占用的行数（标题 + 描述）
const CARD_HEIGHT: u16 = 2;
/// 卡片之间的间距
const CARD_GAP: u16 = 1;

/// 单列渲染所需数据
pub struct ColumnView<'a> {
    pub status: TaskStatus,
    pub tasks: Vec<&'a Task>,
    pub selected: Option<usize>,
    pub focused: bool,
    /// 拖拽中鼠标正悬停在本列
    pub drop_hover: bool,
    /// 正在拖拽的任务
    pub dragging: Option<&'a str>,
    pub now: DateTime<Utc>,
}

/// 渲染一列，返回可见卡片的 (区域, 任务 ID)
pub fn render(
    frame: &mut Frame,
    area: Rect,
    view: &ColumnView,
    colors: &ThemeColors,
) -> Vec<(Rect, String)> {
    let accent = colors.column_accents[view.status.index()];
    let border_color = if view.drop_hover {
        colors.drop_target
    } else if view.focused {
        colors.highlight
    } else {
        colors.border
    };

    let block = Block::default()
        .title(Line::from(vec![
            Span::styled(
                format!(" {} ", view.status.label()),
                Style::default().fg(accent).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("({}) ", view.tasks.len()),
                Style::default().fg(colors.muted),
            ),
        ]))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    if view.tasks.is_empty() {
        if inner.height > 0 {
            let empty = Paragraph::new("No tasks")
                .style(Style::default().fg(colors.muted))
                .alignment(Alignment::Center);
            frame.render_widget(empty, Rect::new(inner.x, inner.y, inner.width, 1));
        }
        return Vec::new();
    }

    let stride = CARD_HEIGHT + CARD_GAP;
    // 最后一张卡片不需要间距
    let visible = ((inner.height + CARD_GAP) / stride).max(1) as usize;
    let offset = scroll_offset(view.selected.unwrap_or(0), visible);

    let mut cards = Vec::new();
    for (slot, (index, task)) in view
        .tasks
        .iter()
        .enumerate()
        .skip(offset)
        .take(visible)
        .enumerate()
    {
        let y = inner.y + slot as u16 * stride;
        if y + CARD_HEIGHT > inner.y + inner.height {
            break;
        }
        let card_area = Rect::new(inner.x, y, inner.width, CARD_HEIGHT);
        let selected = view.focused && view.selected == Some(index);
        let dragged = view.dragging == Some(task.id.as_str());
        render_card(frame, card_area, task, selected, dragged, view.now, colors);
        cards.push((card_area, task.id.clone()));
    }
    cards
}

/// 保证选中项可见
fn scroll_offset(selected: usize, visible: usize) -> usize {
    if visible == 0 {
        return 0;
    }
    selected.saturating_sub(visible - 1)
}

fn render_card(
    frame: &mut Frame,
    area: Rect,
    task: &Task,
    selected: bool,
    dragged: bool,
    now: DateTime<Utc>,
    colors: &ThemeColors,
) {
    let width = area.width as usize;
    let marker = if selected { "▌" } else { " " };

    let mut title_style = Style::default().fg(colors.text).add_modifier(Modifier::BOLD);
    if dragged {
        title_style = title_style.fg(colors.drop_target);
    }

    let title = Line::from(vec![
        Span::styled(marker, Style::default().fg(colors.highlight)),
        Span::styled(truncate(&task.title, width.saturating_sub(1)), title_style),
    ]);

    // 第二行：描述首行 + 更新时间
    let age = format_relative_time(task.updated_at, now);
    let first_line = task.description.lines().next().unwrap_or("");
    let room = width.saturating_sub(age.chars().count() + 3);
    let detail = Line::from(vec![
        Span::styled(marker, Style::default().fg(colors.highlight)),
        Span::styled(
            format!("{:<room$}", truncate(first_line, room), room = room),
            Style::default().fg(colors.muted),
        ),
        Span::styled(format!(" {}", age), Style::default().fg(colors.muted)),
    ]);

    let mut paragraph = Paragraph::new(vec![title, detail]);
    if selected {
        paragraph = paragraph.style(Style::default().bg(colors.bg_secondary));
    }
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_offset_keeps_selection_visible() {
        assert_eq!(scroll_offset(0, 5), 0);
        assert_eq!(scroll_offset(4, 5), 0);
        assert_eq!(scroll_offset(5, 5), 1);
        assert_eq!(scroll_offset(9, 3), 7);
        assert_eq!(scroll_offset(3, 0), 0);
    }
}
