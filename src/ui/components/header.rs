use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::model::{TaskCounts, TaskStatus};
use crate::theme::ThemeColors;

/// Header 高度（含边框）
pub const HEADER_HEIGHT: u16 = 3;

/// 渲染顶部标题与计数
pub fn render(frame: &mut Frame, area: Rect, counts: &TaskCounts, colors: &ThemeColors) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let left = Span::styled(
        " Kanban Board",
        Style::default()
            .fg(colors.highlight)
            .add_modifier(Modifier::BOLD),
    );

    let mut right_spans: Vec<Span> = Vec::new();
    for (i, status) in TaskStatus::ALL.iter().enumerate() {
        right_spans.push(Span::styled(
            format!("{} {}", status.label(), counts.for_status(*status)),
            Style::default().fg(colors.column_accents[i]),
        ));
        right_spans.push(Span::styled("  ", Style::default()));
    }
    right_spans.push(Span::styled(
        format!("{} total ", counts.total),
        Style::default().fg(colors.muted),
    ));

    // 计算中间填充空格
    let used: usize = left.width() + right_spans.iter().map(|s| s.width()).sum::<usize>();
    let padding = " ".repeat((inner.width as usize).saturating_sub(used));

    let mut spans = vec![left, Span::raw(padding)];
    spans.extend(right_spans);
    frame.render_widget(Paragraph::new(Line::from(spans)), inner);
}
