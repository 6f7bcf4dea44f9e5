//! 弹窗公共部分：定位、外框、提示行

use ratatui::{
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Clear},
    Frame,
};

use crate::theme::ThemeColors;

/// 在 `area` 内居中放置 width x height 的矩形，放不下时收缩
pub fn center_dialog(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(row);
    cell
}

/// 清掉底下的看板内容并画出弹窗外框，返回框内区域
pub fn render_dialog_frame(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    accent: Color,
    colors: &ThemeColors,
) -> Rect {
    frame.render_widget(Clear, area);

    let block = Block::bordered()
        .title(Line::from(title).centered())
        .title_style(Style::default().fg(accent).add_modifier(Modifier::BOLD))
        .border_style(Style::default().fg(accent))
        .style(Style::default().bg(colors.bg));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

/// 居中的按键提示行，例如 `Enter save  Esc cancel`
pub fn hint_line(hints: &[(&'static str, &'static str)], colors: &ThemeColors) -> Line<'static> {
    let mut spans = Vec::with_capacity(hints.len() * 2);
    for (key, action) in hints {
        if !spans.is_empty() {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(*key, Style::default().fg(colors.highlight)));
        spans.push(Span::styled(
            format!(" {}", action),
            Style::default().fg(colors.muted),
        ));
    }
    Line::from(spans).centered()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::{get_theme_colors, Theme};

    #[test]
    fn test_center_dialog() {
        let area = Rect::new(0, 0, 100, 40);
        assert_eq!(center_dialog(area, 60, 10), Rect::new(20, 15, 60, 10));
        // 放不下时收缩到可用区域
        let small = Rect::new(0, 0, 30, 5);
        assert_eq!(center_dialog(small, 60, 10), Rect::new(0, 0, 30, 5));
    }

    #[test]
    fn test_center_dialog_respects_area_offset() {
        let area = Rect::new(10, 2, 40, 20);
        assert_eq!(center_dialog(area, 20, 10), Rect::new(20, 7, 20, 10));
    }

    #[test]
    fn test_hint_line() {
        let colors = get_theme_colors(Theme::Dark);
        let line = hint_line(&[("y", "confirm"), ("Esc", "cancel")], &colors);
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, "y confirm  Esc cancel");
    }
}
