use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::theme::ThemeColors;

/// 渲染底部快捷键提示栏；拖拽中改为显示拖拽提示
pub fn render(
    frame: &mut Frame,
    area: Rect,
    has_items: bool,
    dragging: Option<&str>,
    colors: &ThemeColors,
) {
    let line = match dragging {
        Some(title) => Line::from(vec![
            Span::raw("  "),
            Span::styled(
                "Dragging ",
                Style::default()
                    .fg(colors.drop_target)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(title.to_string(), Style::default().fg(colors.text)),
            Span::styled(
                "   release over a column to move, Esc to cancel",
                Style::default().fg(colors.muted),
            ),
        ]),
        None => shortcut_line(get_shortcuts(has_items), colors),
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border));

    frame.render_widget(Paragraph::new(line).block(block), area);
}

fn shortcut_line(shortcuts: Vec<(&'static str, &'static str)>, colors: &ThemeColors) -> Line<'static> {
    let mut spans = vec![Span::raw("  ")];
    for (i, (key, desc)) in shortcuts.iter().enumerate() {
        spans.push(Span::styled(
            *key,
            Style::default()
                .fg(colors.highlight)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(
            format!(" {}", desc),
            Style::default().fg(colors.muted),
        ));
        if i < shortcuts.len() - 1 {
            spans.push(Span::raw("   "));
        }
    }
    Line::from(spans)
}

fn get_shortcuts(has_items: bool) -> Vec<(&'static str, &'static str)> {
    if has_items {
        vec![
            ("n", "new"),
            ("e", "edit"),
            ("</>", "move"),
            ("d", "delete"),
            ("h/l", "column"),
            ("?", "help"),
            ("q", "quit"),
        ]
    } else {
        vec![("n", "new"), ("?", "help"), ("q", "quit")]
    }
}
