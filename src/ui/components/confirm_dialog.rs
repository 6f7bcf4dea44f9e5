//! 确认弹窗组件

use ratatui::{
    layout::{Alignment, Constraint, Layout},
    style::Style,
    text::Line,
    widgets::Paragraph,
    Frame,
};

use super::dialog_utils::{center_dialog, hint_line, render_dialog_frame};
use super::truncate;
use crate::dialogs::{ConfirmAction, ConfirmDialog};
use crate::theme::ThemeColors;

/// 渲染确认弹窗
pub fn render(frame: &mut Frame, dialog: &ConfirmDialog, colors: &ThemeColors) {
    let width = 50u16.min(frame.area().width.saturating_sub(4));
    let area = center_dialog(frame.area(), width, 7);

    let title = match dialog.action {
        ConfirmAction::DeleteTask { .. } => " Delete ",
        ConfirmAction::ClearAll => " Clear Board ",
    };
    let inner = render_dialog_frame(frame, area, title, colors.error, colors);

    let [_, message_area, _, hint_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(inner);

    let message = truncate(&dialog.message, inner.width.saturating_sub(2) as usize);
    frame.render_widget(
        Paragraph::new(Line::from(message))
            .style(Style::default().fg(colors.text))
            .alignment(Alignment::Center),
        message_area,
    );

    frame.render_widget(
        hint_line(&[("y", "confirm"), ("n/Esc", "cancel")], colors),
        hint_area,
    );
}
