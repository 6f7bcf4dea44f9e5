//! 新建 / 编辑任务弹窗

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::dialog_utils::{center_dialog, hint_line, render_dialog_frame};
use crate::dialogs::{FormField, TaskForm};
use crate::theme::ThemeColors;

/// 渲染任务表单
pub fn render(frame: &mut Frame, form: &TaskForm, colors: &ThemeColors) {
    let width = 64u16.min(frame.area().width.saturating_sub(4));
    let area = center_dialog(frame.area(), width, 9);
    let inner = render_dialog_frame(frame, area, form.heading(), colors.highlight, colors);

    // 空行 + 标题行 + 空行 + 描述行 + 空行 + 提示行
    let [_, title_area, _, desc_area, _, hint_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(inner);

    render_field(
        frame,
        title_area,
        "Title",
        &form.title,
        form.field == FormField::Title,
        colors,
    );
    render_field(
        frame,
        desc_area,
        "Description",
        &form.description,
        form.field == FormField::Description,
        colors,
    );

    frame.render_widget(
        hint_line(
            &[("Enter", "save"), ("Tab", "next field"), ("Esc", "cancel")],
            colors,
        ),
        hint_area,
    );
}

fn render_field(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    value: &str,
    focused: bool,
    colors: &ThemeColors,
) {
    let label_style = if focused {
        Style::default()
            .fg(colors.highlight)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(colors.muted)
    };

    // 输入过长时只显示末尾
    let available = (area.width as usize).saturating_sub(label.len() + 6);
    let count = value.chars().count();
    let visible: String = value.chars().skip(count.saturating_sub(available)).collect();

    let mut spans = vec![
        Span::styled(format!("  {}: ", label), label_style),
        Span::styled(visible, Style::default().fg(colors.text)),
    ];
    if focused {
        spans.push(Span::styled("█", Style::default().fg(colors.highlight))); // 光标
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
