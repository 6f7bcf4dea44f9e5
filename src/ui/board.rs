//! 看板页面渲染

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Clear, Paragraph, Widget},
    Frame,
};

use crate::app::App;
use crate::model::TaskStatus;
use crate::theme::ThemeColors;

use super::components::{
    column::{self, ColumnView},
    confirm_dialog,
    dialog_utils::center_dialog,
    footer, header, help_panel, task_dialog,
};

/// 渲染看板页面，同时填充本帧的点击区域
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // 填充整个背景
    Block::default()
        .style(Style::default().bg(app.ui.colors.bg))
        .render(area, frame.buffer_mut());

    let [header_area, body_area, footer_area] = Layout::vertical([
        Constraint::Length(header::HEADER_HEIGHT), // Header
        Constraint::Fill(1),                       // 三列
        Constraint::Length(3),                     // Footer
    ])
    .areas(area);

    let counts = app.store.counts();
    header::render(frame, header_area, &counts, &app.ui.colors);

    let column_areas: [_; 3] = Layout::horizontal([
        Constraint::Ratio(1, 3),
        Constraint::Ratio(1, 3),
        Constraint::Ratio(1, 3),
    ])
    .areas(body_area);

    let now = app.store.now();
    let hover = app.drag_hover();
    let dragging_id = app.board.drag.task_id().map(str::to_string);

    let mut cards = Vec::new();
    for (status, column_area) in TaskStatus::ALL.iter().zip(column_areas) {
        let view = ColumnView {
            status: *status,
            tasks: app.column_tasks(*status),
            selected: app.selected_index(*status),
            focused: app.board.focused == *status,
            drop_hover: hover == Some(*status),
            dragging: dragging_id.as_deref(),
            now,
        };
        cards.extend(column::render(frame, column_area, &view, &app.ui.colors));
    }

    app.ui.click_areas.task_cards = cards;
    app.ui.click_areas.columns = TaskStatus::ALL
        .iter()
        .zip(column_areas)
        .map(|(status, rect)| (rect, *status))
        .collect();

    // 拖拽中在 footer 显示被拖拽任务的标题
    let dragging_title = dragging_id
        .as_deref()
        .and_then(|id| app.store.get_by_id(id))
        .filter(|_| app.board.drag.has_moved())
        .map(|t| t.title.clone());
    footer::render(
        frame,
        footer_area,
        counts.total > 0,
        dragging_title.as_deref(),
        &app.ui.colors,
    );

    // 弹窗
    if let Some(ref form) = app.task_form {
        task_dialog::render(frame, form, &app.ui.colors);
    }
    if let Some(ref dialog) = app.confirm_dialog {
        confirm_dialog::render(frame, dialog, &app.ui.colors);
    }
    if app.ui.show_help {
        help_panel::render(frame, &app.ui.colors);
    }

    if let Some(ref t) = app.ui.toast {
        if !t.is_expired() {
            render_toast(frame, body_area, &t.message, &app.ui.colors);
        }
    }
}

/// Toast 浮在三列底部居中
fn render_toast(frame: &mut Frame, body: Rect, message: &str, colors: &ThemeColors) {
    if body.height < 3 || body.width < 8 {
        return;
    }
    let strip = Rect::new(body.x, body.bottom() - 3, body.width, 3);
    let width = (message.chars().count() + 4).min(body.width as usize) as u16;
    let area = center_dialog(strip, width, 3);

    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(message)
            .alignment(Alignment::Center)
            .style(
                Style::default()
                    .fg(colors.text)
                    .add_modifier(Modifier::BOLD),
            )
            .block(
                Block::bordered()
                    .border_style(Style::default().fg(colors.drop_target))
                    .style(Style::default().bg(colors.bg_secondary)),
            ),
        area,
    );
}
