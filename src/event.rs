use std::io;
use std::time::Duration;

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};

use crate::app::App;

/// 处理事件，返回 true 表示应该继续运行
pub fn handle_events(app: &mut App) -> io::Result<bool> {
    // 更新 Toast 状态
    app.ui.clear_expired_toast();

    // 轮询事件（100ms 超时）
    if event::poll(Duration::from_millis(100))? {
        match event::read()? {
            Event::Key(key) => {
                // 只处理按下事件
                if key.kind == KeyEventKind::Press {
                    handle_key(app, key);
                }
            }
            Event::Mouse(mouse) => handle_mouse(app, mouse),
            Event::Resize(_, _) => app.note_resize(),
            _ => {}
        }
    }

    Ok(!app.should_quit)
}

fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    // 弹窗打开时忽略鼠标；被吞掉的松开事件同时结束拖拽
    if app.task_form.is_some() || app.confirm_dialog.is_some() || app.ui.show_help {
        if mouse.kind == MouseEventKind::Up(MouseButton::Left) {
            app.cancel_drag();
        }
        return;
    }

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => app.mouse_down(mouse.column, mouse.row),
        MouseEventKind::Drag(MouseButton::Left) => app.mouse_drag(mouse.column, mouse.row),
        MouseEventKind::Up(MouseButton::Left) => app.mouse_up(mouse.column, mouse.row),
        MouseEventKind::ScrollDown => app.select_next(),
        MouseEventKind::ScrollUp => app.select_previous(),
        _ => {}
    }
}

fn handle_key(app: &mut App, key: KeyEvent) {
    // 优先处理弹窗事件

    // 帮助面板
    if app.ui.show_help {
        if matches!(key.code, KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')) {
            app.ui.show_help = false;
        }
        return;
    }

    // 确认弹窗
    if app.confirm_dialog.is_some() {
        handle_confirm_dialog_key(app, key);
        return;
    }

    // 新建 / 编辑弹窗
    if app.task_form.is_some() {
        handle_task_form_key(app, key);
        return;
    }

    // 拖拽中 Esc 取消
    if app.board.drag.is_dragging() && key.code == KeyCode::Esc {
        app.cancel_drag();
        return;
    }

    handle_board_key(app, key);
}

/// 处理看板的键盘事件
fn handle_board_key(app: &mut App, key: KeyEvent) {
    match key.code {
        // 退出
        KeyCode::Char('q') => app.quit(),

        // 导航
        KeyCode::Char('j') | KeyCode::Down => app.select_next(),
        KeyCode::Char('k') | KeyCode::Up => app.select_previous(),
        KeyCode::Char('h') | KeyCode::Left => app.focus_left(),
        KeyCode::Char('l') | KeyCode::Right => app.focus_right(),

        // 移动任务到相邻列
        KeyCode::Char('<') | KeyCode::Char('H') => app.move_selected(false),
        KeyCode::Char('>') | KeyCode::Char('L') => app.move_selected(true),

        // 功能按键
        KeyCode::Char('n') => app.open_new_task_dialog(),
        KeyCode::Char('e') | KeyCode::Enter => app.open_edit_task_dialog(),
        KeyCode::Char('d') | KeyCode::Char('x') | KeyCode::Delete => {
            app.request_delete_selected()
        }
        KeyCode::Char('C') => app.request_clear_all(),
        KeyCode::Char('t') | KeyCode::Char('T') => {
            app.ui.cycle_theme();
            let label = app.ui.theme.label();
            app.ui.show_toast(format!("Theme: {}", label));
        }
        KeyCode::Char('?') => app.open_help(),

        _ => {}
    }
}

/// 处理任务表单
fn handle_task_form_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => app.submit_task_form(),
        KeyCode::Esc => app.close_task_form(),
        _ => {
            let Some(form) = app.task_form.as_mut() else {
                return;
            };
            match key.code {
                KeyCode::Tab | KeyCode::BackTab => form.toggle_field(),
                KeyCode::Backspace => form.delete_char(),
                KeyCode::Char(c) => form.input_char(c),
                _ => {}
            }
        }
    }
}

/// 处理确认弹窗
fn handle_confirm_dialog_key(app: &mut App, key: KeyEvent) {
    match key.code {
        // 确认
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => app.confirm_dialog_yes(),
        // 取消
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc | KeyCode::Char('q') => {
            app.confirm_dialog_no()
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    use crossterm::event::KeyModifiers;
    use ratatui::layout::Rect;

    use crate::model::TaskStatus;
    use crate::storage::config::Config;

    fn press(app: &mut App, code: KeyCode) {
        handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn mouse(app: &mut App, kind: MouseEventKind, column: u16, row: u16) {
        handle_mouse(
            app,
            MouseEvent {
                kind,
                column,
                row,
                modifiers: KeyModifiers::NONE,
            },
        );
    }

    /// 一个任务卡片在 (1,4)，三列各 20 宽
    fn board_with_card(dir: &std::path::Path) -> (App, String) {
        let mut app = App::new(dir, &Config::default());
        let task = app.store.create("drag me", "").unwrap();
        app.ui.click_areas.columns = TaskStatus::ALL
            .iter()
            .enumerate()
            .map(|(i, s)| (Rect::new(i as u16 * 20, 3, 20, 20), *s))
            .collect();
        app.sync_drop_zones(Instant::now());
        app.ui
            .click_areas
            .task_cards
            .push((Rect::new(1, 4, 18, 2), task.id.clone()));
        (app, task.id)
    }

    fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_keyboard_flow() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = App::new(dir.path(), &Config::default());

        press(&mut app, KeyCode::Char('n'));
        type_str(&mut app, "Write docs");
        press(&mut app, KeyCode::Tab);
        type_str(&mut app, "quickly");
        press(&mut app, KeyCode::Enter);

        let task = app.selected_task().unwrap().clone();
        assert_eq!(task.title, "Write docs");
        assert_eq!(task.description, "quickly");

        press(&mut app, KeyCode::Char('>'));
        assert_eq!(
            app.store.get_by_id(&task.id).unwrap().status,
            TaskStatus::InProgress
        );

        press(&mut app, KeyCode::Char('d'));
        press(&mut app, KeyCode::Char('y'));
        assert!(app.store.get_by_id(&task.id).is_none());

        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_form_swallows_board_keys() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = App::new(dir.path(), &Config::default());

        press(&mut app, KeyCode::Char('n'));
        type_str(&mut app, "quit");
        assert!(!app.should_quit);
        press(&mut app, KeyCode::Esc);
        assert!(app.task_form.is_none());
        assert_eq!(app.store.counts().total, 0);
    }

    #[test]
    fn test_esc_cancels_drag() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = App::new(dir.path(), &Config::default());
        app.board
            .drag
            .begin("task_1", crate::board::Point::new(1, 1));
        press(&mut app, KeyCode::Esc);
        assert!(!app.board.drag.is_dragging());
    }

    #[test]
    fn test_mouse_drag_moves_task() {
        let dir = tempfile::tempdir().unwrap();
        let (mut app, id) = board_with_card(dir.path());

        mouse(&mut app, MouseEventKind::Down(MouseButton::Left), 2, 4);
        mouse(&mut app, MouseEventKind::Drag(MouseButton::Left), 45, 10);
        mouse(&mut app, MouseEventKind::Up(MouseButton::Left), 45, 10);
        assert_eq!(app.store.get_by_id(&id).unwrap().status, TaskStatus::Done);
    }

    #[test]
    fn test_release_under_help_ends_drag() {
        let dir = tempfile::tempdir().unwrap();
        let (mut app, id) = board_with_card(dir.path());

        mouse(&mut app, MouseEventKind::Down(MouseButton::Left), 2, 4);
        press(&mut app, KeyCode::Char('?'));
        mouse(&mut app, MouseEventKind::Up(MouseButton::Left), 2, 4);
        press(&mut app, KeyCode::Esc);
        assert!(!app.ui.show_help);

        // 之后在空白处单击不能移动任务
        mouse(&mut app, MouseEventKind::Down(MouseButton::Left), 45, 15);
        mouse(&mut app, MouseEventKind::Up(MouseButton::Left), 45, 15);
        assert_eq!(app.store.get_by_id(&id).unwrap().status, TaskStatus::ToDo);
    }

    #[test]
    fn test_release_under_form_ends_drag() {
        let dir = tempfile::tempdir().unwrap();
        let (mut app, id) = board_with_card(dir.path());

        mouse(&mut app, MouseEventKind::Down(MouseButton::Left), 2, 4);
        press(&mut app, KeyCode::Char('n'));
        mouse(&mut app, MouseEventKind::Up(MouseButton::Left), 30, 10);
        press(&mut app, KeyCode::Esc);
        assert!(app.task_form.is_none());

        mouse(&mut app, MouseEventKind::Up(MouseButton::Left), 45, 15);
        assert_eq!(app.store.get_by_id(&id).unwrap().status, TaskStatus::ToDo);
        assert!(!app.board.drag.is_dragging());
    }
}
