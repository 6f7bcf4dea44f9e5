//! 弹窗状态

/// 任务表单的用途
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskFormMode {
    Create,
    Edit { task_id: String },
}

/// 当前输入焦点
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Title,
    Description,
}

/// 新建 / 编辑任务弹窗
#[derive(Debug, Clone)]
pub struct TaskForm {
    pub mode: TaskFormMode,
    pub title: String,
    pub description: String,
    pub field: FormField,
}

impl TaskForm {
    pub fn create() -> Self {
        Self {
            mode: TaskFormMode::Create,
            title: String::new(),
            description: String::new(),
            field: FormField::Title,
        }
    }

    pub fn edit(task_id: &str, title: &str, description: &str) -> Self {
        Self {
            mode: TaskFormMode::Edit {
                task_id: task_id.to_string(),
            },
            title: title.to_string(),
            description: description.to_string(),
            field: FormField::Title,
        }
    }

    pub fn heading(&self) -> &'static str {
        match self.mode {
            TaskFormMode::Create => " New Task ",
            TaskFormMode::Edit { .. } => " Edit Task ",
        }
    }

    pub fn toggle_field(&mut self) {
        self.field = match self.field {
            FormField::Title => FormField::Description,
            FormField::Description => FormField::Title,
        };
    }

    fn current_mut(&mut self) -> &mut String {
        match self.field {
            FormField::Title => &mut self.title,
            FormField::Description => &mut self.description,
        }
    }

    pub fn input_char(&mut self, c: char) {
        self.current_mut().push(c);
    }

    pub fn delete_char(&mut self) {
        self.current_mut().pop();
    }
}

/// 需要确认的操作
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmAction {
    DeleteTask { task_id: String },
    ClearAll,
}

/// 确认弹窗
#[derive(Debug, Clone)]
pub struct ConfirmDialog {
    pub action: ConfirmAction,
    pub message: String,
}

impl ConfirmDialog {
    pub fn delete_task(task_id: &str, title: &str) -> Self {
        Self {
            action: ConfirmAction::DeleteTask {
                task_id: task_id.to_string(),
            },
            message: format!("Delete \"{}\"?", title),
        }
    }

    pub fn clear_all(total: usize) -> Self {
        Self {
            action: ConfirmAction::ClearAll,
            message: format!("Delete all {} tasks?", total),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_input_follows_field() {
        let mut form = TaskForm::create();
        form.input_char('a');
        form.toggle_field();
        form.input_char('b');
        form.input_char('c');
        form.delete_char();
        assert_eq!(form.title, "a");
        assert_eq!(form.description, "b");
        assert_eq!(form.field, FormField::Description);
    }

    #[test]
    fn test_edit_form_prefills() {
        let form = TaskForm::edit("task_1", "Title", "Desc");
        assert_eq!(form.heading(), " Edit Task ");
        assert_eq!(form.title, "Title");
        assert_eq!(
            form.mode,
            TaskFormMode::Edit {
                task_id: "task_1".to_string()
            }
        );
    }
}
