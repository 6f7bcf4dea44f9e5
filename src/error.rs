//! Kanban 统一错误类型定义
//!
//! 使用 `thiserror` 库提供统一的错误处理，支持错误链式传播。

use std::io;
use thiserror::Error;

/// Kanban 错误类型
#[derive(Debug, Error)]
pub enum KanbanError {
    /// I/O 错误（文件读写、目录操作等）
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON 解析/序列化错误
    #[error("JSON error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// TOML 解析错误
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// TOML 序列化错误
    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// 存储错误（通用）
    #[error("Storage error: {0}")]
    Storage(String),

    /// 输入校验失败（例如空标题）
    #[error("{0}")]
    Validation(String),

    /// 资源不存在
    #[error("Not found: {0}")]
    NotFound(String),
}

/// Kanban Result 类型别名
pub type Result<T> = std::result::Result<T, KanbanError>;

impl KanbanError {
    /// 创建 Storage 错误
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    /// 创建 Validation 错误
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// 创建 NotFound 错误
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// 是否为校验错误（需要展示给用户，而不是只写日志）
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = KanbanError::not_found("task_1");
        assert_eq!(err.to_string(), "Not found: task_1");

        let err = KanbanError::validation("Title is required to create a task.");
        assert_eq!(err.to_string(), "Title is required to create a task.");
        assert!(err.is_validation());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: KanbanError = io_err.into();
        assert!(matches!(err, KanbanError::Io(_)));
        assert!(!err.is_validation());
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<Vec<u8>>("not json").unwrap_err();
        let err: KanbanError = json_err.into();
        assert!(err.to_string().starts_with("JSON error"));
    }
}
