//! 日志初始化
//!
//! 终端由 ratatui 接管，日志写到 `<data_dir>/kanban.log`。
//! 级别由 `KANBAN_LOG` 环境变量控制（EnvFilter 语法），默认 info。

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::error::Result;

/// 日志级别环境变量
pub const LOG_ENV: &str = "KANBAN_LOG";

/// 日志文件路径
pub fn log_path(data_dir: &Path) -> PathBuf {
    data_dir.join("kanban.log")
}

/// 初始化全局日志；重复调用返回错误
pub fn init(data_dir: &Path) -> Result<()> {
    std::fs::create_dir_all(data_dir)?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path(data_dir))?;

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| crate::error::KanbanError::storage(format!("logger init failed: {}", e)))
}
