//! 应用配置持久化

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::{load_toml, save_toml};
use crate::error::Result;

/// 任务列表的默认存储键
pub const DEFAULT_STORAGE_KEY: &str = "kanban-tasks";

/// 窗口 resize 后重新计算列区域的最小间隔
pub const DEFAULT_RESIZE_THROTTLE_MS: u64 = 250;

/// 应用配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub theme: ThemeConfig,
    #[serde(default)]
    pub board: BoardConfig,
}

/// 主题配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeConfig {
    pub name: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            name: "Dark".to_string(),
        }
    }
}

/// 看板配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardConfig {
    /// 任务列表在键值存储中的键
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
    /// resize 节流间隔（毫秒）
    #[serde(default = "default_resize_throttle_ms")]
    pub resize_throttle_ms: u64,
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

fn default_resize_throttle_ms() -> u64 {
    DEFAULT_RESIZE_THROTTLE_MS
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            resize_throttle_ms: default_resize_throttle_ms(),
        }
    }
}

/// 获取配置文件路径
pub fn config_path(data_dir: &Path) -> PathBuf {
    data_dir.join("config.toml")
}

/// 加载配置（不存在或解析失败则返回默认值）
pub fn load_config(data_dir: &Path) -> Config {
    let path = config_path(data_dir);
    if !path.exists() {
        return Config::default();
    }
    match load_toml(&path) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "invalid config, using defaults");
            Config::default()
        }
    }
}

/// 保存配置
pub fn save_config(data_dir: &Path, config: &Config) -> Result<()> {
    save_toml(&config_path(data_dir), config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_config_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config(dir.path());
        assert_eq!(config, Config::default());
        assert_eq!(config.board.storage_key, "kanban-tasks");
        assert_eq!(config.board.resize_throttle_ms, 250);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            config_path(dir.path()),
            "[board]\nresize_throttle_ms = 100\n",
        )
        .unwrap();

        let config = load_config(dir.path());
        assert_eq!(config.board.resize_throttle_ms, 100);
        assert_eq!(config.board.storage_key, "kanban-tasks");
        assert_eq!(config.theme.name, "Dark");
    }

    #[test]
    fn test_malformed_config_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(config_path(dir.path()), "this is = = not toml").unwrap();
        assert_eq!(load_config(dir.path()), Config::default());
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.theme.name = "Light".to_string();
        save_config(dir.path(), &config).unwrap();
        assert_eq!(load_config(dir.path()), config);
    }
}
