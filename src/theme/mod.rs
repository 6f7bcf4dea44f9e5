mod colors;

use ratatui::style::Color;

pub use colors::*;

/// 主题类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// 主题显示名称
    pub fn label(&self) -> &'static str {
        match self {
            Theme::Dark => "Dark",
            Theme::Light => "Light",
        }
    }

    /// 从名称创建主题（用于配置加载）
    pub fn from_name(name: &str) -> Self {
        match name {
            "Light" => Theme::Light,
            _ => Theme::Dark, // 默认 Dark
        }
    }

    /// 切换到下一个主题
    pub fn next(&self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

/// 主题颜色方案
#[derive(Debug, Clone, Copy)]
pub struct ThemeColors {
    /// 主背景色
    pub bg: Color,
    /// 次级背景色（选中卡片等）
    pub bg_secondary: Color,
    /// 高亮色（焦点列、快捷键等）
    pub highlight: Color,
    /// 普通文字
    pub text: Color,
    /// 次要文字
    pub muted: Color,
    /// 边框
    pub border: Color,
    /// 拖拽中的落点提示
    pub drop_target: Color,
    /// 错误
    pub error: Color,
    /// 每一列的强调色: To Do / In Progress / Done
    pub column_accents: [Color; 3],
}

/// 获取主题颜色
pub fn get_theme_colors(theme: Theme) -> ThemeColors {
    match theme {
        Theme::Dark => dark_colors(),
        Theme::Light => light_colors(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name() {
        assert_eq!(Theme::from_name("Light"), Theme::Light);
        assert_eq!(Theme::from_name("Dark"), Theme::Dark);
        assert_eq!(Theme::from_name("Solarized"), Theme::Dark);
        assert_eq!(Theme::from_name(Theme::Light.label()), Theme::Light);
    }

    #[test]
    fn test_next_cycles() {
        assert_eq!(Theme::Dark.next().next(), Theme::Dark);
    }
}
