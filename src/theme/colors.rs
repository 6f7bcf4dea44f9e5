//! 主题颜色定义

use ratatui::style::Color;

use super::ThemeColors;

/// 深色主题（默认）
pub fn dark_colors() -> ThemeColors {
    ThemeColors {
        bg: Color::Rgb(24, 24, 24),           // 深灰背景
        bg_secondary: Color::Rgb(48, 48, 48), // 选中卡片背景
        highlight: Color::Rgb(0, 255, 136),   // 亮绿色
        text: Color::White,
        muted: Color::Rgb(128, 128, 128),
        border: Color::Rgb(68, 68, 68),
        drop_target: Color::Rgb(255, 213, 79), // 黄色
        error: Color::Rgb(255, 85, 85),
        column_accents: [
            Color::Rgb(100, 181, 246), // 蓝色
            Color::Rgb(255, 165, 0),   // 橙色
            Color::Rgb(0, 255, 136),   // 绿色
        ],
    }
}

/// 浅色主题
pub fn light_colors() -> ThemeColors {
    ThemeColors {
        bg: Color::Rgb(250, 250, 250),
        bg_secondary: Color::Rgb(230, 230, 230),
        highlight: Color::Rgb(0, 128, 68), // 深绿色
        text: Color::Rgb(30, 30, 30),
        muted: Color::Rgb(120, 120, 120),
        border: Color::Rgb(200, 200, 200),
        drop_target: Color::Rgb(196, 140, 0),
        error: Color::Rgb(200, 40, 40),
        column_accents: [
            Color::Rgb(25, 118, 210),
            Color::Rgb(230, 120, 0),
            Color::Rgb(0, 128, 68),
        ],
    }
}
