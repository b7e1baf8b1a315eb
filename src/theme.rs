//! Application-wide theme system
//!
//! A handful of built-in themes covering every color the shell renders.
//! The active theme is selected by name in the configuration and can be
//! cycled at runtime.

use ratatui::style::Color;
use std::collections::HashMap;

/// Complete application theme defining all UI colors
#[derive(Debug, Clone)]
pub struct AppTheme {
    pub name: String,
    pub description: String,

    // Shell chrome
    pub window_border: Color,
    pub window_title: Color,
    pub background_primary: Color,

    // Tab row
    pub tab_active: Color,
    pub tab_inactive: Color,

    // Text
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_heading: Color,

    // Finance amounts
    pub amount_positive: Color,
    pub amount_negative: Color,

    // Selectable action rows
    pub action_normal: Color,
    pub action_selected_fg: Color,
    pub action_selected_bg: Color,

    // Status bar
    pub status_text: Color,
    pub status_error: Color,
    pub status_background: Color,
}

/// Built-in theme presets
pub struct ThemePresets;

impl ThemePresets {
    /// All built-in themes keyed by the name used in the configuration
    pub fn all() -> HashMap<String, AppTheme> {
        let mut themes = HashMap::new();
        themes.insert("dark".to_string(), Self::dark());
        themes.insert("light".to_string(), Self::light());
        themes.insert("mint".to_string(), Self::mint());
        themes
    }

    /// Theme names in a stable order (for cycling)
    pub fn names() -> Vec<&'static str> {
        vec!["dark", "light", "mint"]
    }

    /// Default dark theme
    pub fn dark() -> AppTheme {
        AppTheme {
            name: "Dark".to_string(),
            description: "Classic dark theme with cyan accents".to_string(),

            window_border: Color::Cyan,
            window_title: Color::White,
            background_primary: Color::Black,

            tab_active: Color::Yellow,
            tab_inactive: Color::Gray,

            text_primary: Color::White,
            text_secondary: Color::Gray,
            text_heading: Color::Cyan,

            amount_positive: Color::Rgb(30, 185, 128),
            amount_negative: Color::Rgb(255, 104, 89),

            action_normal: Color::Rgb(71, 122, 179),
            action_selected_fg: Color::Black,
            action_selected_bg: Color::Yellow,

            status_text: Color::Gray,
            status_error: Color::Red,
            status_background: Color::Rgb(20, 20, 20),
        }
    }

    /// Light theme for daytime use
    pub fn light() -> AppTheme {
        AppTheme {
            name: "Light".to_string(),
            description: "Bright light theme for daytime use".to_string(),

            window_border: Color::Blue,
            window_title: Color::Black,
            background_primary: Color::White,

            tab_active: Color::Rgb(255, 140, 0),
            tab_inactive: Color::Rgb(120, 120, 120),

            text_primary: Color::Black,
            text_secondary: Color::Rgb(80, 80, 80),
            text_heading: Color::Blue,

            amount_positive: Color::Rgb(0, 128, 64),
            amount_negative: Color::Rgb(200, 32, 32),

            action_normal: Color::Blue,
            action_selected_fg: Color::White,
            action_selected_bg: Color::Rgb(255, 140, 0),

            status_text: Color::Rgb(80, 80, 80),
            status_error: Color::Red,
            status_background: Color::Rgb(235, 235, 235),
        }
    }

    /// Green-accented theme in the spirit of material finance dashboards
    pub fn mint() -> AppTheme {
        AppTheme {
            name: "Mint".to_string(),
            description: "Dark green theme with mint accents".to_string(),

            window_border: Color::Rgb(30, 185, 128),
            window_title: Color::White,
            background_primary: Color::Rgb(18, 24, 20),

            tab_active: Color::Rgb(30, 185, 128),
            tab_inactive: Color::Rgb(96, 112, 104),

            text_primary: Color::Rgb(230, 240, 235),
            text_secondary: Color::Rgb(140, 160, 150),
            text_heading: Color::Rgb(30, 185, 128),

            amount_positive: Color::Rgb(30, 185, 128),
            amount_negative: Color::Rgb(255, 104, 89),

            action_normal: Color::Rgb(102, 187, 255),
            action_selected_fg: Color::Rgb(18, 24, 20),
            action_selected_bg: Color::Rgb(30, 185, 128),

            status_text: Color::Rgb(140, 160, 150),
            status_error: Color::Rgb(255, 104, 89),
            status_background: Color::Rgb(24, 32, 27),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_named_preset_exists() {
        let themes = ThemePresets::all();
        for name in ThemePresets::names() {
            assert!(themes.contains_key(name), "missing preset '{}'", name);
        }
        assert_eq!(themes.len(), ThemePresets::names().len());
    }
}
