use std::str::FromStr;

use ratatui::style::Color;

use crate::menu::MenuStyle;

pub const LOGO_GOLD: Color = Color::Rgb(219, 171, 121);      // #DBAB79
pub const LOGO_LIGHT_BLUE: Color = Color::Rgb(124, 175, 194); // #7CAFC2

// UI colors
pub const TEXT_DIM: Color = Color::Rgb(136, 136, 136);        // #888888
pub const TEXT_WHITE: Color = Color::Rgb(255, 255, 255);      // #FFFFFF
pub const ITEM_GRAY: Color = Color::Rgb(58, 58, 58);          // #3A3A3A
pub const PANEL_DARK: Color = Color::Rgb(28, 28, 28);         // #1C1C1C

/// Colors resolved from a menu style, with fallbacks for anything unset or unparsable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MenuTheme {
    pub text: Color,
    pub item_background: Color,
    pub selected_background: Color,
    pub panel_background: Color,
}

impl MenuTheme {
    pub fn from_style(style: &MenuStyle) -> Self {
        Self {
            text: resolve(&style.text_color, TEXT_WHITE),
            item_background: resolve(&style.item_background, ITEM_GRAY),
            selected_background: resolve(&style.selected_background, LOGO_LIGHT_BLUE),
            panel_background: resolve(&style.panel_background, PANEL_DARK),
        }
    }
}

fn resolve(name: &Option<String>, fallback: Color) -> Color {
    name.as_deref()
        .and_then(|s| Color::from_str(s).ok())
        .unwrap_or(fallback)
}
