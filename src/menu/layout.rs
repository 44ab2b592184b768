//! Slot geometry derived from the item list and the control size.

use super::round_half_up;

/// Item dimensions (pixels) and appearance of a menu.
///
/// Colors and backgrounds are opaque to the control; the renderer resolves
/// them and falls back to its own defaults when absent.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuStyle {
    pub item_width: f32,
    pub item_height: f32,
    pub divider_height: f32,
    pub text_color: Option<String>,
    pub item_background: Option<String>,
    pub selected_background: Option<String>,
    pub panel_background: Option<String>,
}

impl Default for MenuStyle {
    fn default() -> Self {
        Self {
            item_width: 120.0,
            item_height: 36.0,
            divider_height: 2.0,
            text_color: None,
            item_background: None,
            selected_background: None,
            panel_background: None,
        }
    }
}

impl MenuStyle {
    /// Distance between the tops of two neighbouring slots.
    pub fn pitch(&self) -> f32 {
        self.item_height + self.divider_height
    }
}

/// Where everything sits inside the control, in pixels.
///
/// The scrolling viewport is padded above and below the panel by exactly
/// the distance that brings the last item up to the center slot, so every
/// item can reach it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuLayout {
    pub control_width: u32,
    pub control_height: u32,
    pub item_width: u32,
    pub item_height: u32,
    pub divider_height: u32,
    /// Height of the panel holding all items and dividers
    pub panel_height: u32,
    /// Blank space above and below the panel
    pub padding: u32,
    /// Top edge of the scrolling viewport; negative when it starts above the control
    pub viewport_top: i32,
    pub viewport_height: u32,
    /// Top edge of the selected-item overlay, the center slot
    pub overlay_top: u32,
}

impl MenuLayout {
    pub fn compute(style: &MenuStyle, count: usize, width: u32, height: u32) -> Self {
        let gaps = count.saturating_sub(1) as f32;
        let panel_height = gaps * style.divider_height + count as f32 * style.item_height;
        let padding = gaps * style.item_height + gaps * style.divider_height;

        let padding_px = round_half_up(padding).max(0) as u32;
        let panel_px = round_half_up(panel_height).max(0) as u32;
        let center = round_half_up(height as f32 / 2.0);

        Self {
            control_width: width,
            control_height: height,
            item_width: round_half_up(style.item_width).max(0) as u32,
            item_height: round_half_up(style.item_height).max(0) as u32,
            divider_height: round_half_up(style.divider_height).max(0) as u32,
            panel_height: panel_px,
            padding: padding_px,
            viewport_top: center - padding_px as i32,
            viewport_height: padding_px + panel_px,
            overlay_top: center.max(0) as u32,
        }
    }
}
