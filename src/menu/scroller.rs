//! Maps the panel's scroll offset to the item resting in the center slot.

use super::round_half_up;

/// Vertical scroller over `count` equally sized slots.
///
/// Offset 0 puts the first item in the center slot, each further `pitch`
/// brings the next one there. The offset stays within the scrollable
/// content, like a native scroll view with over-scroll turned off.
#[derive(Debug, Clone)]
pub struct SnapScroller {
    count: usize,
    item_height: f32,
    divider_height: f32,
    offset: f32,
    centered: usize,
}

impl SnapScroller {
    pub fn new(count: usize, item_height: f32, divider_height: f32) -> Self {
        Self {
            count,
            item_height,
            divider_height,
            offset: 0.0,
            centered: 0,
        }
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn pitch(&self) -> f32 {
        self.item_height + self.divider_height
    }

    /// Blank space above the panel; also the largest valid offset
    pub fn top_padding(&self) -> f32 {
        self.count.saturating_sub(1) as f32 * self.pitch()
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Content coordinate currently under the center slot
    pub fn center_offset(&self) -> f32 {
        self.offset + self.top_padding()
    }

    /// Scroll by a relative amount and return the item now centered.
    ///
    /// Only the vertical component moves the panel. Positive `dy` moves
    /// toward later items.
    pub fn scroll_by(&mut self, _dx: f32, dy: f32) -> usize {
        self.offset = (self.offset + dy).clamp(0.0, self.top_padding().max(0.0));
        self.centered = self.selected_index();
        self.centered
    }

    /// Jump so that `index` sits in the center slot.
    pub fn scroll_to_index(&mut self, index: usize) {
        let index = index.min(self.count.saturating_sub(1));
        self.offset = index as f32 * self.pitch();
        self.centered = index;
    }

    /// Index of the slot nearest the center slot, clamped to the item range.
    pub fn selected_index(&self) -> usize {
        let pitch = self.pitch();
        if self.count == 0 || pitch <= 0.0 {
            return 0;
        }
        let slot = round_half_up((self.center_offset() - self.top_padding()) / pitch);
        (slot.max(0) as usize).min(self.count - 1)
    }

    /// Item centered as of the last scroll, drawn on the selected overlay.
    pub fn centered_index(&self) -> usize {
        self.centered
    }

    /// Top of slot `index` relative to the top of the center slot.
    pub fn slot_offset(&self, index: usize) -> f32 {
        index as f32 * self.pitch() - self.offset
    }
}
