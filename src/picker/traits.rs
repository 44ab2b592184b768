//! Picker trait definition

/// Step-wise selection over a list, as driven by arrow keys.
///
/// Implementors supply the list and raw index access; stepping wraps around
/// at both ends. Moving through a picker is a programmatic selection, so
/// implementors should not report it as a user gesture.
pub trait Picker {
    /// The type of items in the picker
    type Item;

    fn items(&self) -> &[Self::Item];

    fn selected_index(&self) -> usize;

    fn set_selected_index(&mut self, index: usize);

    fn len(&self) -> usize {
        self.items().len()
    }

    fn is_empty(&self) -> bool {
        self.items().is_empty()
    }

    /// Select the next item (wraps around)
    fn select_next(&mut self) {
        if !self.is_empty() {
            let next = (self.selected_index() + 1) % self.len();
            self.set_selected_index(next);
        }
    }

    /// Select the previous item (wraps around)
    fn select_prev(&mut self) {
        if !self.is_empty() {
            let prev = self
                .selected_index()
                .checked_sub(1)
                .unwrap_or(self.len() - 1);
            self.set_selected_index(prev);
        }
    }

    fn selected_item(&self) -> Option<&Self::Item> {
        self.items().get(self.selected_index())
    }
}
