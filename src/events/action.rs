//! Action enum for decoupling input handling from state changes.

use crate::menu::GestureEvent;

/// Actions that can be dispatched from event handlers.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Quit the application
    Quit,
    /// Select the next menu item without a gesture
    SelectNext,
    /// Select the previous menu item without a gesture
    SelectPrev,
    /// Pointer input for the menu control
    Gesture(GestureEvent),
    /// No action
    None,
}
