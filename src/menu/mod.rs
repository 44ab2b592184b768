//! The scroller menu control.
//!
//! A vertical drag scrolls a panel of labels and picks the one resting in the
//! center slot on release. A horizontal drag instead reports a progress delta
//! for the currently selected label. Which of the two a gesture means is
//! decided once, from its first movement.

mod controller;
mod input;
mod layout;
mod mode;
mod notify;
mod progress;
mod scroller;

pub use controller::{MenuController, validate_items};
pub use input::GestureEvent;
pub use layout::{MenuLayout, MenuStyle};
pub use mode::{InteractionMode, classify};
pub use notify::{MenuListener, MenuNotification, NotificationQueue, Notifier, channel};
pub use progress::ProgressMapper;
pub use scroller::SnapScroller;

/// Minimum number of labels a menu needs to become interactive.
pub const MIN_ITEMS: usize = 2;

/// Round half toward positive infinity, so -2.5 rounds to -2.
pub(crate) fn round_half_up(value: f32) -> i32 {
    (value + 0.5).floor() as i32
}
