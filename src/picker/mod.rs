//! Keyboard-style selection over a list of labels.

mod traits;

pub use traits::Picker;
