//! Event handling: terminal keyboard and mouse input turned into actions.
//!
//! Mouse input goes through a [`GestureDetector`] that plays the part of the
//! platform gesture recognizer, producing the pointer vocabulary the menu
//! control understands.

mod action;
mod gesture;
mod handler;
mod keyboard;

pub use action::Action;
pub use gesture::{CellMetrics, GestureConfig, GestureDetector};
pub use handler::EventHandler;
