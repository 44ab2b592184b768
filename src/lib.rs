//! A picker control that tells a vertical "scroll to select" drag apart from
//! a horizontal "drag to change value" drag, plus a terminal host for it.

pub mod app;
pub mod config;
pub mod error;
pub mod events;
pub mod log;
pub mod menu;
pub mod picker;
pub mod tui;

pub use error::{MenuError, Result};
pub use menu::{GestureEvent, InteractionMode, MenuController, MenuListener, MenuStyle};
