//! Terminal rendering of the menu control.

pub mod theme;
pub mod ui;
