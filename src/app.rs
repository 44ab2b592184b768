//! Demo application state: one scroller menu filling the terminal.

use ratatui::layout::Rect;

use crate::config::Config;
use crate::events::{Action, CellMetrics, EventHandler, GestureConfig, GestureDetector};
use crate::log;
use crate::menu::{MenuController, MenuListener, Notifier};
use crate::picker::Picker;

/// Terminal columns spanned by one item width.
const ITEM_COLUMNS: f32 = 24.0;

/// Outcome of the most recent gesture, shown in the status line.
#[derive(Debug, Clone, PartialEq)]
pub enum Status {
    Idle,
    Selected { label: String },
    Progressed { label: String, delta: i32 },
}

pub struct App {
    pub menu: MenuController,
    pub handler: EventHandler,
    pub metrics: CellMetrics,
    pub status: Status,
    pub should_quit: bool,
    menu_area: Rect,
}

impl App {
    pub fn new(config: &Config, notifier: Notifier) -> Self {
        let style = config.style();
        let metrics = CellMetrics {
            px_per_col: positive_or_one(style.item_width / ITEM_COLUMNS),
            px_per_row: positive_or_one(style.pitch()),
        };

        let mut menu = MenuController::new(config.items(), style);
        menu.set_listener(notifier);

        Self {
            menu,
            handler: EventHandler::new(GestureDetector::new(GestureConfig::default())),
            metrics,
            status: Status::Idle,
            should_quit: false,
            menu_area: Rect::default(),
        }
    }

    pub fn menu_area(&self) -> Rect {
        self.menu_area
    }

    /// Track the screen area of the control; relayout only when it changed.
    pub fn resize(&mut self, area: Rect) {
        if area == self.menu_area {
            return;
        }
        self.menu_area = area;
        self.handler.detector.set_bounds(area, self.metrics);

        let width = (area.width as f32 * self.metrics.px_per_col).round() as u32;
        let height = (area.height as f32 * self.metrics.px_per_row).round() as u32;
        self.menu.layout(width, height);
        log::log_event(&format!("Menu laid out at {}x{} px", width, height));
    }

    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::SelectNext => self.menu.select_next(),
            Action::SelectPrev => self.menu.select_prev(),
            Action::Gesture(event) => {
                self.menu.handle(event);
            }
            Action::None => {}
        }
    }
}

impl MenuListener for App {
    fn on_menu_item_selected(&mut self, items: &[String], index: usize) {
        let label = items.get(index).cloned().unwrap_or_default();
        log::log_event(&format!("Selected '{}' ({})", label, index));
        self.status = Status::Selected { label };
    }

    fn on_menu_item_progressed(&mut self, items: &[String], index: usize, delta: i32) {
        let label = items.get(index).cloned().unwrap_or_default();
        self.status = Status::Progressed { label, delta };
    }
}

fn positive_or_one(value: f32) -> f32 {
    if value > 0.0 { value } else { 1.0 }
}
