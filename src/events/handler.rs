//! Central event handler that routes terminal events to actions.

use std::time::Instant;

use crossterm::event::{Event, KeyEventKind};

use super::Action;
use super::gesture::GestureDetector;
use super::keyboard::handle_key_event;

/// Central event handler for the application.
///
/// Holds the gesture detector, since a gesture spans several mouse events.
#[derive(Debug, Default)]
pub struct EventHandler {
    pub detector: GestureDetector,
}

impl EventHandler {
    pub fn new(detector: GestureDetector) -> Self {
        Self { detector }
    }

    /// Handle a crossterm event (keyboard, mouse) and return the resulting actions.
    pub fn handle_event(&mut self, event: &Event, now: Instant) -> Vec<Action> {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => vec![handle_key_event(*key)],
            Event::Mouse(mouse) => self
                .detector
                .on_mouse(mouse, now)
                .into_iter()
                .map(Action::Gesture)
                .collect(),
            _ => vec![],
        }
    }

    /// Time-based recognition, called from the event loop's timer.
    pub fn tick(&mut self, now: Instant) -> Option<Action> {
        self.detector.tick(now).map(Action::Gesture)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
    use ratatui::layout::Rect;

    use crate::events::CellMetrics;
    use crate::menu::GestureEvent;

    #[test]
    fn test_key_press_maps_to_action() {
        let mut handler = EventHandler::default();
        let event = Event::Key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE));
        assert_eq!(handler.handle_event(&event, Instant::now()), vec![Action::Quit]);
    }

    #[test]
    fn test_mouse_press_maps_to_gesture() {
        let mut handler = EventHandler::default();
        handler
            .detector
            .set_bounds(Rect::new(0, 0, 10, 10), CellMetrics::default());

        let event = Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 3,
            row: 4,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(
            handler.handle_event(&event, Instant::now()),
            vec![Action::Gesture(GestureEvent::PointerDown { x: 3.0, y: 4.0 })]
        );
    }
}
