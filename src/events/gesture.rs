//! Gesture detection over terminal mouse events.
//!
//! Watches left-button press, drag and release inside the control's bounds
//! and reports them as [`GestureEvent`]s, measuring in control pixels rather
//! than terminal cells.

use std::time::{Duration, Instant};

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};

use crate::menu::GestureEvent;

/// How many control pixels one terminal cell spans.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellMetrics {
    pub px_per_col: f32,
    pub px_per_row: f32,
}

impl Default for CellMetrics {
    fn default() -> Self {
        Self {
            px_per_col: 1.0,
            px_per_row: 1.0,
        }
    }
}

/// Configuration for gesture recognition.
#[derive(Debug, Clone)]
pub struct GestureConfig {
    /// Hold still this long after press to recognize a long press
    pub long_press_timeout: Duration,
    /// Release speed (pixels per second) above which a release is a fling
    pub min_fling_velocity: f32,
    /// A release this long after the last drag sample carries no velocity
    pub fling_window: Duration,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            long_press_timeout: Duration::from_millis(500),
            min_fling_velocity: 1500.0,
            fling_window: Duration::from_millis(100),
        }
    }
}

/// A left-button press in progress.
#[derive(Debug, Clone)]
struct Press {
    pressed_at: Instant,
    last: (u16, u16),
    last_at: Instant,
    /// Pixels per second over the most recent drag sample
    velocity: (f32, f32),
    moved: bool,
    long_pressed: bool,
}

/// Turns mouse events into menu gestures.
#[derive(Debug, Default)]
pub struct GestureDetector {
    config: GestureConfig,
    bounds: Rect,
    metrics: CellMetrics,
    press: Option<Press>,
}

impl GestureDetector {
    pub fn new(config: GestureConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    /// Where the control sits on screen and how big its cells are.
    pub fn set_bounds(&mut self, bounds: Rect, metrics: CellMetrics) {
        self.bounds = bounds;
        self.metrics = metrics;
    }

    pub fn is_pressed(&self) -> bool {
        self.press.is_some()
    }

    fn to_control(&self, column: u16, row: u16) -> (f32, f32) {
        (
            column.saturating_sub(self.bounds.x) as f32 * self.metrics.px_per_col,
            row.saturating_sub(self.bounds.y) as f32 * self.metrics.px_per_row,
        )
    }

    /// Feed one mouse event; returns the gestures it completes, in order.
    pub fn on_mouse(&mut self, mouse: &MouseEvent, now: Instant) -> Vec<GestureEvent> {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => self.on_down(mouse, now),
            MouseEventKind::Drag(MouseButton::Left) => self.on_drag(mouse, now),
            MouseEventKind::Up(MouseButton::Left) => self.on_up(mouse, now),
            _ => vec![],
        }
    }

    fn on_down(&mut self, mouse: &MouseEvent, now: Instant) -> Vec<GestureEvent> {
        if !self.bounds.contains(Position::new(mouse.column, mouse.row)) {
            self.press = None;
            return vec![];
        }

        self.press = Some(Press {
            pressed_at: now,
            last: (mouse.column, mouse.row),
            last_at: now,
            velocity: (0.0, 0.0),
            moved: false,
            long_pressed: false,
        });

        let (x, y) = self.to_control(mouse.column, mouse.row);
        vec![GestureEvent::PointerDown { x, y }]
    }

    fn on_drag(&mut self, mouse: &MouseEvent, now: Instant) -> Vec<GestureEvent> {
        let metrics = self.metrics;
        let Some(press) = self.press.as_mut() else {
            return vec![];
        };

        let dx = (mouse.column as f32 - press.last.0 as f32) * metrics.px_per_col;
        let dy = (mouse.row as f32 - press.last.1 as f32) * metrics.px_per_row;
        if dx == 0.0 && dy == 0.0 {
            return vec![];
        }

        let elapsed = now.saturating_duration_since(press.last_at).as_secs_f32();
        press.velocity = if elapsed > 0.0 {
            (dx / elapsed, dy / elapsed)
        } else {
            (0.0, 0.0)
        };
        press.last = (mouse.column, mouse.row);
        press.last_at = now;
        press.moved = true;

        vec![GestureEvent::PointerMove { dx, dy }]
    }

    fn on_up(&mut self, mouse: &MouseEvent, now: Instant) -> Vec<GestureEvent> {
        let Some(press) = self.press.take() else {
            return vec![];
        };

        let mut events = vec![];
        let recent = now.saturating_duration_since(press.last_at) <= self.config.fling_window;
        let (vx, vy) = press.velocity;
        if press.moved && recent && vx.abs().max(vy.abs()) > self.config.min_fling_velocity {
            events.push(GestureEvent::Fling {
                velocity_x: vx,
                velocity_y: vy,
            });
        }
        if !press.moved && !press.long_pressed {
            events.push(GestureEvent::SingleTap);
        }

        let (x, y) = self.to_control(mouse.column, mouse.row);
        events.push(GestureEvent::PointerUp { x, y });
        events
    }

    /// Report a long press once the pointer has been held still long enough.
    pub fn tick(&mut self, now: Instant) -> Option<GestureEvent> {
        let timeout = self.config.long_press_timeout;
        let press = self.press.as_mut()?;
        if press.moved || press.long_pressed {
            return None;
        }
        if now.saturating_duration_since(press.pressed_at) >= timeout {
            press.long_pressed = true;
            return Some(GestureEvent::LongPress);
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn detector() -> GestureDetector {
        let mut detector = GestureDetector::new(GestureConfig::default());
        detector.set_bounds(
            Rect::new(10, 5, 20, 10),
            CellMetrics {
                px_per_col: 8.0,
                px_per_row: 38.0,
            },
        );
        detector
    }

    const LEFT: MouseButton = MouseButton::Left;

    #[test]
    fn test_drag_reports_scaled_deltas() {
        let mut detector = detector();
        let t0 = Instant::now();

        let down = detector.on_mouse(&mouse(MouseEventKind::Down(LEFT), 12, 6), t0);
        assert_eq!(down, vec![GestureEvent::PointerDown { x: 16.0, y: 38.0 }]);

        let t1 = t0 + Duration::from_millis(200);
        let moved = detector.on_mouse(&mouse(MouseEventKind::Drag(LEFT), 13, 8), t1);
        assert_eq!(moved, vec![GestureEvent::PointerMove { dx: 8.0, dy: 76.0 }]);

        let t2 = t1 + Duration::from_millis(500);
        let up = detector.on_mouse(&mouse(MouseEventKind::Up(LEFT), 13, 8), t2);
        assert_eq!(up, vec![GestureEvent::PointerUp { x: 24.0, y: 114.0 }]);
        assert!(!detector.is_pressed());
    }

    #[test]
    fn test_press_outside_bounds_ignored() {
        let mut detector = detector();
        let t0 = Instant::now();
        assert!(detector.on_mouse(&mouse(MouseEventKind::Down(LEFT), 0, 0), t0).is_empty());
        assert!(detector.on_mouse(&mouse(MouseEventKind::Drag(LEFT), 1, 1), t0).is_empty());
        assert!(detector.on_mouse(&mouse(MouseEventKind::Up(LEFT), 1, 1), t0).is_empty());
    }

    #[test]
    fn test_tap() {
        let mut detector = detector();
        let t0 = Instant::now();
        detector.on_mouse(&mouse(MouseEventKind::Down(LEFT), 12, 6), t0);
        let up = detector.on_mouse(&mouse(MouseEventKind::Up(LEFT), 12, 6), t0);
        assert_eq!(up.len(), 2);
        assert_eq!(up[0], GestureEvent::SingleTap);
        assert!(matches!(up[1], GestureEvent::PointerUp { .. }));
    }

    #[test]
    fn test_fast_release_is_fling() {
        let mut detector = detector();
        let t0 = Instant::now();
        detector.on_mouse(&mouse(MouseEventKind::Down(LEFT), 12, 6), t0);
        let t1 = t0 + Duration::from_millis(10);
        detector.on_mouse(&mouse(MouseEventKind::Drag(LEFT), 12, 9), t1);
        let up = detector.on_mouse(&mouse(MouseEventKind::Up(LEFT), 12, 9), t1);

        assert!(matches!(up[0], GestureEvent::Fling { velocity_y, .. } if velocity_y > 1500.0));
        assert!(matches!(up.last(), Some(GestureEvent::PointerUp { .. })));
    }

    #[test]
    fn test_long_press_fires_once() {
        let mut detector = detector();
        let t0 = Instant::now();
        detector.on_mouse(&mouse(MouseEventKind::Down(LEFT), 12, 6), t0);

        assert!(detector.tick(t0 + Duration::from_millis(100)).is_none());
        assert_eq!(
            detector.tick(t0 + Duration::from_millis(600)),
            Some(GestureEvent::LongPress)
        );
        assert!(detector.tick(t0 + Duration::from_millis(900)).is_none());

        let up = detector.on_mouse(&mouse(MouseEventKind::Up(LEFT), 12, 6), t0);
        assert_eq!(up.len(), 1);
    }
}
