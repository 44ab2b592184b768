//! Gesture state machine for the scroller menu.

use std::sync::Arc;

use crate::error::{MenuError, Result};
use crate::log;
use crate::picker::Picker;

use super::input::GestureEvent;
use super::layout::{MenuLayout, MenuStyle};
use super::mode::{InteractionMode, classify};
use super::notify::{MenuNotification, Notifier};
use super::progress::ProgressMapper;
use super::scroller::SnapScroller;
use super::MIN_ITEMS;

/// Check that a label list can back an interactive menu.
pub fn validate_items(items: &[String]) -> Result<()> {
    if items.len() < MIN_ITEMS {
        return Err(MenuError::TooFewItems { count: items.len() });
    }
    Ok(())
}

/// Geometry that exists only once the control has a size and enough items.
#[derive(Debug, Clone)]
struct Interactive {
    layout: MenuLayout,
    scroller: SnapScroller,
    progress: ProgressMapper,
}

/// Owns the interaction state of one scroller menu.
///
/// Feed it gesture input with [`MenuController::handle`]. Until
/// [`MenuController::layout`] has been called with a list of at least two
/// items the control is inert and ignores all input.
#[derive(Debug)]
pub struct MenuController {
    items: Arc<[String]>,
    style: MenuStyle,
    size: Option<(u32, u32)>,
    interactive: Option<Interactive>,
    mode: InteractionMode,
    selected: usize,
    panel_visible: bool,
    /// Pointer displacement since the gesture started
    displacement: (f32, f32),
    notifier: Option<Notifier>,
}

impl MenuController {
    pub fn new(items: Vec<String>, style: MenuStyle) -> Self {
        Self {
            items: Arc::from(items),
            style,
            size: None,
            interactive: None,
            mode: InteractionMode::None,
            selected: 0,
            panel_visible: false,
            displacement: (0.0, 0.0),
            notifier: None,
        }
    }

    /// Register where notifications get posted. Replaces any previous one.
    pub fn set_listener(&mut self, notifier: Notifier) {
        self.notifier = Some(notifier);
    }

    pub fn clear_listener(&mut self) {
        self.notifier = None;
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// Replace the labels. Resets the selection and rebuilds geometry.
    pub fn set_items(&mut self, items: Vec<String>) {
        self.items = Arc::from(items);
        self.selected = 0;
        self.relayout();
    }

    pub fn style(&self) -> &MenuStyle {
        &self.style
    }

    pub fn set_style(&mut self, style: MenuStyle) {
        self.style = style;
        self.relayout();
    }

    pub fn set_item_width(&mut self, width: f32) {
        self.style.item_width = width;
        self.relayout();
    }

    pub fn set_item_height(&mut self, height: f32) {
        self.style.item_height = height;
        self.relayout();
    }

    pub fn set_text_color(&mut self, color: Option<String>) {
        self.style.text_color = color;
    }

    /// The control was given a new size; derive slot geometry for it.
    pub fn layout(&mut self, width: u32, height: u32) {
        self.size = Some((width, height));
        self.relayout();
    }

    fn relayout(&mut self) {
        self.interactive = None;
        self.reset_gesture();

        let Some((width, height)) = self.size else {
            return;
        };

        if let Err(e) = validate_items(&self.items) {
            log::log_error(&format!("Menu items are not provided: {}", e));
            return;
        }

        let count = self.items.len();
        self.selected = self.selected.min(count - 1);

        let mut scroller =
            SnapScroller::new(count, self.style.item_height, self.style.divider_height);
        scroller.scroll_to_index(self.selected);

        self.interactive = Some(Interactive {
            layout: MenuLayout::compute(&self.style, count, width, height),
            scroller,
            progress: ProgressMapper::new(width),
        });
    }

    /// Whether the control reacts to input at all.
    pub fn is_interactive(&self) -> bool {
        self.interactive.is_some()
    }

    pub fn layout_info(&self) -> Option<&MenuLayout> {
        self.interactive.as_ref().map(|i| &i.layout)
    }

    pub fn scroller(&self) -> Option<&SnapScroller> {
        self.interactive.as_ref().map(|i| &i.scroller)
    }

    pub fn mode(&self) -> InteractionMode {
        self.mode
    }

    pub fn is_panel_visible(&self) -> bool {
        self.panel_visible
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    /// Select an item directly. Clamped to the item range, posts nothing.
    pub fn set_selected_index(&mut self, index: usize) {
        if self.items.is_empty() {
            return;
        }
        self.selected = index.min(self.items.len() - 1);
        if let Some(interactive) = self.interactive.as_mut() {
            interactive.scroller.scroll_to_index(self.selected);
        }
    }

    /// Label shown on the selected overlay: whatever sits in the center slot.
    pub fn centered_label(&self) -> Option<&str> {
        let index = self
            .scroller()
            .map(SnapScroller::centered_index)
            .unwrap_or(self.selected);
        self.items.get(index).map(String::as_str)
    }

    /// React to one input event. Returns whether the event was consumed.
    pub fn handle(&mut self, event: GestureEvent) -> bool {
        if !self.is_interactive() {
            return false;
        }

        match event {
            GestureEvent::PointerDown { .. } => {
                // A press without a release ends whatever gesture came before
                self.reset_gesture();
                true
            }
            GestureEvent::PointerMove { dx, dy } => {
                self.on_move(dx, dy);
                true
            }
            GestureEvent::PointerUp { .. } => {
                self.on_release();
                false
            }
            GestureEvent::Fling { .. } => false,
            GestureEvent::LongPress | GestureEvent::SingleTap => false,
        }
    }

    fn on_move(&mut self, dx: f32, dy: f32) {
        self.displacement.0 += dx;
        self.displacement.1 += dy;

        if self.mode.is_none() {
            if dx == 0.0 && dy == 0.0 {
                return;
            }
            self.mode = classify(dx, dy);
            log::debug(&format!("Gesture committed to {:?}", self.mode));
        }

        let Some(interactive) = self.interactive.as_mut() else {
            return;
        };

        match self.mode {
            InteractionMode::Progressing => {
                self.panel_visible = false;
                let delta = interactive.progress.delta(self.displacement.0);
                self.notify_progressed(delta);
            }
            InteractionMode::Scrolling => {
                self.panel_visible = true;
                interactive.scroller.scroll_by(dx, dy);
            }
            InteractionMode::None => {}
        }
    }

    fn on_release(&mut self) {
        if self.mode.is_scrolling() {
            if let Some(interactive) = self.interactive.as_ref() {
                self.selected = interactive.scroller.selected_index();
            }
            self.notify_selected();
        }
        self.reset_gesture();
    }

    fn reset_gesture(&mut self) {
        self.mode = InteractionMode::None;
        self.panel_visible = false;
        self.displacement = (0.0, 0.0);
    }

    fn notify_progressed(&self, delta: i32) {
        log::debug(&format!(
            "Progress changed by: {} for menu item: {}",
            delta, self.items[self.selected]
        ));

        if let Some(notifier) = &self.notifier {
            notifier.post(MenuNotification::Progressed {
                items: Arc::clone(&self.items),
                index: self.selected,
                delta,
            });
        }
    }

    fn notify_selected(&self) {
        log::debug(&format!("Menu item selected is: {}", self.items[self.selected]));

        if let Some(notifier) = &self.notifier {
            notifier.post(MenuNotification::Selected {
                items: Arc::clone(&self.items),
                index: self.selected,
            });
        }
    }
}

impl Picker for MenuController {
    type Item = String;

    fn items(&self) -> &[Self::Item] {
        &self.items
    }

    fn selected_index(&self) -> usize {
        self.selected
    }

    fn set_selected_index(&mut self, index: usize) {
        MenuController::set_selected_index(self, index);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::notify::{NotificationQueue, channel};

    fn labels(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("item {}", i)).collect()
    }

    fn ready(n: usize) -> (MenuController, NotificationQueue) {
        let mut menu = MenuController::new(labels(n), MenuStyle::default());
        let (notifier, queue) = channel();
        menu.set_listener(notifier);
        menu.layout(200, 400);
        (menu, queue)
    }

    fn drain(queue: &mut NotificationQueue) -> Vec<MenuNotification> {
        std::iter::from_fn(|| queue.try_recv()).collect()
    }

    fn down(menu: &mut MenuController) {
        menu.handle(GestureEvent::PointerDown { x: 100.0, y: 200.0 });
    }

    fn drag(menu: &mut MenuController, dx: f32, dy: f32) {
        menu.handle(GestureEvent::PointerMove { dx, dy });
    }

    fn up(menu: &mut MenuController) {
        menu.handle(GestureEvent::PointerUp { x: 100.0, y: 200.0 });
    }

    #[test]
    fn test_horizontal_drag_only_progresses() {
        let (mut menu, mut queue) = ready(5);

        down(&mut menu);
        drag(&mut menu, 5.0, 0.0);
        assert!(!menu.is_panel_visible());
        drag(&mut menu, 5.0, 0.0);
        assert!(!menu.is_panel_visible());
        up(&mut menu);

        let sent = drain(&mut queue);
        assert_eq!(sent.len(), 2);
        assert!(sent.iter().all(|n| matches!(n, MenuNotification::Progressed { .. })));
        assert!(!menu.is_panel_visible());
        assert!(menu.mode().is_none());
    }

    #[test]
    fn test_progress_from_gesture_start() {
        let (mut menu, mut queue) = ready(3);
        down(&mut menu);
        drag(&mut menu, -10.0, 0.0);
        drag(&mut menu, -10.0, 0.0);
        up(&mut menu);
        let stepped = drain(&mut queue);

        down(&mut menu);
        drag(&mut menu, -20.0, 0.0);
        up(&mut menu);
        let single = drain(&mut queue);

        let last_delta = |sent: &[MenuNotification]| match sent.last() {
            Some(MenuNotification::Progressed { delta, .. }) => *delta,
            other => panic!("unexpected {:?}", other),
        };
        assert_eq!(last_delta(&stepped[..]), 20);
        assert_eq!(last_delta(&stepped[..]), last_delta(&single[..]));
    }

    #[test]
    fn test_progress_carries_committed_index() {
        let (mut menu, mut queue) = ready(4);
        menu.set_selected_index(2);

        down(&mut menu);
        drag(&mut menu, -50.0, 0.0);
        up(&mut menu);

        match drain(&mut queue).as_slice() {
            [MenuNotification::Progressed { index, delta, items }] => {
                assert_eq!(*index, 2);
                assert_eq!(*delta, 50);
                assert_eq!(items.len(), 4);
            }
            other => panic!("unexpected {:?}", other),
        }
        assert_eq!(menu.selected_index(), 2);
    }

    #[test]
    fn test_vertical_drag_selects_on_release() {
        let (mut menu, mut queue) = ready(5);

        down(&mut menu);
        drag(&mut menu, 0.0, 38.0);
        assert!(menu.mode().is_scrolling());
        assert!(menu.is_panel_visible());
        assert_eq!(menu.selected_index(), 0);
        assert!(drain(&mut queue).is_empty());
        up(&mut menu);

        assert_eq!(menu.selected_index(), 1);
        assert!(!menu.is_panel_visible());
        match drain(&mut queue).as_slice() {
            [MenuNotification::Selected { index, .. }] => assert_eq!(*index, 1),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_mode_is_irrevocable() {
        let (mut menu, mut queue) = ready(5);

        down(&mut menu);
        drag(&mut menu, 0.0, 10.0);
        drag(&mut menu, 80.0, 0.0);
        drag(&mut menu, -80.0, 1.0);
        assert!(menu.mode().is_scrolling());
        assert!(drain(&mut queue).is_empty());
        up(&mut menu);

        down(&mut menu);
        drag(&mut menu, 10.0, 0.0);
        drag(&mut menu, 0.0, 80.0);
        assert!(menu.mode().is_progressing());
        assert!(!menu.is_panel_visible());
        up(&mut menu);

        let sent = drain(&mut queue);
        assert_eq!(sent.len(), 3);
        assert!(matches!(sent[0], MenuNotification::Selected { .. }));
        assert!(matches!(sent[2], MenuNotification::Progressed { delta: -10, .. }));
    }

    #[test]
    fn test_down_resets_stale_mode() {
        let (mut menu, mut queue) = ready(5);

        down(&mut menu);
        drag(&mut menu, 0.0, 10.0);
        assert!(menu.mode().is_scrolling());

        down(&mut menu);
        assert!(menu.mode().is_none());
        assert!(!menu.is_panel_visible());

        drag(&mut menu, -50.0, 0.0);
        assert!(menu.mode().is_progressing());
        assert!(!menu.is_panel_visible());

        match drain(&mut queue).as_slice() {
            [MenuNotification::Progressed { delta, .. }] => assert_eq!(*delta, 50),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_zero_move_does_not_commit() {
        let (mut menu, _queue) = ready(3);
        down(&mut menu);
        drag(&mut menu, 0.0, 0.0);
        assert!(menu.mode().is_none());
    }

    #[test]
    fn test_single_item_is_inert() {
        let (mut menu, mut queue) = ready(1);
        assert!(!menu.is_interactive());

        down(&mut menu);
        drag(&mut menu, 0.0, 40.0);
        up(&mut menu);
        down(&mut menu);
        drag(&mut menu, 40.0, 0.0);
        up(&mut menu);

        assert!(drain(&mut queue).is_empty());
        assert!(!menu.is_panel_visible());
    }

    #[test]
    fn test_inert_before_layout() {
        let mut menu = MenuController::new(labels(3), MenuStyle::default());
        assert!(!menu.handle(GestureEvent::PointerDown { x: 0.0, y: 0.0 }));
    }

    #[test]
    fn test_fling_tap_and_long_press_are_ignored() {
        let (mut menu, mut queue) = ready(3);
        down(&mut menu);
        assert!(!menu.handle(GestureEvent::LongPress));
        assert!(!menu.handle(GestureEvent::SingleTap));
        assert!(!menu.handle(GestureEvent::Fling { velocity_x: 0.0, velocity_y: 5000.0 }));
        up(&mut menu);

        assert!(menu.mode().is_none());
        assert_eq!(menu.selected_index(), 0);
        assert!(drain(&mut queue).is_empty());
    }

    #[test]
    fn test_set_selected_index_posts_nothing() {
        let (mut menu, mut queue) = ready(5);
        menu.set_selected_index(3);
        assert_eq!(menu.selected_index(), 3);
        assert_eq!(menu.centered_label(), Some("item 3"));

        menu.set_selected_index(42);
        assert_eq!(menu.selected_index(), 4);
        assert!(drain(&mut queue).is_empty());
    }

    #[test]
    fn test_scroll_starts_from_selected_item() {
        let (mut menu, mut queue) = ready(5);
        menu.set_selected_index(2);

        down(&mut menu);
        drag(&mut menu, 0.0, 38.0);
        up(&mut menu);

        assert_eq!(menu.selected_index(), 3);
        assert_eq!(drain(&mut queue).len(), 1);
    }

    #[test]
    fn test_set_items_resets_selection() {
        let (mut menu, _queue) = ready(5);
        menu.set_selected_index(4);

        menu.set_items(labels(3));
        assert!(menu.is_interactive());
        assert_eq!(menu.selected_index(), 0);
        assert_eq!(menu.scroller().map(SnapScroller::count), Some(3));

        menu.set_items(labels(1));
        assert!(!menu.is_interactive());
    }

    #[test]
    fn test_no_listener_still_commits() {
        let mut menu = MenuController::new(labels(5), MenuStyle::default());
        menu.layout(200, 400);

        down(&mut menu);
        drag(&mut menu, 0.0, 76.0);
        up(&mut menu);

        assert_eq!(menu.selected_index(), 2);
    }

    #[test]
    fn test_picker_navigation() {
        let (mut menu, mut queue) = ready(3);
        menu.select_prev();
        assert_eq!(Picker::selected_index(&menu), 2);
        menu.select_next();
        assert_eq!(menu.selected_item().map(String::as_str), Some("item 0"));
        assert!(drain(&mut queue).is_empty());
    }

    #[test]
    fn test_validate_items() {
        assert!(validate_items(&labels(2)).is_ok());
        assert!(matches!(
            validate_items(&labels(0)),
            Err(MenuError::TooFewItems { count: 0 })
        ));
    }
}
