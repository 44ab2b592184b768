//! Deferred delivery of menu notifications.
//!
//! The controller never calls its listener while handling input. It posts a
//! [`MenuNotification`] to a queue instead, and the event loop delivers it on
//! a later turn. Notifications come out in the order they were posted.

use std::sync::Arc;

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::sync::mpsc::error::TryRecvError;

/// Receives the outcome of menu gestures.
pub trait MenuListener {
    /// A scrolling gesture ended with `items[index]` in the center slot.
    fn on_menu_item_selected(&mut self, items: &[String], index: usize);

    /// A progressing gesture moved; `delta` is measured from the gesture start.
    fn on_menu_item_progressed(&mut self, items: &[String], index: usize, delta: i32);
}

/// A notification waiting to be delivered.
#[derive(Debug, Clone, PartialEq)]
pub enum MenuNotification {
    Selected {
        items: Arc<[String]>,
        index: usize,
    },
    Progressed {
        items: Arc<[String]>,
        index: usize,
        delta: i32,
    },
}

impl MenuNotification {
    /// Hand this notification to `listener`.
    pub fn deliver(self, listener: &mut dyn MenuListener) {
        match self {
            MenuNotification::Selected { items, index } => {
                listener.on_menu_item_selected(&items, index);
            }
            MenuNotification::Progressed { items, index, delta } => {
                listener.on_menu_item_progressed(&items, index, delta);
            }
        }
    }
}

/// Posting side, held by the controller.
#[derive(Debug, Clone)]
pub struct Notifier {
    tx: UnboundedSender<MenuNotification>,
}

impl Notifier {
    pub fn post(&self, notification: MenuNotification) {
        if self.tx.send(notification).is_err() {
            crate::log::log_event("Menu notification dropped: queue closed");
        }
    }
}

/// Receiving side, drained by the event loop.
#[derive(Debug)]
pub struct NotificationQueue {
    rx: UnboundedReceiver<MenuNotification>,
}

impl NotificationQueue {
    /// Wait for the next notification.
    pub async fn recv(&mut self) -> Option<MenuNotification> {
        self.rx.recv().await
    }

    /// Take the next notification if one is already queued.
    pub fn try_recv(&mut self) -> Option<MenuNotification> {
        match self.rx.try_recv() {
            Ok(notification) => Some(notification),
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => None,
        }
    }

    /// Deliver everything queued so far and return how many were delivered.
    pub fn dispatch_pending(&mut self, listener: &mut dyn MenuListener) -> usize {
        let mut delivered = 0;
        while let Some(notification) = self.try_recv() {
            notification.deliver(listener);
            delivered += 1;
        }
        delivered
    }
}

/// Create a connected notifier and queue.
pub fn channel() -> (Notifier, NotificationQueue) {
    let (tx, rx) = mpsc::unbounded_channel();
    (Notifier { tx }, NotificationQueue { rx })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        calls: Vec<String>,
    }

    impl MenuListener for Recorder {
        fn on_menu_item_selected(&mut self, items: &[String], index: usize) {
            self.calls.push(format!("selected {}", items[index]));
        }

        fn on_menu_item_progressed(&mut self, items: &[String], index: usize, delta: i32) {
            self.calls.push(format!("progressed {} {}", items[index], delta));
        }
    }

    fn items() -> Arc<[String]> {
        Arc::from(vec!["a".to_string(), "b".to_string()])
    }

    #[test]
    fn test_delivers_in_post_order() {
        let (notifier, mut queue) = channel();
        notifier.post(MenuNotification::Progressed { items: items(), index: 0, delta: 3 });
        notifier.post(MenuNotification::Progressed { items: items(), index: 0, delta: 7 });
        notifier.post(MenuNotification::Selected { items: items(), index: 1 });

        let mut recorder = Recorder::default();
        assert_eq!(queue.dispatch_pending(&mut recorder), 3);
        assert_eq!(
            recorder.calls,
            vec!["progressed a 3", "progressed a 7", "selected b"]
        );
    }

    #[test]
    fn test_post_after_queue_dropped() {
        let (notifier, queue) = channel();
        drop(queue);
        notifier.post(MenuNotification::Selected { items: items(), index: 0 });
    }

    #[test]
    fn test_empty_queue() {
        let (_notifier, mut queue) = channel();
        assert!(queue.try_recv().is_none());
    }
}
