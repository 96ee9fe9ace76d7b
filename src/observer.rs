//! Notification contexts and the observer registry.

use serde::{Deserialize, Serialize};

/// Identifies which model event an observer is being told about.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display,
)]
pub enum NotificationContext {
    /// A new game was created.
    CreateNewGame,
    /// A chip was dropped on the board.
    ChipDropped,
    /// The active player completed a winning line.
    GameWon,
    /// The board filled up with no winner.
    GameTied,
    /// The current game was ended and its state discarded.
    GameEnded,
    /// The current game was restarted with the same configuration.
    GameReinitialized,
}

/// Handle returned by [`Subject::attach`], used to detach later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subscription(u64);

/// Fan-out registry of observers.
///
/// Dispatch is synchronous and in attach order: a notification is fully
/// delivered to every observer before the triggering call returns, and a
/// single action never produces overlapping notification sequences.
#[derive(Default)]
pub struct Subject {
    observers: Vec<(u64, Box<dyn FnMut(NotificationContext)>)>,
    next_id: u64,
}

impl std::fmt::Debug for Subject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subject")
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl Subject {
    /// Creates a registry with no observers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an observer and returns its detach handle.
    pub fn attach(&mut self, observer: impl FnMut(NotificationContext) + 'static) -> Subscription {
        let id = self.next_id;
        self.next_id += 1;
        self.observers.push((id, Box::new(observer)));
        Subscription(id)
    }

    /// Removes a previously attached observer. Unknown handles are ignored.
    pub fn detach(&mut self, subscription: Subscription) {
        self.observers.retain(|(id, _)| *id != subscription.0);
    }

    /// Number of attached observers.
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Delivers `context` to every observer, in attach order.
    pub fn notify(&mut self, context: NotificationContext) {
        for (_, observer) in &mut self.observers {
            observer(context);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_notify_reaches_observers_in_attach_order() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut subject = Subject::new();

        for tag in ["first", "second"] {
            let seen = Rc::clone(&seen);
            subject.attach(move |context| seen.borrow_mut().push((tag, context)));
        }

        subject.notify(NotificationContext::ChipDropped);

        assert_eq!(
            *seen.borrow(),
            vec![
                ("first", NotificationContext::ChipDropped),
                ("second", NotificationContext::ChipDropped),
            ]
        );
    }

    #[test]
    fn test_detached_observer_is_not_notified() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut subject = Subject::new();

        let subscription = {
            let seen = Rc::clone(&seen);
            subject.attach(move |context| seen.borrow_mut().push(context))
        };

        subject.notify(NotificationContext::GameWon);
        subject.detach(subscription);
        subject.notify(NotificationContext::GameTied);

        assert_eq!(*seen.borrow(), vec![NotificationContext::GameWon]);
        assert_eq!(subject.observer_count(), 0);
    }

    #[test]
    fn test_detach_with_stale_handle_is_ignored() {
        let mut subject = Subject::new();
        let subscription = subject.attach(|_| {});
        subject.detach(subscription);
        subject.detach(subscription);
        assert_eq!(subject.observer_count(), 0);
    }
}
