//! Event Bus for observing the form controller.
//!
//! The FormEventBus provides a push-based subscription model. Subscribers
//! register callbacks that are invoked synchronously, in registration order,
//! whenever the controller publishes a [`FormEvent`].

use std::sync::{Arc, Mutex, MutexGuard};

use crate::application::events::FormEvent;

type Subscriber = Box<dyn FnMut(&FormEvent) + Send + 'static>;

/// Handle returned by [`FormEventBus::subscribe`], used to unsubscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

#[derive(Default)]
struct Subscribers {
    next_id: u64,
    entries: Vec<(SubscriptionId, Subscriber)>,
}

/// Event bus for form state changes.
///
/// The bus holds strong references to subscribers, so they persist until
/// explicitly removed or the bus is dropped. Callbacks run while the bus is
/// locked and must not subscribe or unsubscribe from inside the callback.
#[derive(Clone, Default)]
pub struct FormEventBus {
    subscribers: Arc<Mutex<Subscribers>>,
}

impl FormEventBus {
    /// Create a new FormEventBus with no subscribers.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Subscribers> {
        // A panicking subscriber poisons the lock; the list itself is still usable.
        self.subscribers
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Subscribe to all events.
    pub fn subscribe(&self, callback: impl FnMut(&FormEvent) + Send + 'static) -> SubscriptionId {
        let mut subscribers = self.lock();
        let id = SubscriptionId(subscribers.next_id);
        subscribers.next_id += 1;
        subscribers.entries.push((id, Box::new(callback)));
        id
    }

    /// Remove a subscriber. Returns whether it was registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut subscribers = self.lock();
        let before = subscribers.entries.len();
        subscribers.entries.retain(|(entry_id, _)| *entry_id != id);
        subscribers.entries.len() != before
    }

    /// Dispatch an event to all subscribers.
    pub fn dispatch(&self, event: FormEvent) {
        let mut subscribers = self.lock();
        for (_, subscriber) in subscribers.entries.iter_mut() {
            subscriber(&event);
        }
    }

    /// Get the number of subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.lock().entries.len()
    }

    /// Clear all subscribers.
    pub fn clear(&self) {
        self.lock().entries.clear();
    }
}

impl std::fmt::Debug for FormEventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormEventBus")
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    #[test]
    fn test_subscribe_and_dispatch() {
        let bus = FormEventBus::new();
        let count = Arc::new(AtomicU32::new(0));

        let count_clone = Arc::clone(&count);
        bus.subscribe(move |_event| {
            count_clone.fetch_add(1, Ordering::SeqCst);
        });

        assert_eq!(bus.subscriber_count(), 1);

        bus.dispatch(FormEvent::DraftChanged);
        bus.dispatch(FormEvent::ErrorsChanged);

        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_multiple_subscribers() {
        let bus = FormEventBus::new();
        let count1 = Arc::new(AtomicU32::new(0));
        let count2 = Arc::new(AtomicU32::new(0));

        let count1_clone = Arc::clone(&count1);
        bus.subscribe(move |_event| {
            count1_clone.fetch_add(1, Ordering::SeqCst);
        });

        let count2_clone = Arc::clone(&count2);
        bus.subscribe(move |_event| {
            count2_clone.fetch_add(1, Ordering::SeqCst);
        });

        bus.dispatch(FormEvent::SubmittingChanged(true));

        assert_eq!(count1.load(Ordering::SeqCst), 1);
        assert_eq!(count2.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_unsubscribe() {
        let bus = FormEventBus::new();
        let count = Arc::new(AtomicU32::new(0));

        let count_clone = Arc::clone(&count);
        let id = bus.subscribe(move |_event| {
            count_clone.fetch_add(1, Ordering::SeqCst);
        });

        assert!(bus.unsubscribe(id));
        assert!(!bus.unsubscribe(id));

        bus.dispatch(FormEvent::DraftChanged);
        assert_eq!(count.load(Ordering::SeqCst), 0);
        assert_eq!(bus.subscriber_count(), 0);
    }

    #[test]
    fn test_clones_share_subscribers() {
        let bus = FormEventBus::new();
        let seen = Arc::new(Mutex::new(Vec::new()));

        let seen_clone = Arc::clone(&seen);
        bus.subscribe(move |event| {
            seen_clone.lock().unwrap().push(event.clone());
        });

        bus.clone().dispatch(FormEvent::ErrorsChanged);

        assert_eq!(*seen.lock().unwrap(), vec![FormEvent::ErrorsChanged]);
        bus.clear();
        assert_eq!(bus.subscriber_count(), 0);
    }
}
