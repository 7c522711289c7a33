//! Observer registration and dispatch.

use std::cell::RefCell;
use std::rc::Rc;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::event::BoardEvent;

/// Receives board events.
///
/// Closures taking `&BoardEvent` implement this automatically.
pub trait BoardObserver {
    fn on_event(&mut self, event: &BoardEvent);
}

impl<F> BoardObserver for F
where
    F: FnMut(&BoardEvent),
{
    fn on_event(&mut self, event: &BoardEvent) {
        self(event)
    }
}

/// Handle returned by `subscribe`, used to unsubscribe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ObserverId(pub u32);

impl ObserverId {
    /// Create a new observer ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for ObserverId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Observer({})", self.0)
    }
}

/// Storage for subscribed observers.
///
/// Observers are notified synchronously. Their relative order is unspecified.
#[derive(Default)]
pub struct ObserverRegistry {
    observers: FxHashMap<ObserverId, Box<dyn BoardObserver>>,
    next_id: u32,
}

impl ObserverRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an observer and return its handle.
    pub fn subscribe(&mut self, observer: Box<dyn BoardObserver>) -> ObserverId {
        let id = ObserverId::new(self.next_id);
        self.next_id += 1;
        self.observers.insert(id, observer);
        id
    }

    /// Remove an observer. Returns `false` if the handle was unknown.
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        self.observers.remove(&id).is_some()
    }

    /// Number of subscribed observers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.observers.len()
    }

    /// Check if nobody is listening.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }

    /// Deliver an event to every observer.
    pub fn notify(&mut self, event: &BoardEvent) {
        for observer in self.observers.values_mut() {
            observer.on_event(event);
        }
    }
}

impl std::fmt::Debug for ObserverRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObserverRegistry")
            .field("observers", &self.observers.len())
            .field("next_id", &self.next_id)
            .finish()
    }
}

/// Observer that records every event it sees.
///
/// Clones share one buffer, so a host can subscribe one clone and read
/// from another.
///
/// ```
/// use bio_battle::events::{BoardEvent, EventLog, ObserverRegistry};
///
/// let log = EventLog::new();
/// let mut registry = ObserverRegistry::new();
/// registry.subscribe(Box::new(log.clone()));
///
/// registry.notify(&BoardEvent::Reset);
/// assert_eq!(log.events(), vec![BoardEvent::Reset]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct EventLog {
    events: Rc<RefCell<Vec<BoardEvent>>>,
}

impl EventLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of every recorded event, oldest first.
    #[must_use]
    pub fn events(&self) -> Vec<BoardEvent> {
        self.events.borrow().clone()
    }

    /// Number of recorded events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    /// Check if nothing was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }

    /// Discard recorded events.
    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }
}

impl BoardObserver for EventLog {
    fn on_event(&mut self, event: &BoardEvent) {
        self.events.borrow_mut().push(event.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Player;

    #[test]
    fn test_subscribe_and_notify() {
        let mut registry = ObserverRegistry::new();
        let log = EventLog::new();

        let id = registry.subscribe(Box::new(log.clone()));
        assert_eq!(id, ObserverId::new(0));
        assert_eq!(registry.len(), 1);

        registry.notify(&BoardEvent::TurnPassed { player: Player::B });
        assert_eq!(log.events(), vec![BoardEvent::TurnPassed { player: Player::B }]);
    }

    #[test]
    fn test_unsubscribe() {
        let mut registry = ObserverRegistry::new();
        let log = EventLog::new();
        let id = registry.subscribe(Box::new(log.clone()));

        assert!(registry.unsubscribe(id));
        assert!(!registry.unsubscribe(id));
        assert!(registry.is_empty());

        registry.notify(&BoardEvent::Reset);
        assert!(log.is_empty());
    }

    #[test]
    fn test_closure_observer() {
        let count = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&count);

        let mut registry = ObserverRegistry::new();
        registry.subscribe(Box::new(move |_: &BoardEvent| *counter.borrow_mut() += 1));

        registry.notify(&BoardEvent::Reset);
        registry.notify(&BoardEvent::Reset);

        assert_eq!(*count.borrow(), 2);
    }

    #[test]
    fn test_ids_are_not_reused() {
        let mut registry = ObserverRegistry::new();
        let first = registry.subscribe(Box::new(EventLog::new()));
        registry.unsubscribe(first);
        let second = registry.subscribe(Box::new(EventLog::new()));
        assert_ne!(first, second);
        assert_eq!(format!("{}", second), "Observer(1)");
    }

    #[test]
    fn test_event_log_clear() {
        let mut log = EventLog::new();
        log.on_event(&BoardEvent::Reset);
        assert_eq!(log.len(), 1);
        log.clear();
        assert!(log.is_empty());
    }
}
