//! Per-fighter publish/subscribe registry.
//!
//! Observers receive the string events a fighter broadcasts during combat.
//! The registry keeps them in insertion order, allows duplicates, and removes
//! by handle identity (the address of the shared allocation), so a host can
//! register the same logger twice and unregister one copy.

use std::sync::Arc;

use crate::error::{ErrorSeverity, GameError};

/// Failure reported by an observer while handling an event.
///
/// Observer failures never propagate past the registry; they are logged and
/// the remaining observers still receive the event.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ObserverError {
    #[error("observer failed: {reason}")]
    Failed { reason: String },
}

impl ObserverError {
    pub fn failed(reason: impl Into<String>) -> Self {
        Self::Failed {
            reason: reason.into(),
        }
    }
}

impl GameError for ObserverError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Recoverable
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Failed { .. } => "OBSERVER_FAILED",
        }
    }
}

/// Subscriber to a fighter's in-combat events.
pub trait Observer: Send + Sync {
    /// Handles one event. Called synchronously in registration order.
    fn update(&self, event: &str) -> Result<(), ObserverError>;
}

/// Shared observer handle. Identity is the address of the allocation.
pub type ObserverHandle = Arc<dyn Observer>;

/// Ordered observer list.
#[derive(Clone, Default)]
pub struct ObserverRegistry {
    observers: Vec<ObserverHandle>,
}

impl ObserverRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `observer`. Duplicates are kept.
    pub fn register(&mut self, observer: ObserverHandle) {
        self.observers.push(observer);
    }

    /// Removes the first occurrence of `observer`. Returns whether one was removed.
    pub fn unregister(&mut self, observer: &ObserverHandle) -> bool {
        match self
            .observers
            .iter()
            .position(|registered| same_observer(registered, observer))
        {
            Some(index) => {
                self.observers.remove(index);
                true
            }
            None => false,
        }
    }

    /// Delivers `event` to every observer in insertion order.
    ///
    /// Returns the number of observers that reported a failure.
    pub fn notify(&self, event: &str) -> usize {
        let mut failures = 0;
        for (index, observer) in self.observers.iter().enumerate() {
            if let Err(error) = observer.update(event) {
                failures += 1;
                tracing::warn!(
                    observer = index,
                    code = error.error_code(),
                    %event,
                    "observer update failed: {}",
                    error
                );
            }
        }
        failures
    }

    /// Number of registrations of `observer`.
    pub fn count_of(&self, observer: &ObserverHandle) -> usize {
        self.observers
            .iter()
            .filter(|registered| same_observer(registered, observer))
            .count()
    }

    pub fn contains(&self, observer: &ObserverHandle) -> bool {
        self.count_of(observer) > 0
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }
}

impl std::fmt::Debug for ObserverRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObserverRegistry")
            .field("len", &self.observers.len())
            .finish()
    }
}

/// True when both handles point at the same observer allocation.
///
/// Compares data addresses only; vtable pointers for the same type may differ
/// between codegen units.
pub fn same_observer(a: &ObserverHandle, b: &ObserverHandle) -> bool {
    std::ptr::addr_eq(Arc::as_ptr(a), Arc::as_ptr(b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct Recorder {
        name: &'static str,
        log: Arc<Mutex<Vec<String>>>,
    }

    impl Observer for Recorder {
        fn update(&self, event: &str) -> Result<(), ObserverError> {
            self.log
                .lock()
                .unwrap()
                .push(format!("{}:{}", self.name, event));
            Ok(())
        }
    }

    struct Failing;

    impl Observer for Failing {
        fn update(&self, _event: &str) -> Result<(), ObserverError> {
            Err(ObserverError::failed("sink closed"))
        }
    }

    fn recorder(name: &'static str, log: &Arc<Mutex<Vec<String>>>) -> ObserverHandle {
        Arc::new(Recorder {
            name,
            log: Arc::clone(log),
        })
    }

    #[test]
    fn notifies_in_insertion_order() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut registry = ObserverRegistry::new();
        registry.register(recorder("a", &log));
        registry.register(recorder("b", &log));

        registry.notify("hit");

        assert_eq!(*log.lock().unwrap(), vec!["a:hit", "b:hit"]);
    }

    #[test]
    fn duplicates_are_kept_and_removed_one_at_a_time() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let logger = recorder("l", &log);
        let mut registry = ObserverRegistry::new();
        registry.register(Arc::clone(&logger));
        registry.register(Arc::clone(&logger));
        assert_eq!(registry.count_of(&logger), 2);

        assert!(registry.unregister(&logger));
        registry.notify("event");

        assert_eq!(*log.lock().unwrap(), vec!["l:event"]);
    }

    #[test]
    fn unregister_removes_first_match_and_keeps_order() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let a = recorder("a", &log);
        let b = recorder("b", &log);
        let mut registry = ObserverRegistry::new();
        registry.register(Arc::clone(&a));
        registry.register(Arc::clone(&b));
        registry.register(Arc::clone(&a));

        registry.unregister(&a);
        registry.notify("x");

        assert_eq!(*log.lock().unwrap(), vec!["b:x", "a:x"]);
    }

    #[test]
    fn unregister_absent_is_noop() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let a = recorder("a", &log);
        let stranger = recorder("a", &log);
        let mut registry = ObserverRegistry::new();
        registry.register(Arc::clone(&a));

        assert!(!registry.unregister(&stranger));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn register_then_unregister_restores_sequence() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let a = recorder("a", &log);
        let b = recorder("b", &log);
        let mut registry = ObserverRegistry::new();
        registry.register(Arc::clone(&a));

        registry.register(Arc::clone(&b));
        registry.unregister(&b);

        assert_eq!(registry.len(), 1);
        assert!(registry.contains(&a));
        assert!(!registry.contains(&b));
    }

    #[test]
    fn failing_observer_does_not_block_later_ones() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut registry = ObserverRegistry::new();
        registry.register(Arc::new(Failing));
        registry.register(recorder("after", &log));

        let failures = registry.notify("boom");

        assert_eq!(failures, 1);
        assert_eq!(*log.lock().unwrap(), vec!["after:boom"]);
    }
}
