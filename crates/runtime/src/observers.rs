//! Stock observers hosts attach to every match.
use std::sync::{Mutex, PoisonError};

use game_core::{Observer, ObserverError};

/// Writes every event to the log.
#[derive(Clone, Copy, Debug, Default)]
pub struct Logger;

impl Observer for Logger {
    fn update(&self, event: &str) -> Result<(), ObserverError> {
        tracing::info!(target: "runtime::log", "[LOG]: {event}");
        Ok(())
    }
}

/// Calls out every event like a ring announcer.
#[derive(Clone, Copy, Debug, Default)]
pub struct Announcer;

impl Observer for Announcer {
    fn update(&self, event: &str) -> Result<(), ObserverError> {
        tracing::info!(target: "runtime::announcer", "[ANNOUNCER]: {event}");
        Ok(())
    }
}

/// Keeps every event it receives, in order.
#[derive(Debug, Default)]
pub struct EventRecorder {
    events: Mutex<Vec<String>>,
}

impl EventRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of the recorded events.
    pub fn events(&self) -> Vec<String> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Takes the recorded events, leaving the recorder empty.
    pub fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.events.lock().unwrap_or_else(PoisonError::into_inner))
    }

    pub fn len(&self) -> usize {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Observer for EventRecorder {
    fn update(&self, event: &str) -> Result<(), ObserverError> {
        let mut events = self
            .events
            .lock()
            .map_err(|_| ObserverError::failed("event recorder lock poisoned"))?;
        events.push(event.to_owned());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recorder_keeps_order() {
        let recorder = EventRecorder::new();
        recorder.update("Warrior is attacking!").unwrap();
        recorder.update("Mage is attacking!").unwrap();

        assert_eq!(recorder.len(), 2);
        assert_eq!(
            recorder.take(),
            vec!["Warrior is attacking!", "Mage is attacking!"]
        );
        assert!(recorder.is_empty());
    }

    #[test]
    fn stock_observers_never_fail() {
        assert!(Logger.update("Archer is attacking!").is_ok());
        assert!(Announcer.update("Archer is attacking!").is_ok());
    }
}
