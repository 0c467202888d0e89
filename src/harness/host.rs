//! In-memory host bridge

use crate::bridge::api::{ListenerInstance, ListenerRegistry, PLUGIN_NAME};
use crate::core::sync::{lock_or_recover, read_or_recover, write_or_recover};
use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, RwLock};

/// One event as received by a listener instance
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DispatchedEvent {
    /// Which listener instance received it; bumps on every attach
    pub generation: u64,
    pub name: String,
    pub payload: serde_json::Value,
    pub retained: bool,
}

/// Listener instance that records everything dispatched to it
pub struct RecordingListener {
    generation: u64,
    log: Arc<Mutex<Vec<DispatchedEvent>>>,
}

impl RecordingListener {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

impl ListenerInstance for RecordingListener {
    fn notify_listeners(&self, event_name: &str, payload: serde_json::Value, retain_until_consumed: bool) {
        lock_or_recover(&self.log, "dispatch log").push(DispatchedEvent {
            generation: self.generation,
            name: event_name.to_string(),
            payload,
            retained: retain_until_consumed,
        });
    }
}

/// Host registry holding at most one listener instance under the push name
///
/// `attach` always creates a fresh instance, the way a host re-creates its
/// bridge after a restart. Events from every generation share one log.
#[derive(Default)]
pub struct MemoryHost {
    current: RwLock<Option<Arc<RecordingListener>>>,
    generations: AtomicU64,
    log: Arc<Mutex<Vec<DispatchedEvent>>>,
}

impl MemoryHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new listener instance and return it
    pub fn attach(&self) -> Arc<RecordingListener> {
        let listener = Arc::new(RecordingListener {
            generation: self.generations.fetch_add(1, Ordering::SeqCst) + 1,
            log: Arc::clone(&self.log),
        });
        *write_or_recover(&self.current, "host listener") = Some(Arc::clone(&listener));
        log::debug!("Host attached listener generation {}", listener.generation);
        listener
    }

    /// Tear down the current listener instance
    pub fn detach(&self) {
        if let Some(old) = write_or_recover(&self.current, "host listener").take() {
            log::debug!("Host detached listener generation {}", old.generation);
        }
    }

    pub fn current(&self) -> Option<Arc<RecordingListener>> {
        read_or_recover(&self.current, "host listener").clone()
    }

    pub fn dispatched(&self) -> Vec<DispatchedEvent> {
        lock_or_recover(&self.log, "dispatch log").clone()
    }

    pub fn dispatched_named(&self, name: &str) -> Vec<DispatchedEvent> {
        self.dispatched()
            .into_iter()
            .filter(|event| event.name == name)
            .collect()
    }

    /// Take every recorded event, leaving the log empty
    pub fn drain(&self) -> Vec<DispatchedEvent> {
        std::mem::take(&mut *lock_or_recover(&self.log, "dispatch log"))
    }
}

impl ListenerRegistry for MemoryHost {
    fn resolve(&self, name: &str) -> Option<Arc<dyn ListenerInstance>> {
        if name != PLUGIN_NAME {
            return None;
        }
        self.current()
            .map(|listener| listener as Arc<dyn ListenerInstance>)
    }
}
