//! Traits the host implements to expose its listener instances

use std::sync::Arc;

/// The live host-side object that receives dispatched events
///
/// One instance exists per process per name at a time, but the host may tear
/// it down and create a new one at any point. Callers must not hold on to an
/// instance beyond a single dispatch.
pub trait ListenerInstance: Send + Sync {
    /// Deliver one named event to every listener registered on this instance
    ///
    /// `retain_until_consumed` asks the host to replay the event to listeners
    /// that register after this call. Having no listeners attached is normal.
    fn notify_listeners(&self, event_name: &str, payload: serde_json::Value, retain_until_consumed: bool);
}

/// Host component registry lookup
///
/// Returns `None` when the host bridge is not attached or nothing is
/// registered under `name`. Must be callable from any thread and must not
/// have side effects.
pub trait ListenerRegistry: Send + Sync {
    fn resolve(&self, name: &str) -> Option<Arc<dyn ListenerInstance>>;
}

impl<F> ListenerRegistry for F
where
    F: Fn(&str) -> Option<Arc<dyn ListenerInstance>> + Send + Sync,
{
    fn resolve(&self, name: &str) -> Option<Arc<dyn ListenerInstance>> {
        self(name)
    }
}
