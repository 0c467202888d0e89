//! Listener Registry Resolver

use crate::bridge::traits::{ListenerInstance, ListenerRegistry};
use std::sync::Arc;

/// Well-known name the host registers the push listener under
pub const PLUGIN_NAME: &str = "PushNotifications";

/// Resolves the current listener instance by its stable name
///
/// Nothing is cached: every call goes back to the host registry, so a
/// re-created instance is picked up on the next dispatch.
#[derive(Clone)]
pub struct ListenerResolver {
    registry: Arc<dyn ListenerRegistry>,
    name: String,
}

impl std::fmt::Debug for ListenerResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListenerResolver")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

impl ListenerResolver {
    /// Resolver for the default push listener name
    pub fn new(registry: Arc<dyn ListenerRegistry>) -> Self {
        Self::with_name(registry, PLUGIN_NAME)
    }

    pub fn with_name(registry: Arc<dyn ListenerRegistry>, name: impl Into<String>) -> Self {
        Self {
            registry,
            name: name.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Look up the currently active listener instance, if any
    pub fn resolve(&self) -> Option<Arc<dyn ListenerInstance>> {
        let listener = self.registry.resolve(&self.name);
        log::trace!(
            "Resolved listener '{}': {}",
            self.name,
            if listener.is_some() { "attached" } else { "absent" }
        );
        listener
    }
}
