//! Public API for the push coordinator
//!
//! Provider callbacks are process-wide and have no handle to the host, so the
//! coordinator built at start-up is installed here and looked up per call.

use crate::core::sync::{read_or_recover, write_or_recover};
use std::sync::{Arc, RwLock};

pub use crate::coordinator::config::PushConfig;
pub use crate::coordinator::coordinator::{Collaborators, PushCoordinator};
pub use crate::coordinator::error::{CoordinatorError, CoordinatorResult};
pub use crate::coordinator::replay::action_from_intent;

use crate::messaging::api::RemoteMessage;

static INSTALLED: RwLock<Option<Arc<PushCoordinator>>> = RwLock::new(None);

/// Install the process-wide coordinator, returning the one it replaces
pub fn install(coordinator: Arc<PushCoordinator>) -> Option<Arc<PushCoordinator>> {
    log::debug!("Installing push coordinator");
    write_or_recover(&INSTALLED, "installed coordinator").replace(coordinator)
}

/// Remove the process-wide coordinator
pub fn uninstall() -> Option<Arc<PushCoordinator>> {
    write_or_recover(&INSTALLED, "installed coordinator").take()
}

/// The installed coordinator, if any
pub fn installed() -> Option<Arc<PushCoordinator>> {
    read_or_recover(&INSTALLED, "installed coordinator").clone()
}

fn require_installed() -> Result<Arc<PushCoordinator>, CoordinatorError> {
    installed().ok_or_else(|| {
        log::error!("Push callback received before a coordinator was installed");
        CoordinatorError::NotInstalled
    })
}

/// Provider entry point for received messages
pub fn on_message(message: RemoteMessage) -> CoordinatorResult<()> {
    require_installed()?.on_message(message);
    Ok(())
}

/// Provider entry point for token rotation
pub fn on_new_token(token: &str) -> CoordinatorResult<()> {
    require_installed()?.on_new_token(token);
    Ok(())
}
