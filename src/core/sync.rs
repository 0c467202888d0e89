//! Synchronization utilities for lock poisoning
//!
//! Entry points in this crate are invoked from provider callback threads the
//! crate does not control. A panic in one of those threads must not wedge every
//! later call, so poisoned locks are recovered with their inner value and the
//! recovery is logged. All guarded state in this crate stays consistent across
//! a panic (single `Option` swaps and `Vec` pushes).

use std::sync::{Mutex, MutexGuard, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Lock a mutex, recovering the guard if a previous holder panicked
///
/// # Arguments
/// * `mutex` - The mutex to lock
/// * `what` - Human-readable name of the guarded state, used in the log line
pub fn lock_or_recover<'a, T>(mutex: &'a Mutex<T>, what: &str) -> MutexGuard<'a, T> {
    mutex.lock().unwrap_or_else(|poisoned| {
        log::warn!("Recovering poisoned lock on {}", what);
        poisoned.into_inner()
    })
}

/// Read-lock an RwLock, recovering the guard if a writer panicked
pub fn read_or_recover<'a, T>(lock: &'a RwLock<T>, what: &str) -> RwLockReadGuard<'a, T> {
    lock.read().unwrap_or_else(|poisoned| {
        log::warn!("Recovering poisoned read lock on {}", what);
        poisoned.into_inner()
    })
}

/// Write-lock an RwLock, recovering the guard if a holder panicked
pub fn write_or_recover<'a, T>(lock: &'a RwLock<T>, what: &str) -> RwLockWriteGuard<'a, T> {
    lock.write().unwrap_or_else(|poisoned| {
        log::warn!("Recovering poisoned write lock on {}", what);
        poisoned.into_inner()
    })
}
