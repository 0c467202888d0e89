//! Clock abstraction for the wall-clock derived notification identifiers

use crate::core::sync::lock_or_recover;
use std::sync::{Arc, Mutex};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Abstraction over wall-clock time so identifier generation can be tested
pub trait Clock: Send + Sync {
    /// Get the current system time
    fn system_time(&self) -> SystemTime;

    /// Whole seconds since the Unix epoch, truncated to 32 bits
    ///
    /// Two calls within the same second return the same value.
    fn epoch_seconds(&self) -> i32 {
        let secs = self
            .system_time()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        secs as i32
    }
}

/// Production clock using actual system time
#[derive(Debug, Default, Clone)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn system_time(&self) -> SystemTime {
        SystemTime::now()
    }
}

/// Manually advanced clock for deterministic tests and scripted runs
#[derive(Debug, Clone)]
pub struct ManualClock {
    current: Arc<Mutex<SystemTime>>,
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl ManualClock {
    /// Create a manual clock starting at the current system time
    pub fn new() -> Self {
        Self::starting_at(SystemTime::now())
    }

    /// Create a manual clock starting at a fixed number of epoch seconds
    pub fn at_epoch_seconds(secs: u64) -> Self {
        Self::starting_at(UNIX_EPOCH + Duration::from_secs(secs))
    }

    pub fn starting_at(start: SystemTime) -> Self {
        Self {
            current: Arc::new(Mutex::new(start)),
        }
    }

    pub fn advance(&self, duration: Duration) {
        *lock_or_recover(&self.current, "manual clock") += duration;
    }
}

impl Clock for ManualClock {
    fn system_time(&self) -> SystemTime {
        *lock_or_recover(&self.current, "manual clock")
    }
}
