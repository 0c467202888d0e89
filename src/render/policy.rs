//! Presentation policy

use std::collections::BTreeSet;
use strum_macros::{AsRefStr, Display, EnumString};

/// A configured presentation mode
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, AsRefStr, Display, EnumString,
)]
#[strum(serialize_all = "lowercase")]
pub enum PresentationOption {
    Alert,
    Badge,
    Sound,
}

/// Set of presentation modes read from static configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PresentationPolicy {
    options: BTreeSet<PresentationOption>,
}

impl PresentationPolicy {
    pub fn new(options: impl IntoIterator<Item = PresentationOption>) -> Self {
        Self {
            options: options.into_iter().collect(),
        }
    }

    /// Build a policy from configured names; unknown names are skipped
    pub fn from_names<S: AsRef<str>>(names: &[S]) -> Self {
        let options = names.iter().filter_map(|name| {
            let name = name.as_ref();
            match name.parse::<PresentationOption>() {
                Ok(option) => Some(option),
                Err(_) => {
                    log::warn!("Ignoring unknown presentation option '{}'", name);
                    None
                }
            }
        });
        Self::new(options)
    }

    pub fn includes(&self, option: PresentationOption) -> bool {
        self.options.contains(&option)
    }

    /// Whether received messages with a display payload get a local notification
    pub fn shows_alert(&self) -> bool {
        self.includes(PresentationOption::Alert)
    }

    pub fn options(&self) -> impl Iterator<Item = PresentationOption> + '_ {
        self.options.iter().copied()
    }
}
