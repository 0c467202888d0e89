//! Coordinator configuration

use crate::bridge::api::PLUGIN_NAME;
use crate::render::api::{MetadataOverrides, PresentationPolicy};
use serde::Deserialize;

/// Static push configuration
///
/// Read from TOML either at the top level or under
/// `[plugins.PushNotifications]`. Never mutated at runtime.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PushConfig {
    /// Presentation modes, e.g. `["alert", "sound"]`
    #[serde(default, alias = "presentationOptions")]
    pub presentation_options: Vec<String>,

    /// Icon/color overrides standing in for application metadata
    #[serde(default)]
    pub metadata: MetadataOverrides,
}

impl PushConfig {
    pub fn with_presentation_options<S: Into<String>>(options: impl IntoIterator<Item = S>) -> Self {
        Self {
            presentation_options: options.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    pub fn presentation_policy(&self) -> PresentationPolicy {
        PresentationPolicy::from_names(&self.presentation_options)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(contents: &str) -> Result<Self, toml::de::Error> {
        let mut table: toml::Table = toml::from_str(contents)?;

        let section = table
            .get_mut("plugins")
            .and_then(|plugins| plugins.as_table_mut())
            .and_then(|plugins| plugins.remove(PLUGIN_NAME));

        match section {
            Some(section) => section.try_into(),
            None => toml::Value::Table(table).try_into(),
        }
    }
}
