//! Static application metadata

use crate::render::api::{AppMetadata, MetadataBundle, MetadataOverrides, RenderError, RenderResult};

/// Metadata source backed by configured overrides
#[derive(Debug, Clone, Default)]
pub struct StaticMetadata {
    overrides: Option<MetadataOverrides>,
}

impl StaticMetadata {
    pub fn new(overrides: MetadataOverrides) -> Self {
        Self {
            overrides: Some(overrides),
        }
    }

    /// A source whose lookup always fails
    pub fn unavailable() -> Self {
        Self { overrides: None }
    }
}

impl AppMetadata for StaticMetadata {
    fn application_metadata(&self) -> RenderResult<MetadataBundle> {
        self.overrides
            .as_ref()
            .map(MetadataOverrides::to_bundle)
            .ok_or_else(|| RenderError::MetadataUnavailable {
                package: env!("CARGO_PKG_NAME").to_string(),
                reason: "package info not found".to_string(),
            })
    }
}
