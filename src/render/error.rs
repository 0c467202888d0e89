//! Notification rendering error types

/// Errors from the application metadata lookup
///
/// Rendering never fails because of these; they are logged and the fallback
/// resources are used.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    #[error("Application metadata for '{package}' is unavailable: {reason}")]
    MetadataUnavailable { package: String, reason: String },
}

/// Result type for rendering support operations
pub type RenderResult<T> = Result<T, RenderError>;
