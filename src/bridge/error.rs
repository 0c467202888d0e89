//! Error types for the host bridge seam

/// Errors raised while preparing an event for the host
///
/// An absent listener is never an error; the host's retention covers it.
#[derive(Debug, thiserror::Error)]
pub enum BridgeError {
    #[error("Failed to encode '{event}' payload: {source}")]
    Encode {
        event: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Result type for bridge operations
pub type BridgeResult<T> = Result<T, BridgeError>;
