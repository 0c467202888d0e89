//! Channel management error types

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChannelError {
    #[error("Channel operation rejected: {message}")]
    Rejected { message: String },

    #[error("Channel not found: {channel_id}")]
    NotFound { channel_id: String },
}

/// Result type for channel operations
pub type ChannelResult<T> = Result<T, ChannelError>;
