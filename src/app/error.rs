//! Application level errors

use crate::core::error_handling::ContextualError;
use crate::harness::ScriptError;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("The specified configuration file does not exist: {}", path.display())]
    ConfigNotFound { path: PathBuf },

    #[error("Error parsing configuration file {}: {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Error reading {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No script file given")]
    MissingScript,

    #[error("Failed to start the async runtime: {0}")]
    Runtime(#[source] std::io::Error),

    #[error(transparent)]
    Script(#[from] ScriptError),
}

impl ContextualError for AppError {
    fn is_user_actionable(&self) -> bool {
        match self {
            AppError::ConfigNotFound { .. } | AppError::ConfigParse { .. } | AppError::MissingScript => {
                true
            }
            AppError::Script(e) => e.is_user_actionable(),
            AppError::Read { .. } | AppError::Runtime(_) => false,
        }
    }

    fn user_message(&self) -> Option<&str> {
        match self {
            AppError::ConfigNotFound { .. } => Some("check the --config-file path"),
            AppError::ConfigParse { .. } => Some("the configuration file is not valid TOML"),
            AppError::MissingScript => Some("pass the path of a JSON script of steps"),
            AppError::Script(e) => e.user_message(),
            _ => None,
        }
    }
}
