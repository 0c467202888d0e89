//! TOML configuration file discovery and loading

use crate::app::error::AppError;
use crate::coordinator::api::PushConfig;
use std::path::{Path, PathBuf};

pub const CONFIG_DIR_NAME: &str = "Pushbridge";
pub const CONFIG_FILE_NAME: &str = "pushbridge.toml";

/// `<config_dir>/Pushbridge/pushbridge.toml`, when the platform has a config dir
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

/// Pick the file to load
///
/// An explicitly given file must exist; the default file is only used if it does.
pub fn resolve_config_path(
    config_file: Option<PathBuf>,
    default_path: Option<PathBuf>,
) -> Result<Option<PathBuf>, AppError> {
    match config_file {
        Some(path) if path.exists() => Ok(Some(path)),
        Some(path) => Err(AppError::ConfigNotFound { path }),
        None => Ok(default_path.filter(|path| path.exists())),
    }
}

/// Load the push configuration, falling back to defaults when there is no file
pub async fn load_config(config_file: Option<PathBuf>) -> Result<PushConfig, AppError> {
    match resolve_config_path(config_file, default_config_path())? {
        Some(path) => load_config_file(&path).await,
        None => {
            log::debug!("No configuration file found, using defaults");
            Ok(PushConfig::default())
        }
    }
}

pub async fn load_config_file(path: &Path) -> Result<PushConfig, AppError> {
    log::debug!("Loading configuration from {}", path.display());
    let contents = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| AppError::Read {
            path: path.to_path_buf(),
            source,
        })?;

    PushConfig::from_toml_str(&contents).map_err(|source| AppError::ConfigParse {
        path: path.to_path_buf(),
        source,
    })
}
