//! Configuration loading
//!
//! The widget config lives in the platform config directory under the
//! `refwidget` app name (via `confy`). Hosts may also point at an explicit
//! TOML file. A missing file is created with defaults.

use std::path::{Path, PathBuf};

use refwidget_types::WidgetConfig;

const APP_NAME: &str = "refwidget";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to load config from {path:?}: {source}")]
    Load {
        path: Option<PathBuf>,
        #[source]
        source: confy::ConfyError,
    },
    #[error("failed to save config to {path:?}: {source}")]
    Save {
        path: PathBuf,
        #[source]
        source: confy::ConfyError,
    },
}

/// Load the config from the default location.
pub fn load_config() -> Result<WidgetConfig, ConfigError> {
    let config = confy::load(APP_NAME, None).map_err(|source| ConfigError::Load {
        path: default_config_path(),
        source,
    })?;
    tracing::debug!(?config, "Loaded widget config");
    Ok(config)
}

/// Load the config from an explicit file.
pub fn load_config_from(path: &Path) -> Result<WidgetConfig, ConfigError> {
    let config = confy::load_path(path).map_err(|source| ConfigError::Load {
        path: Some(path.to_path_buf()),
        source,
    })?;
    tracing::debug!(path = %path.display(), ?config, "Loaded widget config");
    Ok(config)
}

pub fn save_config_to(path: &Path, config: &WidgetConfig) -> Result<(), ConfigError> {
    confy::store_path(path, config).map_err(|source| ConfigError::Save {
        path: path.to_path_buf(),
        source,
    })
}

pub fn default_config_path() -> Option<PathBuf> {
    confy::get_configuration_file_path(APP_NAME, None).ok()
}
