//! Panel configuration loading.
//!
//! The panel reads one TOML file from the user's config directory. A
//! missing file is the normal first-run state and falls back to the
//! built-in defaults; a malformed file logs a warning and does the same
//! rather than keeping the panel from loading.

use std::fs;
use std::path::{Path, PathBuf};

use slotwatch_types::PanelConfig;
use thiserror::Error;

/// Errors that can occur loading or saving the config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error reading {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parse error in {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("serialize error for {path:?}: {source}")]
    Serialize {
        path: PathBuf,
        #[source]
        source: toml::ser::Error,
    },
}

/// Default config file location under the user's config directory.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("slotwatch").join("config.toml"))
}

/// Load a config file.
pub fn load_file(path: &Path) -> Result<PanelConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|e| ConfigError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    toml::from_str(&contents).map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Load the default config file, falling back to defaults when it is
/// missing or unreadable.
pub fn load_or_default() -> PanelConfig {
    let Some(path) = default_config_path() else {
        return PanelConfig::default();
    };
    if !path.exists() {
        tracing::debug!("[CONFIG] no config at {:?}, using defaults", path);
        return PanelConfig::default();
    }
    match load_file(&path) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("[CONFIG] failed to load {:?}: {}", path, e);
            PanelConfig::default()
        }
    }
}

/// Save a config file, creating parent directories as needed.
pub fn save_file(path: &Path, config: &PanelConfig) -> Result<(), ConfigError> {
    let contents = toml::to_string_pretty(config).map_err(|e| ConfigError::Serialize {
        path: path.to_path_buf(),
        source: e,
    })?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| ConfigError::Io {
            path: parent.to_path_buf(),
            source: e,
        })?;
    }

    fs::write(path, contents).map_err(|e| ConfigError::Io {
        path: path.to_path_buf(),
        source: e,
    })
}
