//! Configuration handling for the TUI

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::state::forms::ValidationOptions;
use crate::state::SessionOptions;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] io::Error),

    #[error("malformed config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct TuiConfig {
    /// Reject provinces that are not in the fixed list
    pub strict_province: Option<bool>,
    /// Clear the form after an accepted submit
    pub reset_after_submit: Option<bool>,
    /// Show keyboard hints in the status bar
    pub show_help: Option<bool>,
}

impl TuiConfig {
    /// Project directories shared by the config file and the log file
    pub fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("io", "addressform", "address-form")
    }

    fn config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from the user config dir; a missing file yields defaults
    pub fn load() -> Result<Self, ConfigError> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific file; a missing file yields defaults
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn show_help(&self) -> bool {
        self.show_help.unwrap_or(true)
    }

    /// Session behaviour derived from this config
    pub fn session_options(&self) -> SessionOptions {
        SessionOptions {
            validation: ValidationOptions {
                strict_province: self.strict_province.unwrap_or(false),
            },
            reset_after_submit: self.reset_after_submit.unwrap_or(false),
        }
    }
}
