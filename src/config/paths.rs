//! Path management for depass
//!
//! Resolves where depass keeps its own files (settings and audit log).
//! The password store itself is described by [`StorePaths`](super::StorePaths).
//!
//! ## Path Resolution Order
//!
//! 1. `DEPASS_CONFIG_DIR` environment variable (if set)
//! 2. `$XDG_CONFIG_HOME/depass`
//! 3. `~/.config/depass`

use std::path::PathBuf;

use directories::BaseDirs;

use crate::error::DepassError;

/// Manages the paths of depass's own files
#[derive(Debug, Clone)]
pub struct DepassPaths {
    /// Base directory for settings and the audit log
    base_dir: PathBuf,
}

impl DepassPaths {
    /// Create a new DepassPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, DepassError> {
        let base_dir = if let Ok(custom) = std::env::var("DEPASS_CONFIG_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create DepassPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }
}

/// The user's home directory
pub fn home_dir() -> Result<PathBuf, DepassError> {
    BaseDirs::new()
        .map(|dirs| dirs.home_dir().to_path_buf())
        .ok_or_else(|| DepassError::Config("Could not determine home directory".into()))
}

fn resolve_default_path() -> Result<PathBuf, DepassError> {
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) if !xdg.is_empty() => PathBuf::from(xdg),
        _ => home_dir()?.join(".config"),
    };
    Ok(config_base.join("depass"))
}
