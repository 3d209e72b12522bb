//! User settings for depass
//!
//! Optional defaults for the store location, the archive directory name
//! and audit logging, read from a hand-edited `config.json`. Command-line
//! flags and environment variables take precedence over anything stored
//! here.

use std::path::PathBuf;

use serde::Deserialize;

use super::paths::DepassPaths;
use crate::error::DepassError;

/// Archive directory used when nothing else is configured
pub const DEFAULT_DEPRECATED_DIR: &str = "z_deprecated";

/// User settings for depass
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Password store root; `~/.password-store` when unset
    #[serde(default)]
    pub store_dir: Option<PathBuf>,

    /// Directory for deprecated passwords inside the store
    #[serde(default = "default_deprecated_dir")]
    pub deprecated_dir: String,

    /// Whether moves are recorded in the audit log
    #[serde(default = "default_audit_enabled")]
    pub audit_enabled: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_deprecated_dir() -> String {
    DEFAULT_DEPRECATED_DIR.to_string()
}

fn default_audit_enabled() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            store_dir: None,
            deprecated_dir: default_deprecated_dir(),
            audit_enabled: default_audit_enabled(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_default(paths: &DepassPaths) -> Result<Self, DepassError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| DepassError::Io(format!("Failed to read settings file: {}", e)))?;

        serde_json::from_str(&contents)
            .map_err(|e| DepassError::Config(format!("Failed to parse settings file: {}", e)))
    }
}
