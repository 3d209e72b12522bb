//! Password store layout
//!
//! `StorePaths` is the configuration handed to the resolver and mover. It
//! maps accounts to their active and archived file locations.
//!
//! ```text
//! <store>/<account>.gpg                                   active
//! <store>/<deprecated>/<account-dir>/<name>.old.<N>.gpg   archived
//! ```

use std::path::{Path, PathBuf};

use crate::error::{DepassError, DepassResult};
use crate::models::{Account, PASSWORD_EXTENSION};

/// Root of a password store plus the name of its archive directory
#[derive(Debug, Clone)]
pub struct StorePaths {
    store_root: PathBuf,
    deprecated_dir: String,
}

impl StorePaths {
    /// Create a store layout
    ///
    /// The store root must be absolute. The archive directory must be a
    /// relative path that stays inside the store.
    pub fn new(
        store_root: impl Into<PathBuf>,
        deprecated_dir: impl Into<String>,
    ) -> DepassResult<Self> {
        let store_root = store_root.into();
        if !store_root.is_absolute() {
            return Err(DepassError::Config(format!(
                "Password store path '{}' must be absolute",
                store_root.display()
            )));
        }

        let deprecated_dir = deprecated_dir.into().trim_end_matches('/').to_string();

        if deprecated_dir.is_empty() {
            return Err(DepassError::Config(
                "Deprecated directory name must not be empty".into(),
            ));
        }

        if deprecated_dir.starts_with('/')
            || deprecated_dir
                .split('/')
                .any(|c| c.is_empty() || c == "." || c == "..")
        {
            return Err(DepassError::Config(format!(
                "Deprecated directory '{}' must be a plain path inside the store",
                deprecated_dir
            )));
        }

        Ok(Self {
            store_root,
            deprecated_dir,
        })
    }

    /// The store root
    pub fn store_root(&self) -> &Path {
        &self.store_root
    }

    /// The archive directory name, relative to the store root
    pub fn deprecated_dir(&self) -> &str {
        &self.deprecated_dir
    }

    /// Store-relative identifier of an archived version, e.g. `z_deprecated/email/work.old.3`
    pub fn archived_id(&self, account: &Account, version: u64) -> String {
        format!("{}/{}.old.{}", self.deprecated_dir, account, version)
    }

    /// Directory holding the archived versions of `account`
    pub fn archive_dir(&self, account: &Account) -> PathBuf {
        let base = self.store_root.join(&self.deprecated_dir);
        match account.dir() {
            Some(dir) => base.join(dir),
            None => base,
        }
    }

    /// On-disk path of a store-relative identifier
    pub fn file_for(&self, id: &str) -> PathBuf {
        self.store_root.join(format!("{}{}", id, PASSWORD_EXTENSION))
    }
}
