//! Deprecation and restoration of password files
//!
//! `PasswordStore` ties the resolver and the mover together. Each call
//! resolves the account's archived versions once and then performs at most
//! one rename.

pub mod mover;
pub mod resolver;

pub use mover::{move_entry, Moved};
pub use resolver::{archived_versions, latest_version, next_version, parse_archived_name};

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::StorePaths;
use crate::error::DepassResult;
use crate::models::Account;

/// What a move did to an account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// Active file moved into the archive
    Deprecate,
    /// Latest archived file moved back to active
    Restore,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Deprecate => write!(f, "deprecate"),
            Operation::Restore => write!(f, "restore"),
        }
    }
}

/// A completed deprecate or restore
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveRecord {
    pub operation: Operation,
    pub account: Account,
    /// Archive version written (deprecate) or taken back (restore)
    pub version: u64,
    pub moved: Moved,
}

impl fmt::Display for MoveRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.moved.fmt(f)
    }
}

/// Result of a restore request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RestoreOutcome {
    Restored(MoveRecord),
    /// The account has no archived versions; nothing was touched
    NothingToRestore,
}

/// A password store with an archive directory
pub struct PasswordStore {
    paths: StorePaths,
}

impl PasswordStore {
    /// Create a new PasswordStore
    pub fn new(paths: StorePaths) -> Self {
        Self { paths }
    }

    /// Get the store layout
    pub fn paths(&self) -> &StorePaths {
        &self.paths
    }

    /// Archived versions of `account`, oldest first
    pub fn versions(&self, account: &Account) -> DepassResult<Vec<u64>> {
        archived_versions(&self.paths, account)
    }

    /// Move the active file of `account` into the archive under the next version
    pub fn deprecate(&self, account: &Account) -> DepassResult<MoveRecord> {
        let latest = latest_version(&self.paths, account)?;
        let version = next_version(latest, account)?;

        let moved = move_entry(
            &self.paths,
            account.as_str(),
            &self.paths.archived_id(account, version),
        )?;

        Ok(MoveRecord {
            operation: Operation::Deprecate,
            account: account.clone(),
            version,
            moved,
        })
    }

    /// Move the newest archived version of `account` back to active
    pub fn restore(&self, account: &Account) -> DepassResult<RestoreOutcome> {
        let Some(version) = latest_version(&self.paths, account)? else {
            return Ok(RestoreOutcome::NothingToRestore);
        };

        let moved = move_entry(
            &self.paths,
            &self.paths.archived_id(account, version),
            account.as_str(),
        )?;

        Ok(RestoreOutcome::Restored(MoveRecord {
            operation: Operation::Restore,
            account: account.clone(),
            version,
            moved,
        }))
    }
}
