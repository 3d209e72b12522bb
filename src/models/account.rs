//! Account identifiers
//!
//! An account names one password entry the way `pass show` does: a
//! slash-separated path relative to the store root, without the `.gpg`
//! extension.

use std::fmt;
use std::str::FromStr;

use crate::error::{DepassError, DepassResult};

/// Extension of every password file in the store
pub const PASSWORD_EXTENSION: &str = ".gpg";

/// A validated, store-relative account identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Account {
    path: String,
}

impl Account {
    /// Validate and wrap an account identifier
    ///
    /// Rejects empty identifiers, absolute paths, empty components (which
    /// covers leading, trailing and doubled slashes), `.` and `..`
    /// components, and names that already carry the `.gpg` extension.
    pub fn new(path: impl Into<String>) -> DepassResult<Self> {
        let path = path.into();

        if path.is_empty() {
            return Err(DepassError::invalid_account(path, "account must not be empty"));
        }

        if path.starts_with('/') {
            return Err(DepassError::invalid_account(
                path,
                "account must be relative to the store root",
            ));
        }

        for component in path.split('/') {
            match component {
                "" => {
                    return Err(DepassError::invalid_account(
                        path,
                        "account must not contain empty path components",
                    ))
                }
                "." | ".." => {
                    return Err(DepassError::invalid_account(
                        path,
                        "relative path components are not allowed",
                    ))
                }
                _ => {}
            }
        }

        if path.ends_with(PASSWORD_EXTENSION) {
            return Err(DepassError::invalid_account(
                path,
                "leave off the .gpg extension",
            ));
        }

        Ok(Self { path })
    }

    /// The full identifier, e.g. `email/work`
    pub fn as_str(&self) -> &str {
        &self.path
    }

    /// The base name, e.g. `work` for `email/work`
    pub fn name(&self) -> &str {
        self.path
            .rsplit_once('/')
            .map_or(self.path.as_str(), |(_, name)| name)
    }

    /// The directory prefix, e.g. `email` for `email/work`, `None` at top level
    pub fn dir(&self) -> Option<&str> {
        self.path.rsplit_once('/').map(|(dir, _)| dir)
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)
    }
}

impl FromStr for Account {
    type Err = DepassError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Account::new(s)
    }
}
