//! Single-file moves inside the password store
//!
//! Every change depass makes to a store is one rename done here. Both ends
//! are checked before anything is touched: the source has to exist and the
//! destination has to be free. Nothing is ever overwritten.

use std::fmt;
use std::fs;
use std::io::ErrorKind;

use serde::{Deserialize, Serialize};

use crate::config::StorePaths;
use crate::error::{DepassError, DepassResult};

/// Confirmation of a completed move, in store-relative identifiers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Moved {
    /// Where the file was, e.g. `email/work`
    pub source: String,
    /// Where the file is now, e.g. `z_deprecated/email/work.old.0`
    pub destination: String,
}

impl fmt::Display for Moved {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.source, self.destination)
    }
}

/// Rename `<source>.gpg` to `<destination>.gpg` inside the store
///
/// Missing parent directories of the destination are created once both
/// checks have passed.
///
/// # Errors
///
/// - [`DepassError::SourceNotFound`] if the source file does not exist
/// - [`DepassError::DestinationOccupied`] if anything already sits at the destination
pub fn move_entry(store: &StorePaths, source: &str, destination: &str) -> DepassResult<Moved> {
    let src_path = store.file_for(source);
    let dst_path = store.file_for(destination);

    if !src_path.exists() {
        return Err(DepassError::SourceNotFound(source.to_string()));
    }

    // symlink_metadata so a dangling link still counts as occupied
    match fs::symlink_metadata(&dst_path) {
        Ok(_) => return Err(DepassError::DestinationOccupied(destination.to_string())),
        Err(e) if e.kind() == ErrorKind::NotFound => {}
        Err(e) => {
            return Err(DepassError::Io(format!(
                "Failed to check {}: {}",
                dst_path.display(),
                e
            )))
        }
    }

    if let Some(parent) = dst_path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            DepassError::Io(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    fs::rename(&src_path, &dst_path).map_err(|e| {
        DepassError::Io(format!(
            "Failed to move {} to {}: {}",
            src_path.display(),
            dst_path.display(),
            e
        ))
    })?;

    Ok(Moved {
        source: source.to_string(),
        destination: destination.to_string(),
    })
}
