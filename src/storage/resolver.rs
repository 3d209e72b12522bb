//! Archived version lookup
//!
//! Scans the archive directory of one account and reports which versions
//! exist. Only direct children are considered, and a file belongs to an
//! account only when its name minus the `.old.<N>.gpg` suffix equals the
//! account's base name exactly.

use std::fs;
use std::sync::OnceLock;

use regex::Regex;

use crate::config::StorePaths;
use crate::error::{DepassError, DepassResult};
use crate::models::Account;

/// `<name>.old.<N>.gpg`, anchored at the end of the file name
///
/// `N` is written without leading zeros, so every version has exactly one
/// file name and `archived_id` rebuilds the name the scan saw.
const ARCHIVED_NAME_REGEX: &str = r"^(.+)\.old\.(0|[1-9][0-9]*)\.gpg$";

fn archived_name_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(ARCHIVED_NAME_REGEX).expect("archived name regex is valid"))
}

/// Split an archived file name into its base name and version
///
/// Returns `None` for anything that is not a well-formed archived name,
/// including versions that do not fit in a `u64`.
pub fn parse_archived_name(file_name: &str) -> Option<(&str, u64)> {
    let caps = archived_name_regex().captures(file_name)?;
    let name = caps.get(1)?.as_str();
    let version = caps.get(2)?.as_str().parse().ok()?;
    Some((name, version))
}

/// All archived versions of `account`, sorted ascending
pub fn archived_versions(store: &StorePaths, account: &Account) -> DepassResult<Vec<u64>> {
    let dir = store.archive_dir(account);

    if !dir.is_dir() {
        return Ok(Vec::new());
    }

    let entries = fs::read_dir(&dir).map_err(|e| {
        DepassError::Io(format!("Failed to read {}: {}", dir.display(), e))
    })?;

    let mut versions = Vec::new();

    for entry in entries {
        let entry = entry
            .map_err(|e| DepassError::Io(format!("Failed to read directory entry: {}", e)))?;

        if !entry.path().is_file() {
            continue;
        }

        let file_name = entry.file_name();
        let Some(file_name) = file_name.to_str() else {
            continue;
        };

        if let Some((name, version)) = parse_archived_name(file_name) {
            if name == account.name() {
                versions.push(version);
            }
        }
    }

    versions.sort_unstable();
    Ok(versions)
}

/// Highest archived version of `account`, or `None` if nothing is archived
pub fn latest_version(store: &StorePaths, account: &Account) -> DepassResult<Option<u64>> {
    Ok(archived_versions(store, account)?.last().copied())
}

/// Version the next archive of `account` will receive
pub fn next_version(latest: Option<u64>, account: &Account) -> DepassResult<u64> {
    match latest {
        None => Ok(0),
        Some(latest) => latest
            .checked_add(1)
            .ok_or_else(|| DepassError::VersionOverflow {
                account: account.to_string(),
                latest,
            }),
    }
}
