//! Audit entry data structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::storage::{MoveRecord, Operation};

/// A single audit log entry
///
/// Records one completed move between the active and archived locations of
/// an account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the move happened (UTC)
    pub timestamp: DateTime<Utc>,

    /// Deprecate or restore
    pub operation: Operation,

    /// Account the move belongs to
    pub account: String,

    /// Store-relative identifier the file was moved from
    pub source: String,

    /// Store-relative identifier the file was moved to
    pub destination: String,

    /// Archive version involved
    pub version: u64,
}

impl AuditEntry {
    /// Build an entry for a completed move, stamped with the current time
    pub fn from_record(record: &MoveRecord) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: record.operation,
            account: record.account.to_string(),
            source: record.moved.source.clone(),
            destination: record.moved.destination.clone(),
            version: record.version,
        }
    }
}
