//! Audit logging for depass
//!
//! Every completed deprecate or restore is appended to an append-only
//! audit log, so the history of an account's archive can be reconstructed
//! even though depass itself keeps no other state.
//!
//! - `AuditEntry`: one move, with timestamp, operation, account and both ends.
//! - `AuditLogger`: appends entries as line-delimited JSON (JSONL).
//!
//! # Example
//!
//! ```rust,ignore
//! use depass::audit::{AuditEntry, AuditLogger};
//!
//! let logger = AuditLogger::new(paths.audit_log());
//! let record = store.deprecate(&account)?;
//! logger.log(&AuditEntry::from_record(&record))?;
//! ```

mod entry;
mod logger;

pub use entry::AuditEntry;
pub use logger::AuditLogger;
