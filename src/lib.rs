//! depass - deprecate passwords inside a `pass` password store
//!
//! Instead of deleting an outdated password, depass moves it into an archive
//! directory inside the store and stamps it with an increasing version
//! number. The newest archived version can later be restored. No password
//! is ever deleted or overwritten.
//!
//! # Architecture
//!
//! - `config`: Settings, depass's own paths, and the store layout
//! - `error`: Custom error types
//! - `models`: Account identifiers
//! - `storage`: Version resolver, mover, and deprecate/restore logic
//! - `audit`: Append-only log of completed moves
//! - `cli`: Command-line arguments and the command handler
//!
//! # Example
//!
//! ```rust,ignore
//! use depass::config::StorePaths;
//! use depass::models::Account;
//! use depass::storage::PasswordStore;
//!
//! let store = PasswordStore::new(StorePaths::new("/home/me/.password-store", "z_deprecated")?);
//! let record = store.deprecate(&Account::new("email/work")?)?;
//! println!("{}", record); // email/work -> z_deprecated/email/work.old.0
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod storage;

pub use error::{DepassError, DepassResult};
