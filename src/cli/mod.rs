//! CLI command handlers
//!
//! Bridges the clap argument parsing with the storage layer.

pub mod deprecate;

pub use deprecate::{handle_depass_command, resolve_store_paths, DepassArgs, Status};
