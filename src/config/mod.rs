//! Configuration module for depass
//!
//! This module provides configuration management including:
//! - XDG-compliant location of depass's own files
//! - User settings persistence
//! - The password store layout handed to the resolver and mover

pub mod paths;
pub mod settings;
pub mod store;

pub use paths::DepassPaths;
pub use settings::Settings;
pub use store::StorePaths;
