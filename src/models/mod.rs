//! Core data models for depass

pub mod account;

pub use account::{Account, PASSWORD_EXTENSION};
