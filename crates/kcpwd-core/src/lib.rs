//! # kcpwd-core
//!
//! Core types, configuration, and utilities for kcpwd.
//!
//! This crate provides shared functionality used by the other kcpwd crates:
//!
//! - **Configuration**: Loading, validation, and saving of the optional config file
//! - **Secrets**: [`SecretString`], a zero-on-drop string for credential values
//! - **Utilities**: Path resolution and environment handling

pub mod config;
pub mod env;
pub mod error;
pub mod paths;
pub mod secret;

// Re-exports for convenience
pub use config::Config;
pub use error::ConfigError;
pub use secret::SecretString;
