//! soundcn CLI Library
//!
//! Configuration and subcommand implementations behind the `soundcn` binary.
//!
//! This library exposes the command layer for testing purposes.

pub mod commands;
pub mod config;
pub mod error;

// Re-export commonly used types for convenience
pub use config::AppConfig;
pub use error::{CliError, Result};
