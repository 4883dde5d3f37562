//! Configuration management.
//!
//! Loads configuration from environment variables using dotenvy.
//! Settings are read once at startup by the host binary.

mod error;
mod settings;

pub use error::{Result, ViewError};
pub use settings::{Config, OutputFormat};
