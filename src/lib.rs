//! Library definitions.
//!
//! Exports the verification image generator, its host adapter and
//! configuration types.

pub mod config;
pub mod host;
pub mod verification;

pub use config::{Config, OutputFormat, Result, ViewError};
pub use host::{HostView, MeasureMode, MeasureSpec, measure, sp_to_px};
pub use verification::{Code, DrawReport, GlyphFont, Style, VerificationView};
