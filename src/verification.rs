//! Verification image generation.
//!
//! Samples a four-digit code and renders it into a noisy bitmap of
//! dots, lines and randomly coloured digits.

pub mod code;
pub mod font;
pub mod paint;
pub mod renderer;
pub mod view;

pub use code::{CODE_LENGTH, Code};
pub use font::{GlyphFont, TextBounds};
pub use paint::{Paint, Style};
pub use renderer::{DrawReport, Dot, GlyphPlacement, Line};
pub use view::VerificationView;
