//! Configuration settings.
//!
//! Defines the main `Config` struct and environment variable loading logic.

use std::env;
use std::path::PathBuf;

/// Default text size in scale-independent pixels.
const DEFAULT_TEXT_SIZE_SP: f32 = 24.0;

/// Encoding used when exporting the rendered surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Png,
    WebP,
}

impl OutputFormat {
    fn from_str(s: &str) -> Self {
        match s.to_uppercase().as_str() {
            "WEBP" => Self::WebP,
            _ => Self::Png,
        }
    }

    /// Returns the matching `image` crate format.
    #[must_use]
    pub const fn image_format(self) -> image::ImageFormat {
        match self {
            Self::Png => image::ImageFormat::Png,
            Self::WebP => image::ImageFormat::WebP,
        }
    }
}

fn get_env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn get_env_bool_or(key: &str, default: bool) -> bool {
    env::var(key)
        .map(|v| v.to_lowercase() == "true" || v == "1")
        .unwrap_or(default)
}

fn get_env_f32_or(key: &str, default: f32) -> f32 {
    env::var(key)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

fn get_env_u32_or(key: &str, default: u32) -> u32 {
    env::var(key)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

fn get_env_opt<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|s| s.trim().parse().ok())
}

/// Application configuration loaded from environment.
#[derive(Debug, Clone)]
pub struct Config {
    /// Glyph size in scale-independent pixels.
    pub text_size_sp: f32,
    /// Display scaled density used for sp to px conversion.
    pub scaled_density: f32,
    /// Exact surface width; `None` lets the host pick the default.
    pub width: Option<u32>,
    /// Exact surface height; `None` lets the host pick the default.
    pub height: Option<u32>,
    /// Seed for reproducible codes and noise.
    pub seed: Option<u64>,
    /// Give every noise line its own random colour.
    pub line_color_random: bool,
    /// Give every digit its own random colour.
    pub text_color_random: bool,
    /// Optional TTF/OTF file replacing the embedded font.
    pub font_path: Option<PathBuf>,
    /// Where the rendered image is written.
    pub output_path: PathBuf,
    /// Encoding of the written image.
    pub output_format: OutputFormat,
    /// Extra resets performed before the image is written.
    pub reset_count: u32,
    /// Logging format: "json" or "pretty".
    pub log_format: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            text_size_sp: DEFAULT_TEXT_SIZE_SP,
            scaled_density: 1.0,
            width: None,
            height: None,
            seed: None,
            line_color_random: true,
            text_color_random: true,
            font_path: None,
            output_path: PathBuf::from("verification.png"),
            output_format: OutputFormat::Png,
            reset_count: 0,
            log_format: "json".to_string(),
        }
    }
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// Every variable is optional; missing or unparsable values fall back
    /// to the defaults of [`Config::default`].
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            text_size_sp: get_env_f32_or("TEXT_SIZE_SP", defaults.text_size_sp),
            scaled_density: get_env_f32_or("SCALED_DENSITY", defaults.scaled_density),
            width: get_env_opt("VIEW_WIDTH"),
            height: get_env_opt("VIEW_HEIGHT"),
            seed: get_env_opt("CODE_SEED"),
            line_color_random: get_env_bool_or("LINE_COLOR_RANDOM", defaults.line_color_random),
            text_color_random: get_env_bool_or("TEXT_COLOR_RANDOM", defaults.text_color_random),
            font_path: env::var("FONT_PATH").ok().map(PathBuf::from),
            output_path: env::var("OUTPUT_PATH").map_or(defaults.output_path, PathBuf::from),
            output_format: OutputFormat::from_str(&get_env_or("OUTPUT_FORMAT", "png")),
            reset_count: get_env_u32_or("RESET_COUNT", defaults.reset_count),
            log_format: get_env_or("LOG_FORMAT", &defaults.log_format),
        }
    }
}
