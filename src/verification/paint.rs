//! Drawing context and fixed style constants.

use image::Rgb;
use rand::Rng;

pub const BACKGROUND_COLOR: Rgb<u8> = Rgb([255, 255, 255]);
pub const DOT_COLOR: Rgb<u8> = Rgb([255, 0, 0]);
pub const LINE_COLOR: Rgb<u8> = Rgb([255, 0, 0]);
pub const TEXT_COLOR: Rgb<u8> = Rgb([255, 0, 0]);

pub const DOT_COUNT: usize = 50;
/// Dot radii are sampled from `0..DOT_RADIUS_BOUND`.
pub const DOT_RADIUS_BOUND: i32 = 8;
pub const LINE_COUNT: usize = 4;
pub const LINE_WIDTH: f32 = 5.0;

/// Colour and stroke for a single drawing primitive.
///
/// Built per primitive and passed by value; nothing carries over
/// between draw calls.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paint {
    pub color: Rgb<u8>,
    pub stroke_width: f32,
}

impl Paint {
    #[must_use]
    pub const fn fill(color: Rgb<u8>) -> Self {
        Self {
            color,
            stroke_width: 0.0,
        }
    }

    #[must_use]
    pub const fn stroke(color: Rgb<u8>, stroke_width: f32) -> Self {
        Self {
            color,
            stroke_width,
        }
    }
}

/// Colour toggles for lines and digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    /// Give every noise line an independent random colour.
    pub line_color_random: bool,
    /// Give every digit an independent random colour.
    pub text_color_random: bool,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            line_color_random: true,
            text_color_random: true,
        }
    }
}

impl Style {
    pub(crate) fn line_color(self, rng: &mut impl Rng) -> Rgb<u8> {
        if self.line_color_random {
            random_color(rng)
        } else {
            LINE_COLOR
        }
    }

    pub(crate) fn text_color(self, rng: &mut impl Rng) -> Rgb<u8> {
        if self.text_color_random {
            random_color(rng)
        } else {
            TEXT_COLOR
        }
    }
}

/// Samples each channel uniformly from `0..=255`.
pub fn random_color(rng: &mut impl Rng) -> Rgb<u8> {
    Rgb([
        rng.random_range(0..=255),
        rng.random_range(0..=255),
        rng.random_range(0..=255),
    ])
}
