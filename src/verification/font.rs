//! Glyph font loading, text measurement and baseline text drawing.

use ab_glyph::{Font, FontArc, GlyphId, PxScale, Rect, ScaleFont, point};
use image::{Rgb, RgbImage};
use imageproc::drawing::draw_text_mut;
use std::path::Path;

use crate::config::{Result, ViewError};

const FONT_BYTES: &[u8] = include_bytes!("../../assets/DejaVuSans-Bold.ttf");

/// Tight ink bounds of a string, relative to its baseline origin.
///
/// `top` is negative for ink above the baseline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextBounds {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl TextBounds {
    #[must_use]
    pub const fn width(&self) -> i32 {
        self.right - self.left
    }

    #[must_use]
    pub const fn height(&self) -> i32 {
        self.bottom - self.top
    }
}

/// A font bound to a text size, where the size is the em height in pixels.
#[derive(Clone)]
pub struct GlyphFont {
    font: FontArc,
    text_size: f32,
    scale: PxScale,
}

impl std::fmt::Debug for GlyphFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GlyphFont")
            .field("text_size", &self.text_size)
            .field("scale", &self.scale)
            .finish_non_exhaustive()
    }
}

impl GlyphFont {
    /// Loads the embedded font at `text_size` pixels per em.
    ///
    /// # Errors
    ///
    /// Returns an error if `text_size` is not a positive finite number.
    pub fn embedded(text_size: f32) -> Result<Self> {
        let font = FontArc::try_from_slice(FONT_BYTES).map_err(|e| ViewError::Font(e.to_string()))?;
        Self::new(font, text_size)
    }

    /// Loads a TTF/OTF font file at `text_size` pixels per em.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not a valid font,
    /// or `text_size` is not a positive finite number.
    pub fn from_path(path: &Path, text_size: f32) -> Result<Self> {
        let data = std::fs::read(path)
            .map_err(|e| ViewError::Config(format!("failed to read font '{}': {e}", path.display())))?;
        let font = FontArc::try_from_vec(data).map_err(|e| ViewError::Font(e.to_string()))?;
        Self::new(font, text_size)
    }

    /// Binds an already parsed font to `text_size` pixels per em.
    ///
    /// # Errors
    ///
    /// Returns an error if `text_size` is not a positive finite number or
    /// the font lacks a units-per-em value.
    pub fn new(font: FontArc, text_size: f32) -> Result<Self> {
        if !text_size.is_finite() || text_size <= 0.0 {
            return Err(ViewError::InvalidTextSize(text_size));
        }
        let units_per_em = font
            .units_per_em()
            .ok_or_else(|| ViewError::Font("font has no units per em".to_string()))?;
        let scale = PxScale::from(text_size * font.height_unscaled() / units_per_em);
        Ok(Self {
            font,
            text_size,
            scale,
        })
    }

    #[must_use]
    pub const fn text_size(&self) -> f32 {
        self.text_size
    }

    /// Measures the tight ink bounds of `text` laid out on one line.
    #[must_use]
    pub fn measure(&self, text: &str) -> TextBounds {
        let scaled = self.font.as_scaled(self.scale);
        let mut caret = 0.0_f32;
        let mut prev: Option<GlyphId> = None;
        let mut ink: Option<Rect> = None;

        for ch in text.chars() {
            let id = scaled.glyph_id(ch);
            if let Some(prev) = prev {
                caret += scaled.kern(prev, id);
            }
            let glyph = id.with_scale_and_position(self.scale, point(caret, 0.0));
            caret += scaled.h_advance(id);
            prev = Some(id);

            if let Some(outlined) = self.font.outline_glyph(glyph) {
                let r = outlined.px_bounds();
                ink = Some(match ink {
                    None => r,
                    Some(acc) => Rect {
                        min: point(acc.min.x.min(r.min.x), acc.min.y.min(r.min.y)),
                        max: point(acc.max.x.max(r.max.x), acc.max.y.max(r.max.y)),
                    },
                });
            }
        }

        ink.map_or_else(TextBounds::default, |r| TextBounds {
            left: f32_to_i32(r.min.x.floor()),
            top: f32_to_i32(r.min.y.floor()),
            right: f32_to_i32(r.max.x.ceil()),
            bottom: f32_to_i32(r.max.y.ceil()),
        })
    }

    /// Draws `text` with its baseline origin at `(x, baseline)`.
    pub fn draw(&self, img: &mut RgbImage, text: &str, x: i32, baseline: i32, color: Rgb<u8>) {
        let ascent = f32_to_i32(self.font.as_scaled(self.scale).ascent().round());
        draw_text_mut(img, color, x, baseline - ascent, self.scale, &self.font, text);
    }
}

#[inline]
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn f32_to_i32(val: f32) -> i32 {
    val.clamp(i32::MIN as f32, i32::MAX as f32) as i32
}
