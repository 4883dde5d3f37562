//! The owned verification surface and its current code.

use base64::{Engine, engine::general_purpose::STANDARD};
use image::{ImageFormat, RgbImage};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use super::code::Code;
use super::font::{GlyphFont, TextBounds};
use super::paint::Style;
use super::renderer::{DrawParams, DrawReport, draw_pass};
use crate::config::{Result, ViewError};

/// Generates a four-digit code and renders it into a noisy image.
///
/// The view owns its random source, so a seeded generator makes every
/// code and every pixel reproducible.
pub struct VerificationView<R = StdRng> {
    rng: R,
    font: GlyphFont,
    style: Style,
    code: Code,
    text_bounds: TextBounds,
    surface: Option<RgbImage>,
    last_draw: Option<DrawReport>,
    invalidated: bool,
}

impl VerificationView<StdRng> {
    /// Creates a view with the embedded font and an OS-seeded generator.
    ///
    /// # Errors
    ///
    /// Returns an error if `text_size` is not a positive finite number.
    pub fn new(text_size: f32) -> Result<Self> {
        Self::with_rng(text_size, StdRng::from_os_rng())
    }

    /// Creates a view whose codes and noise are fully determined by `seed`.
    ///
    /// # Errors
    ///
    /// Returns an error if `text_size` is not a positive finite number.
    pub fn with_seed(text_size: f32, seed: u64) -> Result<Self> {
        Self::with_rng(text_size, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> VerificationView<R> {
    /// Creates a view drawing from the given generator.
    ///
    /// # Errors
    ///
    /// Returns an error if `text_size` is not a positive finite number.
    pub fn with_rng(text_size: f32, rng: R) -> Result<Self> {
        let font = GlyphFont::embedded(text_size)?;
        Ok(Self::with_font(font, Style::default(), rng))
    }

    /// Creates a view with an explicit font and style.
    ///
    /// A first code is sampled immediately; nothing is drawn until
    /// [`resize`](Self::resize) provides dimensions.
    pub fn with_font(font: GlyphFont, style: Style, mut rng: R) -> Self {
        let code = Code::random(&mut rng);
        let text_bounds = font.measure(code.as_str());
        Self {
            rng,
            font,
            style,
            code,
            text_bounds,
            surface: None,
            last_draw: None,
            invalidated: false,
        }
    }

    /// Replaces the surface with a fresh `width` x `height` one showing
    /// the current code. The code itself is left unchanged.
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<()> {
        if width == 0 || height == 0 {
            return Err(ViewError::InvalidDimensions { width, height });
        }
        debug!(width, height, "Surface resized");
        self.draw(width, height);
        Ok(())
    }

    /// Samples a new code and redraws the surface at its current size.
    ///
    /// Before the first [`resize`](Self::resize) only the code changes;
    /// the draw happens once dimensions are known.
    pub fn reset(&mut self) {
        self.regenerate_code();
        match self.dimensions() {
            Some((width, height)) => self.draw(width, height),
            None => debug!("Reset before first resize, draw deferred"),
        }
    }

    /// The current code as a four-character string.
    #[must_use]
    pub fn text(&self) -> &str {
        self.code.as_str()
    }

    #[must_use]
    pub const fn code(&self) -> &Code {
        &self.code
    }

    /// Checks an answer against the current code, ignoring spaces and newlines.
    #[must_use]
    pub fn verify(&self, answer: &str) -> bool {
        answer.replace([' ', '\n'], "") == self.code.as_str()
    }

    /// The rendered surface, if a size has been set.
    #[must_use]
    pub const fn surface(&self) -> Option<&RgbImage> {
        self.surface.as_ref()
    }

    #[must_use]
    pub fn dimensions(&self) -> Option<(u32, u32)> {
        self.surface.as_ref().map(RgbImage::dimensions)
    }

    /// Primitives sampled by the most recent draw pass.
    #[must_use]
    pub const fn last_draw(&self) -> Option<&DrawReport> {
        self.last_draw.as_ref()
    }

    #[must_use]
    pub const fn text_bounds(&self) -> TextBounds {
        self.text_bounds
    }

    #[must_use]
    pub const fn style(&self) -> Style {
        self.style
    }

    /// Whether the surface changed since the host last redisplayed it.
    #[must_use]
    pub const fn is_invalidated(&self) -> bool {
        self.invalidated
    }

    /// Returns and clears the pending redisplay request.
    pub fn take_invalidated(&mut self) -> bool {
        let invalidated = self.invalidated;
        self.invalidated = false;
        invalidated
    }

    /// Encodes the current surface.
    ///
    /// # Errors
    ///
    /// Returns an error if no surface exists yet or encoding fails.
    pub fn encode(&self, format: ImageFormat) -> Result<Vec<u8>> {
        let surface = self.surface.as_ref().ok_or(ViewError::NoSurface)?;
        let mut data = Vec::new();
        surface
            .write_to(&mut std::io::Cursor::new(&mut data), format)
            .map_err(|e| ViewError::Encode(format!("{format:?} encode failed: {e}")))?;
        Ok(data)
    }

    /// Encodes the current surface as a base64 `data:` URI.
    ///
    /// # Errors
    ///
    /// Returns an error if no surface exists yet or encoding fails.
    pub fn to_data_uri(&self, format: ImageFormat) -> Result<String> {
        let data = self.encode(format)?;
        Ok(format!(
            "data:{};base64,{}",
            format.to_mime_type(),
            STANDARD.encode(&data)
        ))
    }

    fn regenerate_code(&mut self) {
        self.code = Code::random(&mut self.rng);
        self.text_bounds = self.font.measure(self.code.as_str());
    }

    fn draw(&mut self, width: u32, height: u32) {
        let params = DrawParams {
            code: &self.code,
            text_bounds: self.text_bounds,
            font: &self.font,
            style: self.style,
        };
        let (surface, report) = draw_pass(width, height, &params, &mut self.rng);
        debug!(
            width,
            height,
            baseline = report.glyphs.first().map_or(0, |g| g.baseline),
            "Draw pass complete"
        );
        self.surface = Some(surface);
        self.last_draw = Some(report);
        self.invalidated = true;
    }
}
