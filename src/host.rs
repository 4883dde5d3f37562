//! Host adapter.
//!
//! Plays the part of the UI layer around a [`VerificationView`]: picks the
//! surface size from layout constraints, converts scale-independent text
//! sizes to pixels, forwards size changes and reset clicks, and hands the
//! surface out for display when a redisplay was requested.

use image::RgbImage;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::config::{Config, Result};
use crate::verification::{GlyphFont, Style, VerificationView};

/// Width used when the layout does not impose one.
pub const DEFAULT_WIDTH: u32 = 240;
/// Height used when the layout does not impose one.
pub const DEFAULT_HEIGHT: u32 = 120;

/// How a parent constrains one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeasureMode {
    /// The parent fixed the size.
    Exactly,
    /// The parent allows up to the size ("wrap content").
    AtMost,
    /// No constraint at all.
    Unspecified,
}

/// A layout constraint for one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeasureSpec {
    pub mode: MeasureMode,
    pub size: u32,
}

impl MeasureSpec {
    #[must_use]
    pub const fn exactly(size: u32) -> Self {
        Self {
            mode: MeasureMode::Exactly,
            size,
        }
    }

    #[must_use]
    pub const fn at_most(size: u32) -> Self {
        Self {
            mode: MeasureMode::AtMost,
            size,
        }
    }

    #[must_use]
    pub const fn unspecified() -> Self {
        Self {
            mode: MeasureMode::Unspecified,
            size: 0,
        }
    }

    /// An exact spec when `size` is known, otherwise wrap content.
    #[must_use]
    pub const fn from_option(size: Option<u32>) -> Self {
        match size {
            Some(size) => Self::exactly(size),
            None => Self::at_most(u32::MAX),
        }
    }

    const fn resolve(self, default: u32) -> u32 {
        match self.mode {
            MeasureMode::Exactly => self.size,
            MeasureMode::AtMost | MeasureMode::Unspecified => default,
        }
    }
}

/// Resolves layout constraints to surface dimensions.
///
/// Axes the parent fixes keep their size; every other axis falls back to
/// 240 x 120.
#[must_use]
pub const fn measure(width: MeasureSpec, height: MeasureSpec) -> (u32, u32) {
    (width.resolve(DEFAULT_WIDTH), height.resolve(DEFAULT_HEIGHT))
}

/// Converts scale-independent pixels to whole device pixels, rounding half up.
#[must_use]
pub fn sp_to_px(sp: f32, scaled_density: f32) -> f32 {
    sp.mul_add(scaled_density, 0.5).floor()
}

/// A verification view embedded in a host surface.
pub struct HostView<R = StdRng> {
    view: VerificationView<R>,
}

impl HostView<StdRng> {
    /// Builds and lays out a view from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the text size resolves to zero pixels, the font
    /// cannot be loaded, or a configured dimension is zero.
    pub fn from_config(config: &Config) -> Result<Self> {
        let text_px = sp_to_px(config.text_size_sp, config.scaled_density);
        let font = match &config.font_path {
            Some(path) => GlyphFont::from_path(path, text_px)?,
            None => GlyphFont::embedded(text_px)?,
        };
        let style = Style {
            line_color_random: config.line_color_random,
            text_color_random: config.text_color_random,
        };
        let rng = config
            .seed
            .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);

        let mut host = Self::new(VerificationView::with_font(font, style, rng));
        let (width, height) = host.on_measure(
            MeasureSpec::from_option(config.width),
            MeasureSpec::from_option(config.height),
        );
        host.on_size_changed(width, height)?;
        Ok(host)
    }
}

impl<R: Rng> HostView<R> {
    pub const fn new(view: VerificationView<R>) -> Self {
        Self { view }
    }

    /// Picks the surface size for the given constraints.
    #[must_use]
    pub fn on_measure(&self, width: MeasureSpec, height: MeasureSpec) -> (u32, u32) {
        let size = measure(width, height);
        debug!(width = size.0, height = size.1, "Measured view");
        size
    }

    /// Forwards a layout size change, skipping no-op changes.
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero.
    pub fn on_size_changed(&mut self, width: u32, height: u32) -> Result<()> {
        if self.view.dimensions() == Some((width, height)) {
            return Ok(());
        }
        self.view.resize(width, height)
    }

    /// Handles the reset trigger and returns the new code.
    pub fn on_reset_clicked(&mut self) -> &str {
        self.view.reset();
        self.view.text()
    }

    /// Returns the surface when it changed since the last poll.
    pub fn poll_frame(&mut self) -> Option<&RgbImage> {
        if self.view.take_invalidated() {
            self.view.surface()
        } else {
            None
        }
    }

    #[must_use]
    pub const fn view(&self) -> &VerificationView<R> {
        &self.view
    }

    pub const fn view_mut(&mut self) -> &mut VerificationView<R> {
        &mut self.view
    }
}
