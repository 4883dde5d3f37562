//! Draw pass: background, noise dots, noise lines and the code digits.
//!
//! Every pass paints into a fresh buffer, so callers either get a
//! complete surface or keep the one they already had.

use image::{ImageBuffer, Rgb, RgbImage};
use imageproc::drawing::{draw_filled_circle_mut, draw_polygon_mut};
use imageproc::point::Point;
use rand::Rng;

use super::code::{CODE_LENGTH, Code};
use super::font::{GlyphFont, TextBounds, f32_to_i32};
use super::paint::{
    BACKGROUND_COLOR, DOT_COLOR, DOT_COUNT, DOT_RADIUS_BOUND, LINE_COUNT, LINE_WIDTH, Paint, Style,
};

/// A sampled noise dot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dot {
    pub x: i32,
    pub y: i32,
    pub radius: i32,
}

/// A sampled noise line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line {
    pub start: (i32, i32),
    pub end: (i32, i32),
    pub color: Rgb<u8>,
}

/// Where and how one digit was drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphPlacement {
    pub ch: char,
    pub x: i32,
    pub baseline: i32,
    pub color: Rgb<u8>,
}

/// Everything sampled during one draw pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawReport {
    pub width: u32,
    pub height: u32,
    pub dots: Vec<Dot>,
    pub lines: Vec<Line>,
    pub glyphs: Vec<GlyphPlacement>,
    pub text_bounds: TextBounds,
}

/// Inputs of a draw pass that stay fixed between passes.
pub struct DrawParams<'a> {
    pub code: &'a Code,
    pub text_bounds: TextBounds,
    pub font: &'a GlyphFont,
    pub style: Style,
}

/// Renders a complete surface of `width` x `height` for `params.code`.
pub fn draw_pass(
    width: u32,
    height: u32,
    params: &DrawParams<'_>,
    rng: &mut impl Rng,
) -> (RgbImage, DrawReport) {
    let mut img: RgbImage = ImageBuffer::from_pixel(width, height, BACKGROUND_COLOR);
    let width_i32 = i32::try_from(width).unwrap_or(i32::MAX);
    let height_i32 = i32::try_from(height).unwrap_or(i32::MAX);

    let dots = draw_dots(&mut img, rng, width_i32, height_i32);
    let lines = draw_lines(&mut img, rng, params.style, width_i32, height_i32);
    let glyphs = draw_glyphs(&mut img, rng, params, width_i32, height_i32);

    let report = DrawReport {
        width,
        height,
        dots,
        lines,
        glyphs,
        text_bounds: params.text_bounds,
    };
    (img, report)
}

fn draw_dots(img: &mut RgbImage, rng: &mut impl Rng, width: i32, height: i32) -> Vec<Dot> {
    let paint = Paint::fill(DOT_COLOR);
    let mut dots = Vec::with_capacity(DOT_COUNT);
    for _ in 0..DOT_COUNT {
        let dot = Dot {
            x: rng.random_range(0..width),
            y: rng.random_range(0..height),
            radius: rng.random_range(0..DOT_RADIUS_BOUND),
        };
        // A zero radius circle covers no pixels.
        if dot.radius > 0 {
            draw_filled_circle_mut(img, (dot.x, dot.y), dot.radius, paint.color);
        }
        dots.push(dot);
    }
    dots
}

fn draw_lines(
    img: &mut RgbImage,
    rng: &mut impl Rng,
    style: Style,
    width: i32,
    height: i32,
) -> Vec<Line> {
    let mut lines = Vec::with_capacity(LINE_COUNT);
    for _ in 0..LINE_COUNT {
        let color = style.line_color(rng);
        let line = Line {
            start: (rng.random_range(0..width), rng.random_range(0..height)),
            end: (rng.random_range(0..width), rng.random_range(0..height)),
            color,
        };
        draw_thick_line(img, line.start, line.end, Paint::stroke(color, LINE_WIDTH));
        lines.push(line);
    }
    lines
}

/// Strokes a butt-capped segment as a filled quad.
fn draw_thick_line(img: &mut RgbImage, start: (i32, i32), end: (i32, i32), paint: Paint) {
    if start == end {
        return;
    }
    let (x1, y1) = (i32_to_f32(start.0), i32_to_f32(start.1));
    let (x2, y2) = (i32_to_f32(end.0), i32_to_f32(end.1));
    let (dx, dy) = (x2 - x1, y2 - y1);
    let half = paint.stroke_width / 2.0;
    let len = dx.hypot(dy);
    let (nx, ny) = (-dy / len * half, dx / len * half);

    let corners = [
        (x1 + nx, y1 + ny),
        (x2 + nx, y2 + ny),
        (x2 - nx, y2 - ny),
        (x1 - nx, y1 - ny),
    ]
    .map(|(x, y)| Point::new(f32_to_i32(x.round()), f32_to_i32(y.round())));

    draw_polygon_mut(img, &corners, paint.color);
}

fn draw_glyphs(
    img: &mut RgbImage,
    rng: &mut impl Rng,
    params: &DrawParams<'_>,
    width: i32,
    height: i32,
) -> Vec<GlyphPlacement> {
    let text_width = params.text_bounds.width();
    let text_height = params.text_bounds.height();
    let gap = (width - text_width) / 5;
    let baseline = baseline(rng, height, text_height);

    let mut glyphs = Vec::with_capacity(CODE_LENGTH);
    for i in 0..CODE_LENGTH {
        let color = params.style.text_color(rng);
        let index = i32::try_from(i).unwrap_or(0);
        let placement = GlyphPlacement {
            ch: params.code.glyph(i),
            x: gap * (index + 1) + text_width / 4 * index,
            baseline,
            color,
        };
        let mut buf = [0u8; 4];
        params.font.draw(
            img,
            placement.ch.encode_utf8(&mut buf),
            placement.x,
            placement.baseline,
            color,
        );
        glyphs.push(placement);
    }
    glyphs
}

/// One baseline shared by all digits of a pass, never above the text height.
fn baseline(rng: &mut impl Rng, height: i32, text_height: i32) -> i32 {
    let u: f32 = rng.random();
    let y = f32_to_i32(i32_to_f32(height / 2 + text_height) * u);
    y.max(text_height)
}

#[inline]
#[allow(clippy::cast_precision_loss)]
fn i32_to_f32(val: i32) -> f32 {
    val as f32
}
