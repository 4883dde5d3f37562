use crate::common::{fixed_color_view, sized_view};
use image::Rgb;

const RED: Rgb<u8> = Rgb([255, 0, 0]);
const WHITE: Rgb<u8> = Rgb([255, 255, 255]);

#[test]
fn test_noise_stays_on_surface() {
    for seed in 0..30 {
        let view = sized_view(seed, 240, 120);
        let report = view.last_draw().unwrap();
        assert_eq!(report.dots.len(), 50);
        assert_eq!(report.lines.len(), 4);
        for dot in &report.dots {
            assert!((0..240).contains(&dot.x));
            assert!((0..120).contains(&dot.y));
            assert!((0..8).contains(&dot.radius));
        }
        for line in &report.lines {
            assert!((0..240).contains(&line.start.0) && (0..240).contains(&line.end.0));
            assert!((0..120).contains(&line.start.1) && (0..120).contains(&line.end.1));
        }
    }
}

#[test]
fn test_baseline_shared_and_clamped() {
    let mut view = sized_view(21, 240, 120);
    for _ in 0..50 {
        view.reset();
        let report = view.last_draw().unwrap();
        let text_height = report.text_bounds.height();
        let baseline = report.glyphs[0].baseline;
        assert!(baseline >= text_height);
        assert!(report.glyphs.iter().all(|g| g.baseline == baseline));
    }
}

#[test]
fn test_glyph_spacing_formula() {
    let view = sized_view(17, 320, 160);
    let report = view.last_draw().unwrap();
    let text_width = view.text_bounds().width();
    let gap = (320 - text_width) / 5;
    let xs: Vec<i32> = report.glyphs.iter().map(|g| g.x).collect();
    assert_eq!(
        xs,
        vec![
            gap,
            gap * 2 + text_width / 4,
            gap * 3 + text_width / 4 * 2,
            gap * 4 + text_width / 4 * 3,
        ]
    );
}

#[test]
fn test_fixed_colors_paint_red() {
    let mut view = fixed_color_view(12);
    view.resize(240, 120).unwrap();
    let report = view.last_draw().unwrap();
    assert!(report.lines.iter().all(|l| l.color == RED));
    assert!(report.glyphs.iter().all(|g| g.color == RED));

    let surface = view.surface().unwrap();
    assert!(surface.pixels().any(|p| *p == RED));
    assert!(surface.pixels().any(|p| *p == WHITE));
}

#[test]
fn test_large_dot_is_painted() {
    let mut view = fixed_color_view(33);
    view.resize(240, 120).unwrap();
    let report = view.last_draw().unwrap();
    let surface = view.surface().unwrap();
    let painted = report
        .dots
        .iter()
        .filter(|d| d.radius >= 3)
        .filter(|d| {
            let x = u32::try_from(d.x).unwrap();
            let y = u32::try_from(d.y).unwrap();
            *surface.get_pixel(x, y) == RED
        })
        .count();
    assert!(painted > 0);
}

#[test]
fn test_text_bounds_follow_code() {
    let mut view = sized_view(2, 240, 120);
    for _ in 0..10 {
        view.reset();
        let bounds = view.text_bounds();
        assert_eq!(view.last_draw().unwrap().text_bounds, bounds);
        assert!(bounds.width() > 0 && bounds.height() > 0);
    }
}
