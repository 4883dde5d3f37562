use crate::common::{drawn_code, seeded_view, sized_view};
use std::collections::HashSet;
use verifyview::{VerificationView, ViewError};

#[test]
fn test_codes_are_four_digits() {
    let mut view = sized_view(5, 240, 120);
    for _ in 0..200 {
        view.reset();
        let text = view.text();
        assert_eq!(text.len(), 4);
        assert!(text.chars().all(|c| c.is_ascii_digit()));
        let joined: String = view
            .code()
            .digits()
            .iter()
            .map(|d| char::from(b'0' + d))
            .collect();
        assert_eq!(joined, text);
    }
}

#[test]
fn test_text_matches_last_draw() {
    let mut view = sized_view(8, 240, 120);
    assert_eq!(drawn_code(&view), view.text());
    for _ in 0..25 {
        view.reset();
        assert_eq!(drawn_code(&view), view.text());
    }
}

#[test]
fn test_resize_never_regenerates_code() {
    let mut view = seeded_view(13);
    let code = view.text().to_string();
    for (w, h) in [(240, 120), (100, 50), (640, 320), (240, 120)] {
        view.resize(w, h).unwrap();
        assert_eq!(view.text(), code);
        assert_eq!(drawn_code(&view), code);
    }
}

#[test]
fn test_reset_changes_code_over_trials() {
    let mut view = VerificationView::new(24.0).unwrap();
    view.resize(240, 120).unwrap();
    let mut seen = HashSet::new();
    for _ in 0..100 {
        view.reset();
        seen.insert(view.text().to_string());
    }
    assert!(seen.len() > 1);
}

#[test]
fn test_seeded_runs_are_bit_identical() {
    let run = || {
        let mut view = seeded_view(42);
        view.resize(240, 120).unwrap();
        view.reset();
        (
            view.text().to_string(),
            view.surface().unwrap().as_raw().clone(),
        )
    };
    let (code_a, pixels_a) = run();
    let (code_b, pixels_b) = run();
    assert_eq!(code_a, code_b);
    assert_eq!(pixels_a, pixels_b);
}

#[test]
fn test_seeded_reset_sequence() {
    let sequence = || {
        let mut view = seeded_view(42);
        view.resize(240, 120).unwrap();
        let mut codes = vec![view.text().to_string()];
        for _ in 0..5 {
            view.reset();
            codes.push(view.text().to_string());
        }
        codes
    };
    let first = sequence();
    assert_eq!(first, sequence());
    assert!(first[1..].iter().any(|c| *c != first[0]));
}

#[test]
fn test_different_seeds_differ() {
    let a = sized_view(1, 240, 120);
    let b = sized_view(2, 240, 120);
    assert_ne!(a.surface().unwrap().as_raw(), b.surface().unwrap().as_raw());
}

#[test]
fn test_resize_replaces_surface() {
    let mut view = sized_view(3, 240, 120);
    let first = view.surface().unwrap().clone();
    view.resize(240, 120).unwrap();
    assert_eq!(view.dimensions(), Some((240, 120)));
    assert_ne!(first.as_raw(), view.surface().unwrap().as_raw());
}

#[test]
fn test_failed_resize_keeps_previous_surface() {
    let mut view = sized_view(4, 240, 120);
    let before = view.surface().unwrap().clone();
    let err = view.resize(240, 0).unwrap_err();
    assert!(matches!(err, ViewError::InvalidDimensions { .. }));
    assert_eq!(view.surface().unwrap().as_raw(), before.as_raw());
}

#[test]
fn test_reset_without_surface() {
    let mut view = seeded_view(6);
    let first = view.text().to_string();
    let mut changed = false;
    for _ in 0..5 {
        view.reset();
        changed |= view.text() != first;
    }
    assert!(changed);
    assert!(view.surface().is_none());
    assert!(!view.is_invalidated());
}
