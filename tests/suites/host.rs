use image::GenericImageView;
use verifyview::{Config, HostView, MeasureSpec, OutputFormat};

#[test]
fn test_wrap_content_uses_default_size() {
    let config = Config {
        seed: Some(42),
        ..Config::default()
    };
    let host = HostView::from_config(&config).unwrap();
    assert_eq!(host.view().dimensions(), Some((240, 120)));
    assert_eq!(
        host.on_measure(MeasureSpec::exactly(500), MeasureSpec::unspecified()),
        (500, 120)
    );
}

#[test]
fn test_density_scales_text() {
    let base = HostView::from_config(&Config {
        seed: Some(1),
        ..Config::default()
    })
    .unwrap();
    let dense = HostView::from_config(&Config {
        seed: Some(1),
        scaled_density: 2.0,
        ..Config::default()
    })
    .unwrap();
    assert_eq!(base.view().text(), dense.view().text());
    assert!(dense.view().text_bounds().height() > base.view().text_bounds().height());
}

#[test]
fn test_reset_click_and_frames() {
    let mut host = HostView::from_config(&Config {
        seed: Some(77),
        ..Config::default()
    })
    .unwrap();
    assert!(host.poll_frame().is_some());
    assert!(host.poll_frame().is_none());

    let code = host.on_reset_clicked().to_string();
    assert!(host.view().verify(&code));
    let frame = host.poll_frame().unwrap();
    assert_eq!(frame.dimensions(), (240, 120));
}

#[test]
fn test_export_roundtrip_to_file() {
    let config = Config {
        seed: Some(5),
        width: Some(200),
        height: Some(100),
        output_format: OutputFormat::Png,
        ..Config::default()
    };
    let host = HostView::from_config(&config).unwrap();
    let data = host
        .view()
        .encode(config.output_format.image_format())
        .unwrap();

    let path = std::env::temp_dir().join("verifyview_test_export.png");
    std::fs::write(&path, &data).unwrap();
    let loaded = image::open(&path).unwrap();
    let _ = std::fs::remove_file(&path);

    assert_eq!(loaded.dimensions(), (200, 100));
    assert_eq!(
        loaded.to_rgb8().as_raw(),
        host.view().surface().unwrap().as_raw()
    );
}

#[test]
fn test_custom_font_path() {
    let font_path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("assets/DejaVuSans-Bold.ttf");
    let config = Config {
        seed: Some(3),
        font_path: Some(font_path),
        ..Config::default()
    };
    let host = HostView::from_config(&config).unwrap();
    assert_eq!(host.view().text().len(), 4);

    let missing = Config {
        font_path: Some("/nonexistent/font.ttf".into()),
        ..Config::default()
    };
    assert!(HostView::from_config(&missing).is_err());
}
