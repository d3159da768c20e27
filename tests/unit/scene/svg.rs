use super::*;
use crate::raster::compositor::evaluate_pixel;

const EMBLEM: &str = include_str!("../../data/emblem.svg");

fn emblem() -> SvgDocument {
    SvgDocument::from_data(EMBLEM.as_bytes()).unwrap()
}

fn rgba8(scene: &SceneBuffer, col: u32, row: u32) -> [u8; 4] {
    evaluate_pixel(f64::from(col) + 0.5, f64::from(row) + 0.5, scene).to_rgba8()
}

#[test]
fn canvas_size_comes_from_width_and_height() {
    let doc = emblem();
    assert_eq!((doc.width(), doc.height()), (32, 32));
}

#[test]
fn paths_are_encoded_in_document_order() {
    let scene = emblem().encode().unwrap();
    assert_eq!(scene.shape_count(), 4);

    let shapes: Vec<_> = scene.shapes().collect();
    let rgb = |r: f32, g: f32, b: f32| Rgba::new(r / 255.0, g / 255.0, b / 255.0, 1.0);
    assert_eq!(shapes[0].style().fill, rgb(29.0, 34.0, 48.0));
    // Inherited from the group.
    assert_eq!(shapes[1].style().fill, rgb(232.0, 65.0, 60.0));
    assert_eq!(shapes[2].style().stroke, Rgba::new(1.0, 1.0, 1.0, 1.0));
    // Group opacity multiplies into the fill alpha.
    assert_eq!(shapes[3].style().fill, Rgba::new(1.0, 1.0, 1.0, 0.5));
}

#[test]
fn stroke_width_follows_the_view_box_scale() {
    let scene = emblem().encode().unwrap();
    let dot = scene.shapes().nth(2).unwrap();
    assert!((dot.style().stroke_width - 1.0).abs() < 1e-6);
}

#[test]
fn rendered_pixels_match_the_drawing() {
    let scene = emblem().encode().unwrap();
    assert_eq!(rgba8(&scene, 1, 1), [29, 34, 48, 255]);
    // Square spans canvas x, y in [4, 16].
    assert_eq!(rgba8(&scene, 8, 8), [232, 65, 60, 255]);
    // Disc of radius 6 around (22, 22).
    assert_eq!(rgba8(&scene, 22, 22), [60, 140, 232, 255]);
    // Half-transparent white veil over the background.
    let veil = rgba8(&scene, 24, 8);
    for (got, want) in veil.iter().zip([142u8, 144, 151, 255]) {
        assert!(got.abs_diff(want) <= 1, "{veil:?}");
    }
}

#[test]
fn missing_fill_defaults_to_black() {
    let svg = r#"<svg xmlns="http://www.w3.org/2000/svg" width="4" height="4">
        <path d="M0,0 L4,0 L4,4 Z"/>
    </svg>"#;
    let scene = SvgDocument::from_data(svg.as_bytes()).unwrap().encode().unwrap();
    let shape = scene.shapes().next().unwrap();
    assert_eq!(shape.style().fill, Rgba::new(0.0, 0.0, 0.0, 1.0));
    assert_eq!(shape.style().stroke, Rgba::TRANSPARENT);
}

#[test]
fn gradient_paint_is_transparent() {
    let svg = r##"<svg xmlns="http://www.w3.org/2000/svg" width="4" height="4">
        <linearGradient id="g"><stop offset="0" stop-color="red"/><stop offset="1" stop-color="blue"/></linearGradient>
        <rect width="4" height="4" fill="url(#g)"/>
    </svg>"##;
    let scene = SvgDocument::from_data(svg.as_bytes()).unwrap().encode().unwrap();
    let shape = scene.shapes().next().unwrap();
    assert_eq!(shape.style().fill, Rgba::TRANSPARENT);
}

#[test]
fn malformed_svg_is_rejected() {
    let err = SvgDocument::from_data(b"<svg").unwrap_err();
    assert!(matches!(err, CurvecastError::Serde(_)), "{err:?}");
}

#[test]
fn missing_svg_file_is_an_io_error() {
    let err = SvgDocument::from_path("target/does/not/exist.svg").unwrap_err();
    assert!(matches!(err, CurvecastError::Io(_)));
}
