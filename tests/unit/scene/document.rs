use super::*;
use crate::foundation::core::Point;
use crate::raster::compositor::evaluate_pixel;

fn doc(json: &str) -> SceneDocument {
    SceneDocument::from_json_str(json).unwrap()
}

#[test]
fn parses_colors_in_every_notation() {
    assert_eq!(parse_color("none").unwrap(), Rgba::TRANSPARENT);
    assert_eq!(parse_color("#f00").unwrap(), Rgba::new(1.0, 0.0, 0.0, 1.0));
    assert_eq!(parse_color("#00FF00").unwrap(), Rgba::new(0.0, 1.0, 0.0, 1.0));
    let c = parse_color("#0000ff80").unwrap();
    assert_eq!((c.r, c.g, c.b), (0.0, 0.0, 1.0));
    assert!((c.a - 128.0 / 255.0).abs() < 1e-6);

    assert!(parse_color("#12345").is_err());
    assert!(parse_color("#gg0000").is_err());

    let p: Paint = serde_json::from_str("[0.5, 0.25, 1.0]").unwrap();
    assert_eq!(p.0, Rgba::new(0.5, 0.25, 1.0, 1.0));
    let p: Paint = serde_json::from_str(r#"{"r":1,"g":1,"b":1,"a":0.5}"#).unwrap();
    assert_eq!(p.0, Rgba::new(1.0, 1.0, 1.0, 0.5));
    assert!(serde_json::from_str::<Paint>("[1, 2]").is_err());
}

#[test]
fn styles_and_transforms_are_inherited() {
    let d = doc(
        r##"{
          "width": 8, "height": 8,
          "root": {
            "fill": "#ff0000",
            "stroke_width": 3,
            "transform": [2, 0, 0, 2, 0, 0],
            "kind": { "group": { "children": [
              { "id": "square", "kind": { "path": { "d": "M0,0 L2,0 L2,2 L0,2 Z" } } },
              { "fill": "#0000ff", "transform": [1, 0, 0, 1, 2, 0],
                "kind": { "path": { "d": "M0,0 L1,0 L1,1 L0,1 Z" } } }
            ] } }
          }
        }"##,
    );
    let scene = d.encode().unwrap();
    assert_eq!(scene.shape_count(), 2);

    let shapes: Vec<_> = scene.shapes().collect();
    assert_eq!(shapes[0].style().fill, Rgba::new(1.0, 0.0, 0.0, 1.0));
    assert_eq!(shapes[0].style().stroke, Rgba::TRANSPARENT);
    assert_eq!(shapes[0].style().stroke_width, 3.0);
    assert_eq!(shapes[1].style().fill, Rgba::new(0.0, 0.0, 1.0, 1.0));

    // Child translate (2, 0) composes inside the parent scale: the blue square spans x in [4, 6].
    let first = shapes[1].segments().next().unwrap();
    assert_eq!(first.point_at(0.0), Point::new(4.0, 0.0));

    let c = evaluate_pixel(2.0, 2.0, &scene);
    assert_eq!(c, Rgba::new(1.0, 0.0, 0.0, 1.0));
    let c = evaluate_pixel(5.0, 1.0, &scene);
    assert_eq!(c, Rgba::new(0.0, 0.0, 1.0, 1.0));
}

#[test]
fn defaults_are_transparent_with_unit_stroke() {
    let d = doc(
        r#"{"width": 2, "height": 2, "root": {"kind": {"path": {"d": "M0,0 L1,0 L1,1 Z"}}}}"#,
    );
    let scene = d.encode().unwrap();
    let shape = scene.shapes().next().unwrap();
    assert_eq!(*shape.style(), ShapeStyle::default());
}

#[test]
fn rejects_invalid_documents() {
    let zero = SceneDocument::from_json_str(
        r#"{"width": 0, "height": 2, "root": {"kind": {"group": {"children": []}}}}"#,
    );
    assert!(matches!(zero, Err(CurvecastError::Validation(_))));

    let empty_path = SceneDocument::from_json_str(
        r#"{"width": 2, "height": 2, "root": {"kind": {"path": {"d": "  "}}}}"#,
    );
    assert!(matches!(empty_path, Err(CurvecastError::Validation(_))));

    let bad_path = SceneDocument::from_json_str(
        r#"{"width": 2, "height": 2, "root": {"id": "bad", "kind": {"path": {"d": "M0,0 X"}}}}"#,
    );
    match bad_path {
        Err(CurvecastError::Validation(msg)) => assert!(msg.contains("bad"), "{msg}"),
        other => panic!("expected validation error, got {other:?}"),
    }

    let negative = SceneDocument::from_json_str(
        r#"{"width": 2, "height": 2,
            "root": {"stroke_width": -1, "kind": {"path": {"d": "M0,0 L1,1 Z"}}}}"#,
    );
    assert!(matches!(negative, Err(CurvecastError::Validation(_))));

    let malformed = SceneDocument::from_json_str("{ not json");
    assert!(matches!(malformed, Err(CurvecastError::Serde(_))));
}

#[test]
fn missing_file_is_an_io_error() {
    let err = SceneDocument::from_path("target/does/not/exist.json").unwrap_err();
    assert!(matches!(err, CurvecastError::Io(_)));
}

#[test]
fn serialized_document_parses_back() {
    let d = doc(
        r##"{"width": 4, "height": 3, "root": {"fill": "#ff000080",
            "kind": {"path": {"d": "M0,0 L1,0 L1,1 Z"}}}}"##,
    );
    let json = serde_json::to_string(&d).unwrap();
    let back = SceneDocument::from_json_str(&json).unwrap();
    assert_eq!(
        back.encode().unwrap().as_floats(),
        d.encode().unwrap().as_floats()
    );
}
