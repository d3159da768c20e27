use super::*;

#[test]
fn line_interpolates_endpoints() {
    let s = Segment::line(Point::new(1.0, 2.0), Point::new(5.0, -2.0));
    assert_eq!(s.point_at(0.0), Point::new(1.0, 2.0));
    assert_eq!(s.point_at(1.0), Point::new(5.0, -2.0));
    assert_eq!(s.point_at(0.5), Point::new(3.0, 0.0));
}

#[test]
fn cubic_hits_endpoints_and_matches_bernstein_form() {
    let (p0, p1, p2, p3) = (
        Point::new(0.0, 0.0),
        Point::new(1.0, 2.0),
        Point::new(3.0, 2.0),
        Point::new(4.0, 0.0),
    );
    let s = Segment::cubic(p0, p1, p2, p3);
    assert_eq!(s.point_at(0.0), p0);
    assert_eq!(s.point_at(1.0), p3);

    let t: f64 = 0.3;
    let mt = 1.0 - t;
    let w = [mt.powi(3), 3.0 * mt * mt * t, 3.0 * mt * t * t, t.powi(3)];
    let bx = w[0] * p0.x + w[1] * p1.x + w[2] * p2.x + w[3] * p3.x;
    let by = w[0] * p0.y + w[1] * p1.y + w[2] * p2.y + w[3] * p3.y;
    let p = s.point_at(t);
    assert!((p.x - bx).abs() < 1e-12 && (p.y - by).abs() < 1e-12);
}

#[test]
fn quadratic_elevation_preserves_midpoint() {
    let s = Segment::quadratic(
        Point::new(0.0, 0.0),
        Point::new(1.0, 2.0),
        Point::new(2.0, 0.0),
    );
    let mid = s.point_at(0.5);
    assert!((mid.x - 1.0).abs() < 1e-12);
    assert!((mid.y - 1.0).abs() < 1e-12);
}

#[test]
fn relative_to_shifts_constant_terms_only() {
    let s = Segment::cubic(
        Point::new(0.0, 0.0),
        Point::new(1.0, 2.0),
        Point::new(3.0, 2.0),
        Point::new(4.0, 0.0),
    );
    let r = s.relative_to(Point::new(1.5, -0.5));
    assert_eq!(r.x[..3], s.x[..3]);
    assert_eq!(r.y[..3], s.y[..3]);
    let (a, b) = (s.point_at(0.7), r.point_at(0.7));
    assert!((a.x - 1.5 - b.x).abs() < 1e-12);
    assert!((a.y + 0.5 - b.y).abs() < 1e-12);
}

#[test]
fn wire_layout_is_x_coefficients_then_y() {
    let s = Segment::new([1.0, 2.0, 3.0, 4.0], [5.0, 6.0, 7.0, 8.0]);
    let wire = s.to_wire();
    assert_eq!(wire, [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]);
    assert_eq!(Segment::from_wire(&wire), Some(s));
    assert_eq!(Segment::from_wire(&wire[..7]), None);
}
