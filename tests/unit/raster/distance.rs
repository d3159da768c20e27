use super::*;
use crate::foundation::core::Point;
use crate::math::poly::eval;

fn arch() -> Segment {
    Segment::cubic(
        Point::new(0.0, 0.0),
        Point::new(1.0, 2.0),
        Point::new(3.0, 2.0),
        Point::new(4.0, 0.0),
    )
}

#[test]
fn sextic_matches_sum_of_squares() {
    let s = arch().relative_to(Point::new(1.0, -0.5));
    let sextic = distance_squared_poly(&s);
    for t in [0.0, 0.2, 0.45, 0.9, 1.0] {
        let p = s.point_at(t);
        let want = p.x * p.x + p.y * p.y;
        assert!((eval(&sextic, t) - want).abs() < 1e-12);
    }
}

#[test]
fn distance_is_zero_on_the_curve() {
    let s = arch();
    let cfg = SolverConfig::default();
    for t0 in [0.1, 0.3, 0.5, 0.77, 1.0] {
        let on_curve = s.point_at(t0);
        let d = min_distance_squared(&s.relative_to(on_curve), &cfg).sqrt();
        assert!(d < 1e-3, "t0 = {t0}: distance {d}");
    }
}

#[test]
fn distance_is_non_negative() {
    let s = arch();
    let cfg = SolverConfig::default();
    for (x, y) in [(2.0, 0.0), (2.0, 3.0), (-1.0, 4.0), (7.0, -2.0)] {
        assert!(min_distance_squared(&s.relative_to(Point::new(x, y)), &cfg) >= 0.0);
    }
}

#[test]
fn distance_to_arch_peak() {
    // Peak of the arch is (2, 1.5).
    let cfg = SolverConfig::default();
    let below = min_distance_squared(&arch().relative_to(Point::new(2.0, 0.0)), &cfg);
    let above = min_distance_squared(&arch().relative_to(Point::new(2.0, 3.0)), &cfg);
    assert!((below - 2.25).abs() < 1e-6);
    assert!((above - 2.25).abs() < 1e-6);
}

#[test]
fn line_distance_uses_perpendicular_foot() {
    let line = Segment::line(Point::new(0.0, 0.0), Point::new(4.0, 0.0));
    let cfg = SolverConfig::default();
    let d = min_distance_squared(&line.relative_to(Point::new(2.0, 3.0)), &cfg);
    assert!((d - 9.0).abs() < 1e-9);
    let past_end = min_distance_squared(&line.relative_to(Point::new(6.0, 0.0)), &cfg);
    assert!((past_end - 4.0).abs() < 1e-9);
}

#[test]
fn segment_start_is_not_a_candidate() {
    // Nearest point is t = 0, which belongs to the previous segment of a contour.
    let line = Segment::line(Point::new(0.0, 0.0), Point::new(4.0, 0.0));
    let d = min_distance_squared(
        &line.relative_to(Point::new(-1.0, 0.0)),
        &SolverConfig::default(),
    );
    assert!((d - 25.0).abs() < 1e-9);
}
