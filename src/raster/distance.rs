use crate::math::{
    poly::{Poly, eval},
    roots::{SolverConfig, solve},
};
use crate::raster::segment::Segment;

/// `x(t)^2 + y(t)^2` for a pixel-relative segment, as a sextic (highest degree first).
pub fn distance_squared_poly(seg: &Segment) -> [f64; 7] {
    let (xx, yy) = (square(&seg.x), square(&seg.y));
    std::array::from_fn(|i| xx[i] + yy[i])
}

/// Minimum squared distance from the origin to a pixel-relative segment over `t` in `[0, 1]`.
///
/// Candidates are the quintic cascade's critical points of the squared distance plus `t = 1`.
/// `t = 0` is skipped: within a contour it is the previous segment's `t = 1`.
pub fn min_distance_squared(seg: &Segment, cfg: &SolverConfig) -> f64 {
    let sextic = distance_squared_poly(seg);
    let quintic = Poly::from(sextic).derivative();
    solve(quintic.coeffs(), cfg)
        .into_iter()
        .flatten()
        .fold(eval(&sextic, 1.0), |best, t| best.min(eval(&sextic, t)))
}

fn square(p: &[f64; 4]) -> [f64; 7] {
    let mut out = [0.0; 7];
    for (i, a) in p.iter().enumerate() {
        for (j, b) in p.iter().enumerate() {
            out[i + j] += a * b;
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/raster/distance.rs"]
mod tests;
