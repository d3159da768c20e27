use crate::math::{
    poly::eval,
    roots::{SolverConfig, solve},
};
use crate::raster::segment::Segment;

/// Crossings of a pixel-relative segment with the ray from the origin towards negative x.
///
/// Roots of `y(t) = 0` come from the cubic cascade (three monotone slots); each one whose curve
/// point lies left of the pixel counts once. Summed over a shape's segments, an odd total means
/// the pixel is inside (even-odd rule), whatever number of contours the shape packs.
pub fn count_crossings(seg: &Segment, cfg: &SolverConfig) -> u32 {
    solve(&seg.y, cfg)
        .into_iter()
        .flatten()
        .filter(|&t| eval(&seg.x, t) < 0.0)
        .count() as u32
}

#[cfg(test)]
#[path = "../../tests/unit/raster/crossing.rs"]
mod tests;
