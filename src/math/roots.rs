//! Root finding on `[0, 1]` for polynomials of degree 2 and up.
//!
//! The cascade works bottom-up: the roots of `P'` are the critical points of `P`, so they split
//! `[0, 1]` into sub-intervals on which `P` is monotone and holds at most one root. Each of those
//! is found with a safeguarded Newton iteration. Quadratics are solved in closed form and seed the
//! whole chain (cubic <- quadratic, quartic <- cubic, quintic <- quartic, ...).
//!
//! Results carry one slot per monotone sub-interval. A slot is `None` when its interval has no
//! sign change, so callers never mistake "no root" for a root at `t = 0`.

use smallvec::SmallVec;

use crate::math::poly::{Poly, horner};

/// A root in `[0, 1]`, or `None` for a sub-interval without one.
pub type Root = Option<f64>;

/// One entry per monotone sub-interval.
pub type Roots = SmallVec<[Root; 6]>;

/// Non-decreasing interval boundaries in `[0, 1]`.
pub type Boundaries = SmallVec<[f64; 6]>;

/// Tolerances and iteration budget for the Newton stage.
///
/// The iteration cap bounds per-pixel latency. Five steps from a bracket midpoint is enough for
/// sub-pixel accuracy, which is all the rasterizer needs.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Absolute tolerance on `|f(t)|`.
    pub atol: f64,
    /// Tolerance relative to the target value.
    pub rtol: f64,
    /// Newton steps per monotone sub-interval.
    pub max_iter: u32,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            atol: 1e-9,
            rtol: 1e-5,
            max_iter: 5,
        }
    }
}

impl SolverConfig {
    pub fn is_close(&self, value: f64, target: f64) -> bool {
        (value - target).abs() <= self.atol + self.rtol * target.abs()
    }
}

/// Root of `a*t + b` when it exists and lies in `[0, 1]`.
pub fn solve_linear(a: f64, b: f64) -> Root {
    if a == 0.0 {
        return None;
    }
    let t = -b / a;
    (0.0..=1.0).contains(&t).then_some(t)
}

/// Closed-form roots of `a*t^2 + b*t + c`, clamped into `[0, 1]` and returned in non-decreasing
/// order.
///
/// This never reports "no root": a negative discriminant collapses to `[0, 0]`, which a caller
/// using the pair as interval boundaries sees as "no critical point". With `a == 0` the linear
/// root is paired with `1`; with `a == b == 0` there is nothing to split at and both entries are
/// `1`.
pub fn solve_quadratic(a: f64, b: f64, c: f64) -> [f64; 2] {
    if a == 0.0 {
        if b == 0.0 {
            return [1.0, 1.0];
        }
        return [clamp(-c / b, 0.0, 1.0), 1.0];
    }
    let d = b * b - 4.0 * a * c;
    if d < 0.0 {
        return [0.0, 0.0];
    }
    let sq = d.sqrt();
    let t1 = clamp((-b - sq) / (2.0 * a), 0.0, 1.0);
    let t2 = clamp((-b + sq) / (2.0 * a), 0.0, 1.0);
    if a < 0.0 { [t2, t1] } else { [t1, t2] }
}

/// Turn a root list into usable interval boundaries.
///
/// Each output is the running maximum (starting at 0) of the inputs seen so far; `None` slots take
/// the previous boundary, collapsing their interval to zero width.
pub fn monotonize(roots: &[Root]) -> Boundaries {
    let mut prev = 0.0;
    roots
        .iter()
        .map(|root| match *root {
            Some(t) if t > prev => {
                prev = t;
                t
            }
            _ => prev,
        })
        .collect()
}

/// Find the single root of `poly` in `[t1, t2]`, where `poly` is monotone.
///
/// Newton from the midpoint, falling back to one bisection step whenever an iterate leaves the
/// current bracket. The result is clamped into `[t1, t2]` whether or not the tolerance was met
/// within `cfg.max_iter` steps. A polynomial that vanishes at both ends of the bracket is
/// identically zero there and reports `None`.
pub fn solve_monotonic(
    poly: &[f64],
    derivative: &[f64],
    t1: f64,
    t2: f64,
    cfg: &SolverConfig,
) -> Root {
    if t1 == t2 {
        return None;
    }
    let f1 = horner(poly, t1);
    let f2 = horner(poly, t2);
    if sign(f1) * sign(f2) > 0 {
        return None;
    }
    // Monotone and zero at both ends: zero on the whole bracket, so no isolated root.
    if f1 == 0.0 && f2 == 0.0 {
        return None;
    }

    let (mut l, mut r) = (t1, t2);
    let mut t = 0.5 * (l + r);
    for _ in 0..cfg.max_iter {
        let ft = horner(poly, t);
        if cfg.is_close(ft, 0.0) {
            break;
        }
        t -= ft / horner(derivative, t);
        // Also catches NaN from a vanishing derivative.
        if !(l..=r).contains(&t) {
            t = 0.5 * (l + r);
            if sign(horner(poly, t)) == sign(f1) {
                l = t;
            } else {
                r = t;
            }
        }
    }
    Some(clamp(t, t1, t2))
}

/// Roots of `poly` (highest degree first) on `[0, 1]`.
///
/// - degree 1: the linear root, if any
/// - degree 2: the clamped quadratic pair, see [`solve_quadratic`]
/// - degree `d >= 3`: exactly `d` slots, one per monotone sub-interval bounded by the
///   monotonized roots of the derivative
pub fn solve(poly: &[f64], cfg: &SolverConfig) -> Roots {
    match *poly {
        [] | [_] => Roots::new(),
        [a, b] => smallvec::smallvec![solve_linear(a, b)],
        [a, b, c] => solve_quadratic(a, b, c).into_iter().map(Some).collect(),
        _ => {
            let derivative = Poly::new(poly).derivative();
            let bounds = critical_points(poly, cfg);
            solve_between(poly, derivative.coeffs(), &bounds, cfg)
        }
    }
}

/// Critical points of `poly`: the monotonized roots of its derivative.
pub fn critical_points(poly: &[f64], cfg: &SolverConfig) -> Boundaries {
    monotonize(&solve(Poly::new(poly).derivative().coeffs(), cfg))
}

/// Solve on `[0, b0], [b0, b1], ..., [bn, 1]`.
fn solve_between(poly: &[f64], derivative: &[f64], bounds: &[f64], cfg: &SolverConfig) -> Roots {
    let mut out = Roots::with_capacity(bounds.len() + 1);
    let mut lo = 0.0;
    for &hi in bounds.iter().chain(std::iter::once(&1.0)) {
        out.push(solve_monotonic(poly, derivative, lo, hi, cfg));
        lo = hi;
    }
    out
}

/// Roots of a cubic `[a, b, c, d]`: three slots split at the quadratic critical points.
pub fn solve_cubic(coeffs: &[f64; 4], cfg: &SolverConfig) -> [Root; 3] {
    to_slots(solve(coeffs, cfg))
}

/// Roots of a quartic: four slots split at the cubic critical points.
pub fn solve_quartic(coeffs: &[f64; 5], cfg: &SolverConfig) -> [Root; 4] {
    to_slots(solve(coeffs, cfg))
}

/// Roots of a quintic: five slots split at the quartic critical points.
pub fn solve_quintic(coeffs: &[f64; 6], cfg: &SolverConfig) -> [Root; 5] {
    to_slots(solve(coeffs, cfg))
}

fn to_slots<const K: usize>(roots: Roots) -> [Root; K] {
    let mut out = [None; K];
    for (slot, root) in out.iter_mut().zip(roots) {
        *slot = root;
    }
    out
}

fn sign(v: f64) -> i32 {
    if v > 0.0 {
        1
    } else if v < 0.0 {
        -1
    } else {
        0
    }
}

// `f64::clamp` panics on NaN bounds; bad coefficients must not take a render down.
fn clamp(t: f64, lo: f64, hi: f64) -> f64 {
    t.max(lo).min(hi)
}

#[cfg(test)]
#[path = "../../tests/unit/math/roots.rs"]
mod tests;
