//! Polynomials over `f64`, coefficients stored highest degree first.

use smallvec::SmallVec;

/// Inline capacity for coefficients. Sextics (squared distance to a cubic) are the largest
/// polynomials the rasterizer builds, so nothing up to degree 6 touches the heap.
pub(crate) const INLINE_COEFFS: usize = 7;

/// Coefficient storage for [`Poly`].
pub type Coeffs = SmallVec<[f64; INLINE_COEFFS]>;

/// Polynomial with coefficients highest degree first; degree is `len - 1`.
#[derive(Clone, Debug, PartialEq)]
pub struct Poly(Coeffs);

impl Poly {
    pub fn new(coeffs: &[f64]) -> Self {
        Self(SmallVec::from_slice(coeffs))
    }

    pub fn coeffs(&self) -> &[f64] {
        &self.0
    }

    /// Implicit degree (`len - 1`). The empty polynomial reports degree 0.
    pub fn degree(&self) -> usize {
        self.0.len().saturating_sub(1)
    }

    pub fn eval(&self, t: f64) -> f64 {
        horner(&self.0, t)
    }

    /// `d/dt`, one degree lower. The derivative of a constant is the empty polynomial.
    pub fn derivative(&self) -> Self {
        let n = self.0.len();
        Self(
            self.0
                .iter()
                .take(n.saturating_sub(1))
                .enumerate()
                .map(|(i, c)| c * (n - 1 - i) as f64)
                .collect(),
        )
    }
}

impl<const N: usize> From<[f64; N]> for Poly {
    fn from(coeffs: [f64; N]) -> Self {
        Self::new(&coeffs)
    }
}

/// Horner evaluation `((c0 * t + c1) * t + c2) ...` over a coefficient slice.
pub fn horner(coeffs: &[f64], t: f64) -> f64 {
    let Some((&first, rest)) = coeffs.split_first() else {
        return 0.0;
    };
    rest.iter().fold(first, |acc, &c| acc * t + c)
}

/// Fixed-arity Horner evaluation; `N = 3` is a quadratic, `N = 7` a sextic.
///
/// Monomorphized per arity so the loop is fully unrolled in the solver's inner iteration.
#[inline]
pub fn eval<const N: usize>(coeffs: &[f64; N], t: f64) -> f64 {
    horner(coeffs, t)
}

#[cfg(test)]
#[path = "../../tests/unit/math/poly.rs"]
mod tests;
