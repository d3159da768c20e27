use crate::foundation::core::Point;
use crate::math::poly::eval;

/// One cubic arc in power basis, per coordinate: `x(t) = ((x0*t + x1)*t + x2)*t + x3`.
///
/// Scene buffers store curve-only coefficients; [`Segment::relative_to`] moves the origin to a
/// query pixel before crossing counting and distance minimization. The parameter domain is
/// always `t` in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub x: [f64; 4],
    pub y: [f64; 4],
}

impl Segment {
    /// Floats per segment in the scene wire layout.
    pub const WIRE_LEN: usize = 8;

    pub const fn new(x: [f64; 4], y: [f64; 4]) -> Self {
        Self { x, y }
    }

    /// Straight line from `p0` to `p1` as a degenerate cubic with constant derivative.
    pub fn line(p0: Point, p1: Point) -> Self {
        Self {
            x: [0.0, 0.0, p1.x - p0.x, p0.x],
            y: [0.0, 0.0, p1.y - p0.y, p0.y],
        }
    }

    /// Cubic Bezier with control points `p0..p3`.
    pub fn cubic(p0: Point, p1: Point, p2: Point, p3: Point) -> Self {
        fn basis(q0: f64, q1: f64, q2: f64, q3: f64) -> [f64; 4] {
            [
                -q0 + 3.0 * q1 - 3.0 * q2 + q3,
                3.0 * q0 - 6.0 * q1 + 3.0 * q2,
                -3.0 * q0 + 3.0 * q1,
                q0,
            ]
        }

        Self {
            x: basis(p0.x, p1.x, p2.x, p3.x),
            y: basis(p0.y, p1.y, p2.y, p3.y),
        }
    }

    /// Quadratic Bezier, degree-elevated to a cubic.
    pub fn quadratic(p0: Point, p1: Point, p2: Point) -> Self {
        let c1 = p0 + (p1 - p0) * (2.0 / 3.0);
        let c2 = p2 + (p1 - p2) * (2.0 / 3.0);
        Self::cubic(p0, c1, c2, p2)
    }

    /// Decode eight wire floats `ax bx cx dx ay by cy dy`.
    pub fn from_wire(v: &[f32]) -> Option<Self> {
        let v: [f32; Self::WIRE_LEN] = v.get(..Self::WIRE_LEN)?.try_into().ok()?;
        let w = v.map(f64::from);
        Some(Self {
            x: [w[0], w[1], w[2], w[3]],
            y: [w[4], w[5], w[6], w[7]],
        })
    }

    pub fn to_wire(&self) -> [f32; Self::WIRE_LEN] {
        let [ax, bx, cx, dx] = self.x;
        let [ay, by, cy, dy] = self.y;
        [ax, bx, cx, dx, ay, by, cy, dy].map(|v| v as f32)
    }

    pub fn point_at(&self, t: f64) -> Point {
        Point::new(eval(&self.x, t), eval(&self.y, t))
    }

    /// Same curve with `origin` moved to `(0, 0)`.
    pub fn relative_to(&self, origin: Point) -> Self {
        let mut out = *self;
        out.x[3] -= origin.x;
        out.y[3] -= origin.y;
        out
    }
}

#[cfg(test)]
#[path = "../../tests/unit/raster/segment.rs"]
mod tests;
