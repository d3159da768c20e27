use kurbo::PathEl;

use crate::foundation::core::{Affine, BezPath, Point};
use crate::foundation::error::CurvecastResult;
use crate::raster::segment::Segment;
use crate::scene::buffer::{SceneBuilder, ShapeStyle};

/// Segments of one path plus bookkeeping the caller may want to report.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EncodedPath {
    pub segments: Vec<Segment>,
    /// Subpaths that end away from their start without a close command. These break the
    /// even-odd test and are left for the caller to fix or report.
    pub open_subpaths: usize,
}

/// Convert `path` into power-basis cubic segments after applying `transform`.
///
/// Lines become degenerate cubics, quadratics are degree-elevated, and a close command emits the
/// closing edge back to the subpath start (even when that edge has zero length).
pub fn encode_path(path: &BezPath, transform: Affine) -> EncodedPath {
    let mut out = EncodedPath::default();
    let mut sub = Subpath::default();

    for el in path.elements() {
        match *el {
            PathEl::MoveTo(p) => {
                out.open_subpaths += sub.finish();
                let p = transform * p;
                sub = Subpath::starting_at(p);
            }
            PathEl::LineTo(p) => {
                let p = transform * p;
                out.segments.push(Segment::line(sub.current, p));
                sub.advance(p);
            }
            PathEl::QuadTo(p1, p2) => {
                let (p1, p2) = (transform * p1, transform * p2);
                out.segments.push(Segment::quadratic(sub.current, p1, p2));
                sub.advance(p2);
            }
            PathEl::CurveTo(p1, p2, p3) => {
                let (p1, p2, p3) = (transform * p1, transform * p2, transform * p3);
                out.segments.push(Segment::cubic(sub.current, p1, p2, p3));
                sub.advance(p3);
            }
            PathEl::ClosePath => {
                out.segments.push(Segment::line(sub.current, sub.start));
                sub.close();
            }
        }
    }
    out.open_subpaths += sub.finish();
    out
}

#[derive(Clone, Copy, Debug, Default)]
struct Subpath {
    start: Point,
    current: Point,
    drawn: bool,
    closed: bool,
}

impl Subpath {
    fn starting_at(p: Point) -> Self {
        Self {
            start: p,
            current: p,
            drawn: false,
            closed: false,
        }
    }

    fn advance(&mut self, p: Point) {
        self.current = p;
        self.drawn = true;
        self.closed = false;
    }

    fn close(&mut self) {
        self.current = self.start;
        self.drawn = true;
        self.closed = true;
    }

    /// 1 if this subpath was left open.
    fn finish(&self) -> usize {
        usize::from(self.drawn && !self.closed && self.current != self.start)
    }
}

impl SceneBuilder {
    /// Encode `path` under `transform` and append it as one shape.
    ///
    /// Returns the number of open subpaths found, which are encoded unchanged.
    pub fn push_path(
        &mut self,
        style: &ShapeStyle,
        path: &BezPath,
        transform: Affine,
    ) -> CurvecastResult<usize> {
        let encoded = encode_path(path, transform);
        if encoded.open_subpaths > 0 {
            tracing::warn!(
                open_subpaths = encoded.open_subpaths,
                "path has open subpaths; fill parity will be wrong near them"
            );
        }
        self.push_shape(style, &encoded.segments)?;
        Ok(encoded.open_subpaths)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/encode.rs"]
mod tests;
