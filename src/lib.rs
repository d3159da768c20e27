//! Curvecast is an analytic rasterizer for filled and stroked cubic Bézier outlines.
//!
//! Every pixel is evaluated independently against the whole scene:
//!
//! - Even-odd inside/outside from counting curve crossings of a ray (roots of a cubic)
//! - Distance to each outline from minimizing a degree-6 polynomial (roots of its quintic
//!   derivative)
//! - Fill and stroke coverage from those two quantities, composited shape by shape with "over"
//!
//! Roots come from a cascade solver: the critical points of a polynomial split `[0, 1]` into
//! monotonic intervals, each solved by safeguarded Newton iteration.
//!
//! Scenes are flat [`SceneBuffer`]s, built directly with a [`SceneBuilder`], from `kurbo` paths,
//! from a JSON [`SceneDocument`] or from an SVG file ([`SvgDocument`]). [`render_frame`]
//! rasterizes a whole frame, optionally on a rayon thread pool.
#![forbid(unsafe_code)]

mod foundation;

pub mod math;
pub mod raster;
pub mod render;
pub mod scene;

pub use crate::foundation::core::{Affine, BezPath, Point, Rgba};
pub use crate::foundation::error::{CurvecastError, CurvecastResult};

pub use crate::math::poly::Poly;
pub use crate::math::roots::{
    Root, SolverConfig, critical_points, monotonize, solve, solve_cubic, solve_linear,
    solve_monotonic, solve_quadratic, solve_quartic, solve_quintic,
};
pub use crate::raster::compositor::{ShapeProbe, evaluate_pixel, evaluate_pixel_with, over};
pub use crate::raster::crossing::count_crossings;
pub use crate::raster::distance::min_distance_squared;
pub use crate::raster::segment::Segment;
pub use crate::render::frame::Frame;
pub use crate::render::pipeline::{RenderOpts, render_frame, render_to_sink};
pub use crate::render::sink::{Band, BandConfig, BandSink, FrameSink};
pub use crate::scene::buffer::{SceneBuffer, SceneBuilder, ShapeStyle, ShapeView};
pub use crate::scene::document::{Node, NodeKind, Paint, SceneDocument};
pub use crate::scene::encode::{EncodedPath, encode_path};
pub use crate::scene::svg::SvgDocument;
