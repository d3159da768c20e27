//! SVG input: paths of a `usvg` tree encoded in document order.
//!
//! `usvg` resolves CSS, `use` references and style inheritance, so every path arrives with its
//! final fill, stroke and absolute transform. Only solid paints are supported; gradients and
//! patterns fall back to transparent. Images and text are skipped.

use std::path::Path;

use usvg::tiny_skia_path::{self, PathSegment};

use crate::foundation::core::{Affine, BezPath, Point, Rgba};
use crate::foundation::error::{CurvecastError, CurvecastResult};
use crate::scene::buffer::{SceneBuffer, SceneBuilder, ShapeStyle};

/// A parsed SVG document.
pub struct SvgDocument {
    tree: usvg::Tree,
}

impl std::fmt::Debug for SvgDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SvgDocument")
            .field("width", &self.width())
            .field("height", &self.height())
            .finish_non_exhaustive()
    }
}

impl SvgDocument {
    pub fn from_data(bytes: &[u8]) -> CurvecastResult<Self> {
        let opts = usvg::Options::default();
        let tree = usvg::Tree::from_data(bytes, &opts)
            .map_err(|e| CurvecastError::serde(format!("parse svg tree: {e}")))?;
        let doc = Self { tree };
        if doc.width() == 0 || doc.height() == 0 {
            return Err(CurvecastError::validation("svg width/height must be > 0"));
        }
        Ok(doc)
    }

    pub fn from_path(path: impl AsRef<Path>) -> CurvecastResult<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)
            .map_err(|e| CurvecastError::io(format!("read '{}': {e}", path.display())))?;
        Self::from_data(&bytes)
    }

    /// Canvas width in pixels, rounded up.
    pub fn width(&self) -> u32 {
        self.tree.size().width().ceil() as u32
    }

    /// Canvas height in pixels, rounded up.
    pub fn height(&self) -> u32 {
        self.tree.size().height().ceil() as u32
    }

    pub fn tree(&self) -> &usvg::Tree {
        &self.tree
    }

    /// Encode every visible path into a scene buffer, shapes in document order.
    #[tracing::instrument(skip(self), fields(width = self.width(), height = self.height()))]
    pub fn encode(&self) -> CurvecastResult<SceneBuffer> {
        let mut builder = SceneBuilder::new();
        encode_group(self.tree.root(), 1.0, &mut builder)?;
        tracing::debug!(shapes = builder.shape_count(), "encoded svg document");
        Ok(builder.finish())
    }
}

/// `opacity` is the product of the ancestor group opacities.
fn encode_group(
    group: &usvg::Group,
    opacity: f32,
    builder: &mut SceneBuilder,
) -> CurvecastResult<()> {
    let opacity = opacity * group.opacity().get();
    for node in group.children() {
        match node {
            usvg::Node::Group(g) => encode_group(g, opacity, builder)?,
            usvg::Node::Path(p) => {
                if !p.is_visible() {
                    continue;
                }
                let _span = tracing::debug_span!("path", id = p.id()).entered();
                let transform = affine(p.abs_transform());
                builder.push_path(
                    &path_style(p, opacity, transform),
                    &bez_path(p.data()),
                    transform,
                )?;
            }
            _ => tracing::debug!("skipping non-path svg node"),
        }
    }
    Ok(())
}

fn path_style(p: &usvg::Path, opacity: f32, transform: Affine) -> ShapeStyle {
    let mut style = ShapeStyle::default();
    if let Some(fill) = p.fill() {
        if fill.rule() == usvg::FillRule::NonZero {
            tracing::debug!("nonzero fill rule rendered as even-odd");
        }
        style.fill = solid(fill.paint(), fill.opacity().get() * opacity);
    }
    if let Some(stroke) = p.stroke() {
        style.stroke = solid(stroke.paint(), stroke.opacity().get() * opacity);
        // Outlines are transformed before encoding, so the width has to follow the scale.
        style.stroke_width = f64::from(stroke.width().get()) * transform.determinant().abs().sqrt();
    }
    style
}

fn solid(paint: &usvg::Paint, alpha: f32) -> Rgba {
    match paint {
        usvg::Paint::Color(c) => Rgba::new(
            f32::from(c.red) / 255.0,
            f32::from(c.green) / 255.0,
            f32::from(c.blue) / 255.0,
            alpha,
        ),
        _ => {
            tracing::debug!("non-solid svg paint rendered transparent");
            Rgba::TRANSPARENT
        }
    }
}

fn affine(t: usvg::Transform) -> Affine {
    // tiny-skia stores (sx, ky, kx, sy) column-major, the same order as kurbo.
    Affine::new([t.sx, t.ky, t.kx, t.sy, t.tx, t.ty].map(f64::from))
}

fn bez_path(data: &tiny_skia_path::Path) -> BezPath {
    let pt = |p: tiny_skia_path::Point| Point::new(f64::from(p.x), f64::from(p.y));
    let mut out = BezPath::new();
    for seg in data.segments() {
        match seg {
            PathSegment::MoveTo(p) => out.move_to(pt(p)),
            PathSegment::LineTo(p) => out.line_to(pt(p)),
            PathSegment::QuadTo(c, p) => out.quad_to(pt(c), pt(p)),
            PathSegment::CubicTo(c1, c2, p) => out.curve_to(pt(c1), pt(c2), pt(p)),
            PathSegment::Close => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/scene/svg.rs"]
mod tests;
