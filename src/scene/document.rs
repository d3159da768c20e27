//! JSON scene documents: a tree of groups and SVG paths with inherited paint and transforms.
//!
//! ```json
//! {
//!   "width": 64,
//!   "height": 64,
//!   "root": {
//!     "transform": [2, 0, 0, 2, 0, 0],
//!     "fill": "#ff0000",
//!     "kind": { "group": { "children": [
//!       { "stroke": "#000", "stroke_width": 0.5,
//!         "kind": { "path": { "d": "M2,2 L30,2 L30,30 Z" } } }
//!     ] } }
//!   }
//! }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::foundation::core::{Affine, BezPath, Rgba};
use crate::foundation::error::{CurvecastError, CurvecastResult};
use crate::scene::buffer::{SceneBuffer, SceneBuilder, ShapeStyle};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SceneDocument {
    pub width: u32,
    pub height: u32,
    pub root: Node,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Node {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<Paint>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke: Option<Paint>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke_width: Option<f64>,
    /// SVG matrix `[a, b, c, d, e, f]`, applied after the parent's transform.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transform: Option<[f64; 6]>,
    pub kind: NodeKind,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    Group { children: Vec<Node> },
    Path { d: String },
}

/// A color as written in documents: `"none"`, `#rgb`, `#rrggbb`, `#rrggbbaa`, `[r, g, b]`,
/// `[r, g, b, a]` or `{ "r": .., "g": .., "b": .., "a": .. }` with channels in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Paint(pub Rgba);

impl<'de> Deserialize<'de> for Paint {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Str(String),
            RgbaObj {
                r: f32,
                g: f32,
                b: f32,
                #[serde(default = "one")]
                a: f32,
            },
            Arr(Vec<f32>),
        }

        fn one() -> f32 {
            1.0
        }

        match Repr::deserialize(deserializer)? {
            Repr::Str(s) => parse_color(&s).map(Paint).map_err(serde::de::Error::custom),
            Repr::RgbaObj { r, g, b, a } => Ok(Paint(Rgba::new(r, g, b, a))),
            Repr::Arr(v) => match v[..] {
                [r, g, b] => Ok(Paint(Rgba::new(r, g, b, 1.0))),
                [r, g, b, a] => Ok(Paint(Rgba::new(r, g, b, a))),
                _ => Err(serde::de::Error::custom(
                    "rgba array must have len 3 ([r,g,b]) or 4 ([r,g,b,a])",
                )),
            },
        }
    }
}

/// Parse `"none"` or a `#rgb` / `#rrggbb` / `#rrggbbaa` hex color.
pub fn parse_color(s: &str) -> Result<Rgba, String> {
    let s = s.trim();
    if s.eq_ignore_ascii_case("none") {
        return Ok(Rgba::TRANSPARENT);
    }
    let hex = s.strip_prefix('#').unwrap_or(s);

    fn digits(hex: &str, width: usize) -> Result<Vec<f32>, String> {
        let max = if width == 1 { 15.0 } else { 255.0 };
        (0..hex.len() / width)
            .map(|i| {
                let part = hex
                    .get(i * width..(i + 1) * width)
                    .ok_or_else(|| format!("invalid hex color \"{hex}\""))?;
                u8::from_str_radix(part, 16)
                    .map(|v| f32::from(v) / max)
                    .map_err(|_| format!("invalid hex digits \"{part}\""))
            })
            .collect()
    }

    let ch = match hex.len() {
        3 => digits(hex, 1)?,
        6 | 8 => digits(hex, 2)?,
        _ => {
            return Err(
                "color must be \"none\", #rgb, #rrggbb or #rrggbbaa (case-insensitive)".to_owned(),
            );
        }
    };
    Ok(Rgba::new(ch[0], ch[1], ch[2], ch.get(3).copied().unwrap_or(1.0)))
}

impl SceneDocument {
    pub fn from_json_str(s: &str) -> CurvecastResult<Self> {
        let doc: Self = serde_json::from_str(s)
            .map_err(|e| CurvecastError::serde(format!("invalid scene document: {e}")))?;
        doc.validate()?;
        Ok(doc)
    }

    pub fn from_path(path: impl AsRef<Path>) -> CurvecastResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| CurvecastError::io(format!("read '{}': {e}", path.display())))?;
        Self::from_json_str(&text)
    }

    pub fn validate(&self) -> CurvecastResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(CurvecastError::validation("scene width/height must be > 0"));
        }
        validate_node(&self.root, "root")
    }

    /// Encode the tree into a scene buffer, shapes in document order.
    #[tracing::instrument(skip(self), fields(width = self.width, height = self.height))]
    pub fn encode(&self) -> CurvecastResult<SceneBuffer> {
        let mut builder = SceneBuilder::new();
        let inherited = Inherited {
            style: ShapeStyle::default(),
            transform: Affine::IDENTITY,
        };
        encode_node(&self.root, inherited, &mut builder)?;
        tracing::debug!(shapes = builder.shape_count(), "encoded scene document");
        Ok(builder.finish())
    }
}

#[derive(Clone, Copy)]
struct Inherited {
    style: ShapeStyle,
    transform: Affine,
}

impl Inherited {
    fn apply(self, node: &Node) -> Self {
        let mut out = self;
        if let Some(fill) = node.fill {
            out.style.fill = fill.0;
        }
        if let Some(stroke) = node.stroke {
            out.style.stroke = stroke.0;
        }
        if let Some(w) = node.stroke_width {
            out.style.stroke_width = w;
        }
        if let Some(m) = node.transform {
            out.transform = self.transform * Affine::new(m);
        }
        out
    }
}

fn encode_node(node: &Node, parent: Inherited, builder: &mut SceneBuilder) -> CurvecastResult<()> {
    let ctx = parent.apply(node);
    match &node.kind {
        NodeKind::Group { children } => {
            for child in children {
                encode_node(child, ctx, builder)?;
            }
        }
        NodeKind::Path { d } => {
            let id = node.id.as_deref().unwrap_or("path");
            let path = parse_path(d, id)?;
            let _span = tracing::debug_span!("path", id).entered();
            builder.push_path(&ctx.style, &path, ctx.transform)?;
        }
    }
    Ok(())
}

fn validate_node(node: &Node, at: &str) -> CurvecastResult<()> {
    let at = node.id.as_deref().unwrap_or(at);
    if let Some(w) = node.stroke_width
        && (!w.is_finite() || w < 0.0)
    {
        return Err(CurvecastError::validation(format!(
            "node '{at}' has invalid stroke_width {w}"
        )));
    }
    if let Some(m) = node.transform
        && m.iter().any(|v| !v.is_finite())
    {
        return Err(CurvecastError::validation(format!(
            "node '{at}' has a non-finite transform"
        )));
    }
    match &node.kind {
        NodeKind::Group { children } => {
            for (i, child) in children.iter().enumerate() {
                validate_node(child, &format!("{at}/{i}"))?;
            }
        }
        NodeKind::Path { d } => {
            parse_path(d, at)?;
        }
    }
    Ok(())
}

fn parse_path(d: &str, at: &str) -> CurvecastResult<BezPath> {
    let d = d.trim();
    if d.is_empty() {
        return Err(CurvecastError::validation(format!(
            "path node '{at}' has empty path data"
        )));
    }
    BezPath::from_svg(d).map_err(|e| {
        CurvecastError::validation(format!("path node '{at}': invalid path data: {e}"))
    })
}

#[cfg(test)]
#[path = "../../tests/unit/scene/document.rs"]
mod tests;
