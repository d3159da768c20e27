use crate::foundation::core::Rgba;
use crate::foundation::error::{CurvecastError, CurvecastResult};
use crate::raster::segment::Segment;

/// Floats before the first segment of a shape:
/// `fillR fillG fillB fillA strokeR strokeG strokeB strokeA strokeWidth segmentCount`.
pub const SHAPE_HEADER_LEN: usize = 10;

/// Largest segment count an `f32` represents exactly.
const MAX_SEGMENTS: usize = 1 << 24;

/// Paint parameters of one draw call.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ShapeStyle {
    pub fill: Rgba,
    pub stroke: Rgba,
    /// Full stroke width in pixels; the band extends half of it to each side of the outline.
    pub stroke_width: f64,
}

impl Default for ShapeStyle {
    fn default() -> Self {
        Self {
            fill: Rgba::TRANSPARENT,
            stroke: Rgba::TRANSPARENT,
            stroke_width: 1.0,
        }
    }
}

/// Flat, validated scene in the wire layout shared with GPU shaders:
///
/// ```text
/// Scene   := Shape*
/// Shape   := fillRGBA strokeRGBA strokeWidth segmentCount Segment*
/// Segment := ax bx cx dx ay by cy dy
/// ```
///
/// Segment coefficients are curve-only; the query pixel is subtracted at evaluation time. Shapes
/// are composited in buffer order, later shapes over earlier ones. A buffer is immutable once
/// built, so any number of threads may evaluate pixels against it at once.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SceneBuffer {
    data: Vec<f32>,
    shapes: usize,
}

impl SceneBuffer {
    /// Validate a float buffer produced by an external encoder.
    ///
    /// Fails on segment counts that are negative, fractional or non-finite, and on shapes whose
    /// declared segments run past the end of the buffer.
    pub fn from_floats(data: Vec<f32>) -> CurvecastResult<Self> {
        let mut offset = 0;
        let mut shapes = 0;
        while offset < data.len() {
            let (_, next) = read_shape(&data, offset)?;
            offset = next;
            shapes += 1;
        }
        Ok(Self { data, shapes })
    }

    pub fn builder() -> SceneBuilder {
        SceneBuilder::default()
    }

    pub fn as_floats(&self) -> &[f32] {
        &self.data
    }

    pub fn into_floats(self) -> Vec<f32> {
        self.data
    }

    pub fn shape_count(&self) -> usize {
        self.shapes
    }

    pub fn is_empty(&self) -> bool {
        self.shapes == 0
    }

    /// Shapes in z-order, bottom first.
    pub fn shapes(&self) -> Shapes<'_> {
        Shapes {
            data: &self.data,
            offset: 0,
        }
    }
}

/// Borrowed view of one shape inside a [`SceneBuffer`].
#[derive(Clone, Copy, Debug)]
pub struct ShapeView<'a> {
    style: ShapeStyle,
    segments: &'a [f32],
}

impl<'a> ShapeView<'a> {
    pub fn style(&self) -> &ShapeStyle {
        &self.style
    }

    pub fn segment_count(&self) -> usize {
        self.segments.len() / Segment::WIRE_LEN
    }

    pub fn segments(&self) -> impl Iterator<Item = Segment> + 'a {
        self.segments
            .chunks_exact(Segment::WIRE_LEN)
            .filter_map(Segment::from_wire)
    }
}

/// Iterator returned by [`SceneBuffer::shapes`].
pub struct Shapes<'a> {
    data: &'a [f32],
    offset: usize,
}

impl<'a> Iterator for Shapes<'a> {
    type Item = ShapeView<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.offset >= self.data.len() {
            return None;
        }
        // Layout was checked in `from_floats`, so this only fails on a corrupted invariant.
        let (shape, next) = read_shape(self.data, self.offset).ok()?;
        self.offset = next;
        Some(shape)
    }
}

/// Incremental writer for [`SceneBuffer`]s.
#[derive(Clone, Debug, Default)]
pub struct SceneBuilder {
    data: Vec<f32>,
    shapes: usize,
}

impl SceneBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a shape on top of everything pushed so far.
    pub fn push_shape(&mut self, style: &ShapeStyle, segments: &[Segment]) -> CurvecastResult<()> {
        if segments.len() > MAX_SEGMENTS {
            return Err(CurvecastError::validation(format!(
                "shape has {} segments, more than the wire format can count ({MAX_SEGMENTS})",
                segments.len()
            )));
        }
        self.data
            .reserve(SHAPE_HEADER_LEN + segments.len() * Segment::WIRE_LEN);
        self.data.extend_from_slice(&style.fill.to_array());
        self.data.extend_from_slice(&style.stroke.to_array());
        self.data.push(style.stroke_width as f32);
        self.data.push(segments.len() as f32);
        for seg in segments {
            self.data.extend_from_slice(&seg.to_wire());
        }
        self.shapes += 1;
        Ok(())
    }

    pub fn shape_count(&self) -> usize {
        self.shapes
    }

    pub fn finish(self) -> SceneBuffer {
        SceneBuffer {
            data: self.data,
            shapes: self.shapes,
        }
    }
}

fn read_shape(data: &[f32], offset: usize) -> CurvecastResult<(ShapeView<'_>, usize)> {
    let header = data
        .get(offset..offset + SHAPE_HEADER_LEN)
        .ok_or_else(|| {
            CurvecastError::validation(format!(
                "truncated shape header at float {offset}: need {SHAPE_HEADER_LEN} floats, {} left",
                data.len() - offset
            ))
        })?;

    let count = header[9];
    if !count.is_finite() || count < 0.0 || count.fract() != 0.0 {
        return Err(CurvecastError::validation(format!(
            "invalid segment count {count} at float {}",
            offset + 9
        )));
    }
    let count = count as usize;

    let start = offset + SHAPE_HEADER_LEN;
    let end = count
        .checked_mul(Segment::WIRE_LEN)
        .and_then(|n| n.checked_add(start))
        .filter(|&end| end <= data.len())
        .ok_or_else(|| {
            CurvecastError::validation(format!(
                "shape at float {offset} declares {count} segments but only {} floats follow",
                data.len() - start
            ))
        })?;

    let paint = |at: usize| {
        Rgba::from_slice(&header[at..]).ok_or_else(|| {
            CurvecastError::validation(format!("truncated paint at float {}", offset + at))
        })
    };
    let style = ShapeStyle {
        fill: paint(0)?,
        stroke: paint(4)?,
        stroke_width: f64::from(header[8]),
    };
    Ok((
        ShapeView {
            style,
            segments: &data[start..end],
        },
        end,
    ))
}

#[cfg(test)]
#[path = "../../tests/unit/scene/buffer.rs"]
mod tests;
