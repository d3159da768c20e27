use crate::foundation::core::{Point, Rgba};
use crate::math::roots::SolverConfig;
use crate::raster::{crossing::count_crossings, distance::min_distance_squared, segment::Segment};
use crate::scene::buffer::{SceneBuffer, ShapeView};

/// Crossing parity and outline distance of one shape at one pixel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShapeProbe {
    /// Ray crossings summed over all segments.
    pub crossings: u32,
    /// Euclidean distance to the nearest segment; infinite for a shape without segments.
    pub distance: f64,
}

impl ShapeProbe {
    pub fn is_inside(&self) -> bool {
        self.crossings % 2 == 1
    }

    /// Distance to the outline, negative inside the shape.
    pub fn signed_distance(&self) -> f64 {
        if self.is_inside() {
            -self.distance
        } else {
            self.distance
        }
    }
}

/// Aggregate crossings and minimum distance of `segments` around `pixel`.
pub fn probe_segments(
    segments: impl IntoIterator<Item = Segment>,
    pixel: Point,
    cfg: &SolverConfig,
) -> ShapeProbe {
    let mut crossings = 0;
    let mut best = f64::INFINITY;
    for seg in segments {
        let rel = seg.relative_to(pixel);
        crossings += count_crossings(&rel, cfg);
        best = best.min(min_distance_squared(&rel, cfg));
    }
    ShapeProbe {
        crossings,
        distance: best.sqrt(),
    }
}

pub fn probe_shape(shape: &ShapeView<'_>, pixel: Point, cfg: &SolverConfig) -> ShapeProbe {
    probe_segments(shape.segments(), pixel, cfg)
}

/// One-pixel-wide linear ramp centered on the outline: 1 at half a pixel inside, 0 at half a
/// pixel outside.
pub fn fill_coverage(signed_distance: f64) -> f64 {
    0.5 - signed_distance.clamp(-0.5, 0.5)
}

/// Length of `[distance - half_width, distance + half_width]` that lies below `0.5`, i.e. how
/// much of the stroke band falls within this pixel's half-pixel reach.
///
/// Capped at 1: bands wider than a pixel would otherwise push alpha past opaque.
pub fn stroke_coverage(distance: f64, half_width: f64) -> f64 {
    ((distance + half_width).min(0.5) - (distance - half_width).min(0.5)).min(1.0)
}

/// Porter-Duff "over" for straight-alpha colors.
///
/// A zero output alpha yields transparent black; a fully transparent source leaves `dst` as is.
pub fn over(src: Rgba, dst: Rgba) -> Rgba {
    let a = src.a + dst.a * (1.0 - src.a);
    if a == 0.0 {
        return Rgba::TRANSPARENT;
    }
    if src.a == 0.0 {
        return dst;
    }
    let k = dst.a * (1.0 - src.a);
    Rgba {
        r: (src.r * src.a + dst.r * k) / a,
        g: (src.g * src.a + dst.g * k) / a,
        b: (src.b * src.a + dst.b * k) / a,
        a,
    }
}

/// Composite a shape's fill, then its stroke, over `dst`.
pub fn composite_shape(dst: Rgba, shape: &ShapeView<'_>, pixel: Point, cfg: &SolverConfig) -> Rgba {
    let style = shape.style();
    let probe = probe_shape(shape, pixel, cfg);

    let fill = style
        .fill
        .with_alpha_scaled(fill_coverage(probe.signed_distance()) as f32);
    let dst = over(fill, dst);

    let half_width = 0.5 * style.stroke_width;
    let stroke = style
        .stroke
        .with_alpha_scaled(stroke_coverage(probe.distance, half_width) as f32);
    over(stroke, dst)
}

/// Composited color of the scene at `(x, y)` with the default solver settings.
///
/// Pure function of its inputs: pixels may be evaluated concurrently and in any order.
pub fn evaluate_pixel(x: f64, y: f64, scene: &SceneBuffer) -> Rgba {
    evaluate_pixel_with(x, y, scene, &SolverConfig::default())
}

pub fn evaluate_pixel_with(x: f64, y: f64, scene: &SceneBuffer, cfg: &SolverConfig) -> Rgba {
    let pixel = Point::new(x, y);
    scene
        .shapes()
        .fold(Rgba::TRANSPARENT, |acc, shape| {
            composite_shape(acc, &shape, pixel, cfg)
        })
}

#[cfg(test)]
#[path = "../../tests/unit/raster/compositor.rs"]
mod tests;
