pub use kurbo::{Affine, BezPath, Point};

/// Straight-alpha RGBA color with `f32` channels in `[0, 1]`.
///
/// Scene buffers carry colors in this form and the compositor's "over" operator divides the
/// blended color by the output alpha, so the accumulator stays straight as well.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const TRANSPARENT: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Read four consecutive floats as `r, g, b, a`. Returns `None` for short slices.
    pub fn from_slice(v: &[f32]) -> Option<Self> {
        match v {
            [r, g, b, a, ..] => Some(Self::new(*r, *g, *b, *a)),
            _ => None,
        }
    }

    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Same color with alpha multiplied by `coverage`.
    pub fn with_alpha_scaled(self, coverage: f32) -> Self {
        Self {
            a: self.a * coverage,
            ..self
        }
    }

    pub fn to_rgba8(self) -> [u8; 4] {
        fn to_u8(x: f32) -> u8 {
            (x.clamp(0.0, 1.0) * 255.0).round() as u8
        }

        [to_u8(self.r), to_u8(self.g), to_u8(self.b), to_u8(self.a)]
    }
}
