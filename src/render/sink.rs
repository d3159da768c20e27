use crate::foundation::error::{CurvecastError, CurvecastResult};
use crate::render::frame::Frame;

/// Configuration provided to a [`BandSink`] before the first band.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BandConfig {
    pub width: u32,
    pub height: u32,
    /// Rows per band; the last band may be shorter.
    pub band_rows: u32,
}

/// A horizontal strip of rendered rows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Band {
    /// First row covered by this band.
    pub y0: u32,
    pub rows: u32,
    /// `rows * width` straight-alpha RGBA8 pixels.
    pub data: Vec<u8>,
}

/// Sink contract for consuming a frame band by band.
///
/// Ordering contract: `push_band` is called in strictly increasing `y0` order, and the bands tile
/// the frame without gaps.
pub trait BandSink: Send {
    /// Called once before any band is pushed.
    fn begin(&mut self, cfg: BandConfig) -> CurvecastResult<()>;
    fn push_band(&mut self, band: &Band) -> CurvecastResult<()>;
    /// Called once after the last band is pushed.
    fn end(&mut self) -> CurvecastResult<()>;
}

/// Collects bands into a whole [`Frame`].
#[derive(Debug, Default)]
pub struct FrameSink {
    frame: Option<Frame>,
    rows_written: u32,
}

impl FrameSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows_written(&self) -> u32 {
        self.rows_written
    }

    /// Take the assembled frame. Fails unless every row has been delivered.
    pub fn into_frame(self) -> CurvecastResult<Frame> {
        let frame = self
            .frame
            .ok_or_else(|| CurvecastError::evaluation("frame sink was never started"))?;
        if self.rows_written != frame.height {
            return Err(CurvecastError::evaluation(format!(
                "frame sink received {} of {} rows",
                self.rows_written, frame.height
            )));
        }
        Ok(frame)
    }
}

impl BandSink for FrameSink {
    fn begin(&mut self, cfg: BandConfig) -> CurvecastResult<()> {
        self.frame = Some(Frame::new(cfg.width, cfg.height));
        self.rows_written = 0;
        Ok(())
    }

    fn push_band(&mut self, band: &Band) -> CurvecastResult<()> {
        let frame = self
            .frame
            .as_mut()
            .ok_or_else(|| CurvecastError::evaluation("push_band called before begin"))?;
        if band.y0 != self.rows_written {
            return Err(CurvecastError::evaluation(format!(
                "band starts at row {} but row {} is next",
                band.y0, self.rows_written
            )));
        }
        let stride = frame.width as usize * 4;
        let start = band.y0 as usize * stride;
        let dst = frame
            .data
            .get_mut(start..start + band.data.len())
            .filter(|_| band.data.len() == band.rows as usize * stride)
            .ok_or_else(|| {
                CurvecastError::evaluation(format!(
                    "band at row {} does not fit the frame",
                    band.y0
                ))
            })?;
        dst.copy_from_slice(&band.data);
        self.rows_written += band.rows;
        Ok(())
    }

    fn end(&mut self) -> CurvecastResult<()> {
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/sink.rs"]
mod tests;
