use rayon::prelude::*;

use crate::foundation::error::{CurvecastError, CurvecastResult};
use crate::math::roots::SolverConfig;
use crate::raster::compositor::evaluate_pixel_with;
use crate::render::frame::Frame;
use crate::render::sink::{Band, BandConfig, BandSink, FrameSink};
use crate::scene::buffer::SceneBuffer;

/// Frame rendering configuration.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RenderOpts {
    /// Render bands on a rayon thread pool.
    pub parallel: bool,
    /// Worker count for the pool; `None` lets rayon decide.
    pub threads: Option<usize>,
    /// Rows per band. `0` is treated as `1`.
    pub band_rows: usize,
    pub solver: SolverConfig,
}

impl Default for RenderOpts {
    fn default() -> Self {
        Self {
            parallel: false,
            threads: None,
            band_rows: 16,
            solver: SolverConfig::default(),
        }
    }
}

/// Render a whole frame of `width x height` pixels.
///
/// Pixel `(col, row)` is sampled at its center `(col + 0.5, row + 0.5)` in scene coordinates.
/// Parallel and sequential rendering produce identical bytes.
pub fn render_frame(
    scene: &SceneBuffer,
    width: u32,
    height: u32,
    opts: &RenderOpts,
) -> CurvecastResult<Frame> {
    let mut sink = FrameSink::new();
    render_to_sink(scene, width, height, opts, &mut sink)?;
    sink.into_frame()
}

/// Render a frame band by band into `sink`, delivering bands top to bottom.
#[tracing::instrument(
    skip(scene, opts, sink),
    fields(shapes = scene.shape_count(), parallel = opts.parallel)
)]
pub fn render_to_sink(
    scene: &SceneBuffer,
    width: u32,
    height: u32,
    opts: &RenderOpts,
    sink: &mut dyn BandSink,
) -> CurvecastResult<()> {
    if width == 0 || height == 0 {
        return Err(CurvecastError::validation("frame width/height must be > 0"));
    }
    let band_rows = normalized_band_rows(opts.band_rows, height);
    let bands: Vec<(u32, u32)> = (0..height)
        .step_by(band_rows as usize)
        .map(|y0| (y0, band_rows.min(height - y0)))
        .collect();

    sink.begin(BandConfig {
        width,
        height,
        band_rows,
    })?;

    if !opts.parallel {
        for &(y0, rows) in &bands {
            sink.push_band(&render_band(scene, width, y0, rows, &opts.solver))?;
        }
    } else {
        let pool = build_thread_pool(opts.threads)?;
        // One wave of bands per pool width keeps delivery ordered without buffering the frame.
        let wave = pool.current_num_threads().max(1);
        for chunk in bands.chunks(wave) {
            let rendered: Vec<Band> = pool.install(|| {
                chunk
                    .par_iter()
                    .map(|&(y0, rows)| render_band(scene, width, y0, rows, &opts.solver))
                    .collect()
            });
            for band in &rendered {
                sink.push_band(band)?;
            }
        }
    }

    sink.end()?;
    tracing::debug!(width, height, bands = bands.len(), "rendered frame");
    Ok(())
}

/// Render rows `y0 .. y0 + rows` of the frame.
pub fn render_band(
    scene: &SceneBuffer,
    width: u32,
    y0: u32,
    rows: u32,
    cfg: &SolverConfig,
) -> Band {
    let mut data = Vec::with_capacity(width as usize * rows as usize * 4);
    for row in y0..y0 + rows {
        let y = f64::from(row) + 0.5;
        for col in 0..width {
            let x = f64::from(col) + 0.5;
            data.extend_from_slice(&evaluate_pixel_with(x, y, scene, cfg).to_rgba8());
        }
    }
    Band { y0, rows, data }
}

fn build_thread_pool(threads: Option<usize>) -> CurvecastResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(CurvecastError::validation(
            "render option 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| CurvecastError::evaluation(format!("failed to build rayon thread pool: {e}")))
}

fn normalized_band_rows(band_rows: usize, height: u32) -> u32 {
    u32::try_from(band_rows).unwrap_or(u32::MAX).clamp(1, height)
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
