//! Rasterization of a field into color-mapped pixels.
//!
//! [`render`] produces a [`FieldImage`]; showing or saving it is up to the caller.
mod image;

pub use image::{FieldImage, Probe};
use tracing::{debug, info};

use crate::config::{Normalization, RenderConfig};
use crate::error::{Error, Result};
use crate::field::FieldData;

/// Maps grid values to `[0, 1]`.
#[derive(Clone, Copy, Debug)]
pub struct ValueScale {
    lo: i64,
    hi: i64,
    normalization: Normalization,
}

impl ValueScale {
    pub fn new(lo: i32, hi: i32, normalization: Normalization) -> Self {
        Self {
            lo: lo as i64,
            hi: hi as i64,
            normalization,
        }
    }

    /// Normalized position of `value`; constant ranges map everything to `0.0`.
    pub fn apply(&self, value: i32) -> f32 {
        let span = self.hi - self.lo;
        if span <= 0 {
            return 0.0;
        }
        let offset = (value as i64).clamp(self.lo, self.hi) - self.lo;
        let t = match self.normalization {
            Normalization::Linear => offset as f64 / span as f64,
            Normalization::Log => (offset as f64).ln_1p() / (span as f64).ln_1p(),
        };
        t as f32
    }
}

/// Renders `field` into an RGBA image according to `config`.
///
/// Columns run left to right along `y`'s index and rows bottom to top along `x`'s index.
pub fn render(field: &FieldData, config: &RenderConfig) -> Result<FieldImage> {
    config.validate()?;

    let grid = field.grid();
    let (grid_lo, grid_hi) = grid.min_max();
    let lo = config.vmin.unwrap_or(grid_lo);
    let hi = config.vmax.unwrap_or(grid_hi).max(lo);
    let values = ValueScale::new(lo, hi, config.normalization);

    let scale = config.scale as usize;
    let size = |cells: usize| {
        cells
            .checked_mul(scale)
            .and_then(|px| u32::try_from(px).ok())
            .ok_or_else(|| {
                Error::InvalidConfig(format!(
                    "{cells} cells at scale {scale} exceed the maximum image size"
                ))
            })
    };
    let width = size(grid.cols())?;
    let height = size(grid.rows())?;
    let row_bytes = width as usize * 4;
    debug!(
        "Rendering {}x{} grid to {}x{} pixels with {} ({:?}).",
        grid.rows(),
        grid.cols(),
        width,
        height,
        config.colormap,
        config.normalization
    );

    let mut pixels = Vec::with_capacity(row_bytes * height as usize);
    let mut line = Vec::with_capacity(row_bytes);
    for r in (0..grid.rows()).rev() {
        line.clear();
        for &v in grid.row(r) {
            let mut t = values.apply(v);
            if config.reverse {
                t = 1.0 - t;
            }
            let [red, green, blue] = config.colormap.sample(t);
            for _ in 0..scale {
                line.extend_from_slice(&[red, green, blue, 255]);
            }
        }
        for _ in 0..scale {
            pixels.extend_from_slice(&line);
        }
    }

    let extent = field.extent();
    info!(
        "Rendered {}x{} image, values {}..{}, extent {:?}.",
        width,
        height,
        lo,
        hi,
        extent.as_tuple()
    );
    Ok(FieldImage::new(
        pixels,
        (width, height),
        extent,
        config.scale,
        (lo, hi),
        grid.clone(),
    ))
}
