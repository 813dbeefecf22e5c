//! Rendered RGBA pixels together with the data needed to probe them.
use glam::Vec2;

use crate::extent::Extent;
use crate::field::Grid;

/// Color-mapped field as 8-bit RGBA rows, top row first.
///
/// The pixel origin is the top-left corner as image formats expect, while the data origin
/// is the lower-left: grid row 0 occupies the bottom `scale` pixel rows.
#[derive(Clone, Debug)]
pub struct FieldImage {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
    pub extent: Extent,
    pub scale: u32,
    /// Value range that was mapped onto the colormap.
    pub value_range: (i32, i32),
    grid: Grid,
}

/// What lies under a normalized image position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Probe {
    /// Data-space coordinate.
    pub position: Vec2,
    pub row: usize,
    pub col: usize,
    pub value: i32,
}

impl FieldImage {
    pub(crate) fn new(
        pixels: Vec<u8>,
        (width, height): (u32, u32),
        extent: Extent,
        scale: u32,
        value_range: (i32, i32),
        grid: Grid,
    ) -> Self {
        debug_assert_eq!(pixels.len(), width as usize * height as usize * 4);
        Self {
            width,
            height,
            pixels,
            extent,
            scale,
            value_range,
            grid,
        }
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// RGBA of the pixel at `(x, y)` counted from the top-left corner.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        let mut rgba = [0u8; 4];
        rgba.copy_from_slice(&self.pixels[i..i + 4]);
        Some(rgba)
    }

    /// Looks up the cell at normalized coordinates `uv` (`0..1` from the lower-left corner).
    pub fn probe(&self, uv: Vec2) -> Option<Probe> {
        if !(0.0..1.0).contains(&uv.x) || !(0.0..1.0).contains(&uv.y) {
            return None;
        }
        let rows = self.grid.rows();
        let cols = self.grid.cols();
        let col = ((uv.x * cols as f32) as usize).min(cols - 1);
        let row = ((uv.y * rows as f32) as usize).min(rows - 1);
        let value = self.grid.get(row, col)?;
        Some(Probe {
            position: self.extent.lerp(uv),
            row,
            col,
            value,
        })
    }
}
