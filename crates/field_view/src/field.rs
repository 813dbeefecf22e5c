//! In-memory field data: coordinate axes and the value grid.
use crate::error::{Error, Result};
use crate::extent::Extent;
use crate::format::FileHeader;

/// Row-major grid of `i32` samples.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    data: Vec<i32>,
}

impl Grid {
    /// Wraps row-major `data` as a `rows x cols` grid.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<i32>) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(Error::Shape(format!(
                "grid must have at least one row and column, got {rows}x{cols}"
            )));
        }
        let expected = rows
            .checked_mul(cols)
            .ok_or_else(|| Error::Shape(format!("grid {rows}x{cols} is too large")))?;
        if data.len() != expected {
            return Err(Error::Shape(format!(
                "grid {rows}x{cols} needs {expected} values, got {}",
                data.len()
            )));
        }
        Ok(Self { rows, cols, data })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Get the value at `(row, col)`, or `None` if out of bounds.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<i32> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some(self.data[row * self.cols + col])
    }

    /// Borrow one row.
    ///
    /// # Panics
    /// Panics if `row >= self.rows()`.
    pub fn row(&self, row: usize) -> &[i32] {
        let start = row * self.cols;
        &self.data[start..start + self.cols]
    }

    pub fn as_slice(&self) -> &[i32] {
        &self.data
    }

    /// Smallest and largest value in the grid.
    pub fn min_max(&self) -> (i32, i32) {
        self.data
            .iter()
            .fold((i32::MAX, i32::MIN), |(lo, hi), &v| (lo.min(v), hi.max(v)))
    }
}

/// A loaded field: `x` spans the grid rows, `y` the grid columns.
///
/// Fields are private so the axis lengths always match the grid shape.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldData {
    x: Vec<f32>,
    y: Vec<f32>,
    grid: Grid,
}

impl FieldData {
    /// Bundles axes with a grid, checking that `x.len() == rows` and `y.len() == cols`.
    pub fn new(x: Vec<f32>, y: Vec<f32>, grid: Grid) -> Result<Self> {
        if x.len() != grid.rows() || y.len() != grid.cols() {
            return Err(Error::Shape(format!(
                "axes of length {}x{} do not match a {}x{} grid",
                x.len(),
                y.len(),
                grid.rows(),
                grid.cols()
            )));
        }
        if i32::try_from(grid.rows()).is_err() || i32::try_from(grid.cols()).is_err() {
            return Err(Error::Shape(format!(
                "grid {}x{} exceeds the i32 header range",
                grid.rows(),
                grid.cols()
            )));
        }
        Ok(Self { x, y, grid })
    }

    pub fn x(&self) -> &[f32] {
        &self.x
    }

    pub fn y(&self) -> &[f32] {
        &self.y
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn nx(&self) -> usize {
        self.grid.rows()
    }

    pub fn ny(&self) -> usize {
        self.grid.cols()
    }

    pub fn header(&self) -> FileHeader {
        FileHeader::new(self.nx() as i32, self.ny() as i32)
    }

    /// Coordinate extent taken from the first and last axis samples.
    pub fn extent(&self) -> Extent {
        Extent::from_axes(&self.x, &self.y)
    }
}
