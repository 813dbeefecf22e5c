//! Data-space placement of a rendered field.
use glam::Vec2;

/// Image extent in data coordinates, `(left, right, bottom, top)`.
///
/// `left`/`bottom` belong to the first axis sample and `right`/`top` to the last, so a
/// descending axis yields `left > right` (or `bottom > top`). The extent is kept as given.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Extent {
    /// Data coordinate of the lower-left image corner.
    pub start: Vec2,
    /// Data coordinate of the upper-right image corner.
    pub end: Vec2,
}

impl Extent {
    pub fn new(start: Vec2, end: Vec2) -> Self {
        Self { start, end }
    }

    /// Builds the extent from the first and last samples of each axis.
    /// An empty axis contributes `0.0` on both ends.
    pub fn from_axes(x: &[f32], y: &[f32]) -> Self {
        let ends = |axis: &[f32]| match (axis.first(), axis.last()) {
            (Some(&a), Some(&b)) => (a, b),
            _ => (0.0, 0.0),
        };
        let (left, right) = ends(x);
        let (bottom, top) = ends(y);
        Self {
            start: Vec2::new(left, bottom),
            end: Vec2::new(right, top),
        }
    }

    /// `(left, right, bottom, top)`.
    pub fn as_tuple(&self) -> (f32, f32, f32, f32) {
        (self.start.x, self.end.x, self.start.y, self.end.y)
    }

    /// Signed horizontal span.
    pub fn width(&self) -> f32 {
        self.end.x - self.start.x
    }

    /// Signed vertical span.
    pub fn height(&self) -> f32 {
        self.end.y - self.start.y
    }

    /// Maps normalized image coordinates (`0..1` from the lower-left corner) to data space.
    #[inline]
    pub fn lerp(&self, uv: Vec2) -> Vec2 {
        self.start + Vec2::new(self.width(), self.height()) * uv
    }
}
