//! Binary field file format.
//!
//! A field file is a flat sequence of fixed-width numbers with no padding:
//!
//! ```text
//! offset 0              : i32        nx
//! offset 4              : i32        ny
//! offset 8              : f32[nx]    x-axis coordinates
//! offset 8+4nx          : f32[ny]    y-axis coordinates
//! offset 8+4nx+4ny      : i32[nx*ny] grid values, row-major
//! ```
//!
//! All numbers share one [`ByteOrder`]. There is no magic number, version or checksum,
//! so the only structural checks possible are the header dimensions and the byte counts.
pub mod cursor;
pub mod reader;
pub mod writer;

use std::str::FromStr;

use nom::number::Endianness;

pub use cursor::ByteCursor;
pub use reader::{load, load_with, parse};
pub use writer::{encode, write};

use crate::error::{Error, Result};

/// Size in bytes of every number in the file.
pub const WORD: usize = 4;

/// Size in bytes of the `nx`/`ny` header.
pub const HEADER_LEN: usize = 2 * WORD;

/// Byte order of every numeric field in a file.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ByteOrder {
    #[default]
    Little,
    Big,
    /// Byte order of the machine running this program.
    Native,
}

impl From<ByteOrder> for Endianness {
    fn from(order: ByteOrder) -> Self {
        match order {
            ByteOrder::Little => Endianness::Little,
            ByteOrder::Big => Endianness::Big,
            ByteOrder::Native => Endianness::Native,
        }
    }
}

impl FromStr for ByteOrder {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "little" | "le" => Ok(ByteOrder::Little),
            "big" | "be" => Ok(ByteOrder::Big),
            "native" => Ok(ByteOrder::Native),
            other => Err(Error::InvalidConfig(format!(
                "unknown byte order '{other}' (expected little, big or native)"
            ))),
        }
    }
}

/// Grid dimensions as stored at the start of a field file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FileHeader {
    /// Number of x samples, which is also the number of grid rows.
    pub nx: i32,
    /// Number of y samples, which is also the number of grid columns.
    pub ny: i32,
}

impl FileHeader {
    pub fn new(nx: i32, ny: i32) -> Self {
        Self { nx, ny }
    }

    /// Computes the byte layout described by this header.
    ///
    /// Fails with [`Error::InvalidHeader`] for non-positive dimensions or when the
    /// layout does not fit in `usize`.
    pub fn layout(&self) -> Result<FieldLayout> {
        if self.nx <= 0 || self.ny <= 0 {
            return Err(Error::InvalidHeader(format!(
                "dimensions must be positive, got nx={} ny={}",
                self.nx, self.ny
            )));
        }
        let nx = self.nx as usize;
        let ny = self.ny as usize;
        let overflow = || {
            Error::InvalidHeader(format!(
                "layout for nx={} ny={} overflows the address space",
                self.nx, self.ny
            ))
        };

        let cells = nx.checked_mul(ny).ok_or_else(overflow)?;
        let x_len = nx.checked_mul(WORD).ok_or_else(overflow)?;
        let y_len = ny.checked_mul(WORD).ok_or_else(overflow)?;
        let grid_len = cells.checked_mul(WORD).ok_or_else(overflow)?;
        let y_offset = HEADER_LEN.checked_add(x_len).ok_or_else(overflow)?;
        let grid_offset = y_offset.checked_add(y_len).ok_or_else(overflow)?;
        let total_len = grid_offset.checked_add(grid_len).ok_or_else(overflow)?;

        Ok(FieldLayout {
            nx,
            ny,
            x_offset: HEADER_LEN,
            y_offset,
            grid_offset,
            total_len,
        })
    }
}

/// Byte offsets of each section of a field file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldLayout {
    pub nx: usize,
    pub ny: usize,
    pub x_offset: usize,
    pub y_offset: usize,
    pub grid_offset: usize,
    /// Total file size in bytes.
    pub total_len: usize,
}

impl FieldLayout {
    /// Number of grid cells.
    pub fn cells(&self) -> usize {
        self.nx * self.ny
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_offsets_follow_header() {
        let layout = FileHeader::new(2, 3).layout().unwrap();
        assert_eq!(layout.x_offset, 8);
        assert_eq!(layout.y_offset, 16);
        assert_eq!(layout.grid_offset, 28);
        assert_eq!(layout.total_len, 52);
        assert_eq!(layout.cells(), 6);
    }

    #[test]
    fn layout_rejects_empty_and_negative_dimensions() {
        for (nx, ny) in [(0, 3), (3, 0), (-1, 4), (4, -7), (0, 0)] {
            let err = FileHeader::new(nx, ny).layout().unwrap_err();
            assert!(matches!(err, Error::InvalidHeader(_)), "nx={nx} ny={ny}");
        }
    }

    #[test]
    fn layout_reports_overflow_as_invalid_header() {
        // 4 * (2^31 - 1)^2 plus the axes exceeds u64::MAX by a few bytes.
        let err = FileHeader::new(i32::MAX, i32::MAX).layout().unwrap_err();
        assert!(matches!(err, Error::InvalidHeader(ref msg) if msg.contains("overflows")));
    }

    #[test]
    fn byte_order_parses_aliases() {
        assert_eq!("LE".parse::<ByteOrder>().unwrap(), ByteOrder::Little);
        assert_eq!("big".parse::<ByteOrder>().unwrap(), ByteOrder::Big);
        assert_eq!("Native".parse::<ByteOrder>().unwrap(), ByteOrder::Native);
        assert!("middle".parse::<ByteOrder>().is_err());
    }

    #[test]
    fn byte_order_maps_onto_endianness() {
        assert_eq!(Endianness::from(ByteOrder::Little), Endianness::Little);
        assert_eq!(Endianness::from(ByteOrder::Big), Endianness::Big);
        assert_eq!(Endianness::from(ByteOrder::Native), Endianness::Native);
    }
}
