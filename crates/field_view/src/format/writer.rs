//! Encoding fields into the binary file layout.
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::debug;

use super::{ByteOrder, HEADER_LEN, WORD};
use crate::error::{Error, Result};
use crate::field::FieldData;

/// Encodes a field into a byte buffer.
pub fn encode(field: &FieldData, order: ByteOrder) -> Vec<u8> {
    let header = field.header();
    let words = field.x().len() + field.y().len() + field.grid().as_slice().len();
    let mut out = Vec::with_capacity(HEADER_LEN + words * WORD);

    let word = |bits: u32| match order {
        ByteOrder::Little => bits.to_le_bytes(),
        ByteOrder::Big => bits.to_be_bytes(),
        ByteOrder::Native => bits.to_ne_bytes(),
    };
    out.extend_from_slice(&word(header.nx as u32));
    out.extend_from_slice(&word(header.ny as u32));
    for v in field.x().iter().chain(field.y()) {
        out.extend_from_slice(&word(v.to_bits()));
    }
    for &v in field.grid().as_slice() {
        out.extend_from_slice(&word(v as u32));
    }
    out
}

/// Writes a field file to `path`, replacing any existing file.
pub fn write(path: impl AsRef<Path>, field: &FieldData, order: ByteOrder) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|source| Error::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;
    let bytes = encode(field, order);
    let mut writer = BufWriter::new(file);
    writer.write_all(&bytes)?;
    writer.flush()?;
    debug!("Wrote {} bytes to '{}'.", bytes.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::Grid;

    #[test]
    fn encodes_documented_layout() {
        let grid = Grid::from_vec(1, 2, vec![-1, 7]).unwrap();
        let field = FieldData::new(vec![0.25], vec![1.0, 2.0], grid).unwrap();
        let bytes = encode(&field, ByteOrder::Little);

        assert_eq!(bytes.len(), 8 + 4 + 8 + 8);
        assert_eq!(&bytes[0..4], &1i32.to_le_bytes());
        assert_eq!(&bytes[4..8], &2i32.to_le_bytes());
        assert_eq!(&bytes[8..12], &0.25f32.to_le_bytes());
        assert_eq!(&bytes[16..20], &2.0f32.to_le_bytes());
        assert_eq!(&bytes[20..24], &(-1i32).to_le_bytes());
        assert_eq!(&bytes[24..28], &7i32.to_le_bytes());
    }

    #[test]
    fn big_endian_header() {
        let grid = Grid::from_vec(1, 1, vec![5]).unwrap();
        let field = FieldData::new(vec![0.0], vec![0.0], grid).unwrap();
        let bytes = encode(&field, ByteOrder::Big);
        assert_eq!(&bytes[0..8], &[0, 0, 0, 1, 0, 0, 0, 1]);
        assert_eq!(&bytes[16..20], &[0, 0, 0, 5]);
    }

    #[test]
    fn encoded_length_matches_header_layout() {
        let grid = Grid::from_vec(3, 2, vec![1, 2, 3, 4, 5, 6]).unwrap();
        let field = FieldData::new(vec![0.0; 3], vec![0.0; 2], grid).unwrap();
        let expected = field.header().layout().unwrap().total_len;
        for order in [ByteOrder::Little, ByteOrder::Big, ByteOrder::Native] {
            assert_eq!(encode(&field, order).len(), expected);
        }
    }

    #[test]
    fn native_encoding_uses_target_byte_order() {
        let grid = Grid::from_vec(1, 1, vec![0x0102_0304]).unwrap();
        let field = FieldData::new(vec![0.0], vec![0.0], grid).unwrap();
        let bytes = encode(&field, ByteOrder::Native);
        assert_eq!(&bytes[0..4], &1i32.to_ne_bytes());
        assert_eq!(&bytes[16..20], &0x0102_0304i32.to_ne_bytes());
    }
}
