//! Decoding field files from disk or memory.
use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::{debug, info, warn};

use super::{ByteCursor, ByteOrder, FileHeader};
use crate::error::{Error, Result, Stage};
use crate::field::{FieldData, Grid};

/// Loads a little-endian field file.
pub fn load(path: impl AsRef<Path>) -> Result<FieldData> {
    load_with(path, ByteOrder::default())
}

/// Loads a field file written in the given byte order.
///
/// The file is read fully into memory and closed before decoding starts.
pub fn load_with(path: impl AsRef<Path>, order: ByteOrder) -> Result<FieldData> {
    let path = path.as_ref();
    let access = |source| Error::FileAccess {
        path: path.to_path_buf(),
        source,
    };

    let bytes = {
        let mut file = File::open(path).map_err(access)?;
        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes).map_err(access)?;
        bytes
    };
    debug!("Read {} bytes from '{}'.", bytes.len(), path.display());

    let field = parse(&bytes, order)?;
    info!(
        "Loaded field {}x{} from '{}'.",
        field.nx(),
        field.ny(),
        path.display()
    );
    Ok(field)
}

/// Decodes a complete field file held in memory.
///
/// Bytes past the end of the grid are ignored with a warning.
pub fn parse(bytes: &[u8], order: ByteOrder) -> Result<FieldData> {
    let mut cursor = ByteCursor::new(bytes, order);

    let nx = cursor.read_i32(Stage::Header)?;
    let ny = cursor.read_i32(Stage::Header)?;
    let layout = FileHeader::new(nx, ny).layout()?;
    debug!(
        "Field layout: nx={} ny={} y_offset={} grid_offset={} total={}",
        layout.nx, layout.ny, layout.y_offset, layout.grid_offset, layout.total_len
    );

    let x = cursor.read_f32s(Stage::XAxis, layout.nx)?;
    let y = cursor.read_f32s(Stage::YAxis, layout.ny)?;
    let values = cursor.read_i32s(Stage::Grid, layout.cells())?;

    if !cursor.is_empty() {
        warn!(
            "Ignoring {} trailing bytes after offset {} (expected {} bytes in total).",
            cursor.remaining(),
            cursor.position(),
            layout.total_len
        );
    }

    let grid = Grid::from_vec(layout.nx, layout.ny, values)?;
    FieldData::new(x, y, grid)
}
