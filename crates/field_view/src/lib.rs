#![forbid(unsafe_code)]
//! field_view: load binary 2D scalar field dumps and render them as color-mapped images.
//!
//! Modules:
//! - format: the `nx, ny, x[nx], y[ny], grid[nx*ny]` file layout (cursor, loader, writer)
//! - field: grid and axis data model
//! - extent: data-space placement of the rendered image
//! - colormap, config, render: turning a field into RGBA pixels
//!
//! Displaying or saving the pixels is left to the caller; see the `bevy_field_view` and
//! `field_view_cli` crates.
pub mod colormap;
pub mod config;
pub mod error;
pub mod extent;
pub mod field;
pub mod format;
pub mod render;

/// Convenient re-exports for common types. Import with `use field_view::prelude::*;`.
pub mod prelude {
    pub use crate::colormap::Colormap;
    pub use crate::config::{Normalization, RenderConfig};
    pub use crate::error::{Error, Result, Stage};
    pub use crate::extent::Extent;
    pub use crate::field::{FieldData, Grid};
    pub use crate::format::{
        encode, load, load_with, parse, write, ByteCursor, ByteOrder, FieldLayout, FileHeader,
    };
    pub use crate::render::{render, FieldImage, Probe, ValueScale};
}
