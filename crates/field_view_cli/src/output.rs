use std::path::Path;

use anyhow::Context;
use field_view::prelude::FieldImage;
use image::{ImageFormat, RgbaImage};
use tracing::info;

/// Writes the rendered field as an RGBA PNG.
pub fn save_png(image: &FieldImage, path: impl AsRef<Path>) -> anyhow::Result<()> {
    let path = path.as_ref();
    let buffer = RgbaImage::from_raw(image.width, image.height, image.pixels.clone())
        .context("pixel buffer does not match image size")?;
    buffer
        .save_with_format(path, ImageFormat::Png)
        .with_context(|| format!("cannot write '{}'", path.display()))?;
    info!(
        "Saved {}x{} image to '{}'.",
        image.width,
        image.height,
        path.display()
    );
    Ok(())
}
