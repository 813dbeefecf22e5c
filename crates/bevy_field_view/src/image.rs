use bevy::asset::RenderAssetUsages;
use bevy::image::ImageSampler;
use bevy::prelude::{Image, Vec2};
use bevy::render::render_resource::{Extent3d, TextureDimension, TextureFormat};
use field_view::prelude::{Error, FieldImage, Result};

/// Longest on-screen side of the displayed field, in logical pixels.
pub const MAX_DISPLAY_SIDE: f32 = 1024.0;

/// Largest texture side wgpu guarantees under its default limits.
pub const MAX_TEXTURE_SIDE: u32 = 8192;

/// Rejects images the GPU cannot upload as a single texture.
pub fn check_texture_size((width, height): (u32, u32)) -> Result<()> {
    if width > MAX_TEXTURE_SIDE || height > MAX_TEXTURE_SIDE {
        return Err(Error::Render(format!(
            "{width}x{height} image exceeds the {MAX_TEXTURE_SIDE} pixel texture limit; \
             write it to a file with --output instead"
        )));
    }
    Ok(())
}

/// Copies a [`FieldImage`] into a Bevy [`Image`] sampled with nearest filtering,
/// so individual grid cells stay crisp when the sprite is scaled.
pub fn to_bevy_image(image: &FieldImage) -> Image {
    let size = Extent3d {
        width: image.width,
        height: image.height,
        depth_or_array_layers: 1,
    };
    let mut out = Image::new(
        size,
        TextureDimension::D2,
        image.pixels.clone(),
        TextureFormat::Rgba8UnormSrgb,
        RenderAssetUsages::RENDER_WORLD,
    );
    out.sampler = ImageSampler::nearest();
    out
}

/// On-screen size for an image of `size` pixels, keeping the aspect ratio and
/// stretching the longest side to `max_side`.
pub fn fit_size((width, height): (u32, u32), max_side: f32) -> Vec2 {
    let longest = width.max(height).max(1) as f32;
    let k = max_side / longest;
    Vec2::new(width as f32 * k, height as f32 * k).max(Vec2::ONE)
}
