//! Bevy window for inspecting a rendered field.
//!
//! [`show`] opens a window with the field image and blocks until it is closed. While the
//! cursor is over the image the window title shows the data coordinate and the grid value
//! underneath.
#![forbid(unsafe_code)]

use std::sync::Arc;

use bevy::log::LogPlugin;
use bevy::prelude::*;
use bevy::window::{PrimaryWindow, WindowResolution};
use field_view::prelude::{Error, FieldImage, Probe, Result};
pub use image::{
    check_texture_size, fit_size, to_bevy_image, MAX_DISPLAY_SIDE, MAX_TEXTURE_SIDE,
};

mod image;

/// Convenient re-exports for common types. Import with `use bevy_field_view::prelude::*;`.
pub mod prelude {
    pub use field_view::prelude::*;

    pub use crate::image::{
        check_texture_size, fit_size, to_bevy_image, MAX_DISPLAY_SIDE, MAX_TEXTURE_SIDE,
    };
    pub use crate::{show, FieldSprite, FieldView, FieldViewPlugin};
}

/// Plugin that displays one [`FieldImage`] centered in the primary window.
pub struct FieldViewPlugin {
    pub image: Arc<FieldImage>,
    pub title: String,
}

impl FieldViewPlugin {
    pub fn new(image: impl Into<Arc<FieldImage>>, title: impl Into<String>) -> Self {
        Self {
            image: image.into(),
            title: title.into(),
        }
    }
}

/// The displayed field and its base window title.
#[derive(Resource, Clone)]
pub struct FieldView {
    pub image: Arc<FieldImage>,
    pub title: String,
    /// On-screen size of the sprite in world units.
    pub display_size: Vec2,
}

/// Marker for the sprite showing the field.
#[derive(Component)]
pub struct FieldSprite;

impl Plugin for FieldViewPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(FieldView {
            image: self.image.clone(),
            title: self.title.clone(),
            display_size: fit_size(self.image.size(), MAX_DISPLAY_SIDE),
        })
        .insert_resource(ClearColor(Color::srgb(0.95, 0.95, 0.95)))
        .add_systems(Startup, spawn_field_view)
        .add_systems(Update, update_probe_title);
    }
}

/// Opens a window showing `image` and blocks until the window is closed.
///
/// Fails with [`Error::Render`] before any window is created when `image` does not fit
/// in one texture.
pub fn show(image: FieldImage, title: impl Into<String>) -> Result<()> {
    check_texture_size(image.size())?;
    let title = title.into();
    let display = fit_size(image.size(), MAX_DISPLAY_SIDE);

    let window = Window {
        title: title.clone(),
        resolution: WindowResolution::new(display.x.round() as u32, display.y.round() as u32),
        ..default()
    };

    // The caller owns the global tracing subscriber.
    let plugins = DefaultPlugins
        .set(WindowPlugin {
            primary_window: Some(window),
            ..default()
        })
        .disable::<LogPlugin>();

    let exit = App::new()
        .add_plugins(plugins)
        .add_plugins(FieldViewPlugin::new(image, title))
        .run();

    match exit {
        AppExit::Success => Ok(()),
        AppExit::Error(code) => Err(Error::Render(format!(
            "viewer exited with code {code}"
        ))),
    }
}

fn spawn_field_view(
    mut commands: Commands,
    mut images: ResMut<Assets<Image>>,
    view: Res<FieldView>,
) {
    let handle = images.add(to_bevy_image(&view.image));
    commands.spawn(Camera2d);
    commands.spawn((
        Sprite {
            image: handle,
            custom_size: Some(view.display_size),
            ..default()
        },
        FieldSprite,
    ));
    info!(
        "Showing {}x{} field image at {}x{}.",
        view.image.width, view.image.height, view.display_size.x, view.display_size.y
    );
}

fn update_probe_title(
    mut window: Single<&mut Window, With<PrimaryWindow>>,
    camera: Single<(&Camera, &GlobalTransform)>,
    sprite: Single<&GlobalTransform, With<FieldSprite>>,
    view: Res<FieldView>,
) {
    let (camera, camera_transform) = *camera;
    let probe = window
        .cursor_position()
        .and_then(|cursor| camera.viewport_to_world_2d(camera_transform, cursor).ok())
        .and_then(|world| {
            let uv = sprite_uv(world, sprite.translation().truncate(), view.display_size);
            view.image.probe(uv)
        });

    let title = probe_title(&view.title, probe.as_ref());
    if window.title != title {
        window.title = title;
    }
}

/// Normalized position (`0..1` from the lower-left corner) of `world` on a sprite
/// centered at `center` with size `size`.
pub fn sprite_uv(world: Vec2, center: Vec2, size: Vec2) -> Vec2 {
    (world - center) / size.max(Vec2::splat(f32::EPSILON)) + Vec2::splat(0.5)
}

/// Window title with the probe read-out appended.
pub fn probe_title(base: &str, probe: Option<&Probe>) -> String {
    match probe {
        Some(p) => format!(
            "{base} | x={:.6} y={:.6} [{}, {}] = {}",
            p.position.x, p.position.y, p.row, p.col, p.value
        ),
        None => base.to_owned(),
    }
}
