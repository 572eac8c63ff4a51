//! Image session handling: loading, display texture, coordinate mapping.
//!
//! One image is open at a time. The decoded source pixels are retained so
//! brightness/contrast can be re-applied from scratch; the sprite shows a
//! separate display texture that is rebuilt when the settings change.

use bevy::prelude::*;
use bevy::render::render_resource::{Extent3d, TextureDimension, TextureFormat};
use image::RgbaImage;
use std::path::{Path, PathBuf};

use crate::config::RecordOpenedImageRequest;
use crate::constants::{FILTER_NEUTRAL, SUPPORTED_EXTENSIONS};

use super::camera::ResetViewRequest;
use super::filters::apply_display_filter;
use super::measure::{MeasureGesture, MeasurementStore};

/// Marker for the displayed image sprite
#[derive(Component)]
pub struct SessionImage;

/// The currently open image, if any
#[derive(Resource, Default)]
pub struct ImageSession {
    pub current: Option<LoadedImage>,
}

pub struct LoadedImage {
    pub path: PathBuf,
    /// Decoded pixels, never mutated after load
    pub source: RgbaImage,
    /// Display texture the sprite renders (source + filters)
    pub handle: Handle<Image>,
    pub entity: Entity,
}

impl LoadedImage {
    pub fn width(&self) -> u32 {
        self.source.width()
    }

    pub fn height(&self) -> u32 {
        self.source.height()
    }

    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.to_string_lossy().into_owned())
    }

    /// World position (sprite centered at the origin) to image-space pixels
    /// (top-left origin, y down). Stored measurement points use image space,
    /// which is independent of zoom and window size.
    pub fn world_to_image(&self, world: Vec2) -> Vec2 {
        world_to_image(world, self.width(), self.height())
    }

    pub fn image_to_world(&self, image: Vec2) -> Vec2 {
        image_to_world(image, self.width(), self.height())
    }
}

/// Brightness/contrast settings for the displayed image (percent, neutral 100)
#[derive(Resource)]
pub struct DisplaySettings {
    pub brightness: u32,
    pub contrast: u32,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            brightness: FILTER_NEUTRAL,
            contrast: FILTER_NEUTRAL,
        }
    }
}

/// Resource for the image load error dialog
#[derive(Resource, Default)]
pub struct LoadErrorDialog {
    pub message: Option<String>,
}

/// Message to open an image file
#[derive(Message)]
pub struct OpenImageRequest {
    pub path: PathBuf,
}

pub fn world_to_image(world: Vec2, width: u32, height: u32) -> Vec2 {
    Vec2::new(
        world.x + width as f32 / 2.0,
        height as f32 / 2.0 - world.y,
    )
}

pub fn image_to_world(image: Vec2, width: u32, height: u32) -> Vec2 {
    Vec2::new(
        image.x - width as f32 / 2.0,
        height as f32 / 2.0 - image.y,
    )
}

/// Check whether a picked file has one of the extensions the picker offers
pub fn is_supported_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| SUPPORTED_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

/// Build a display texture from source pixels and the current filter settings
fn make_display_texture(source: &RgbaImage, settings: &DisplaySettings) -> Image {
    let filtered = apply_display_filter(source, settings.brightness, settings.contrast);
    Image::new(
        Extent3d {
            width: filtered.width(),
            height: filtered.height(),
            depth_or_array_layers: 1,
        },
        TextureDimension::D2,
        filtered.into_raw(),
        TextureFormat::Rgba8UnormSrgb,
        default(),
    )
}

/// Load a requested image, replacing the current session.
///
/// Decode failures (including `.dcm` files, which are accepted by the picker
/// but not decoded) surface the load error dialog and leave the previous
/// session untouched.
#[allow(clippy::too_many_arguments)]
pub fn load_image_system(
    mut commands: Commands,
    mut events: MessageReader<OpenImageRequest>,
    mut session: ResMut<ImageSession>,
    mut settings: ResMut<DisplaySettings>,
    mut store: ResMut<MeasurementStore>,
    mut gesture: ResMut<MeasureGesture>,
    mut images: ResMut<Assets<Image>>,
    mut load_error: ResMut<LoadErrorDialog>,
    mut reset_view: MessageWriter<ResetViewRequest>,
    mut record_opened: MessageWriter<RecordOpenedImageRequest>,
) {
    for event in events.read() {
        let source = match image::open(&event.path) {
            Ok(decoded) => decoded.to_rgba8(),
            Err(e) => {
                warn!("Failed to decode {:?}: {}", event.path, e);
                load_error.message = Some(format!(
                    "Could not decode {:?}: {}",
                    event.path.file_name().unwrap_or(event.path.as_os_str()),
                    e
                ));
                continue;
            }
        };

        // Tear down the previous session's sprite and texture
        if let Some(previous) = session.current.take() {
            commands.entity(previous.entity).despawn();
            images.remove(&previous.handle);
        }

        // Adjustments restart from neutral for a new image
        *settings = DisplaySettings::default();

        let handle = images.add(make_display_texture(&source, &settings));
        let entity = commands
            .spawn((
                Sprite::from_image(handle.clone()),
                Transform::from_translation(Vec3::ZERO),
                SessionImage,
            ))
            .id();

        info!(
            "Opened image {:?} ({}x{})",
            event.path,
            source.width(),
            source.height()
        );

        session.current = Some(LoadedImage {
            path: event.path.clone(),
            source,
            handle,
            entity,
        });

        // Measurements are image-relative and do not carry across images
        store.clear();
        *gesture = MeasureGesture::Idle;

        reset_view.write(ResetViewRequest);
        record_opened.write(RecordOpenedImageRequest {
            path: event.path.clone(),
        });
        load_error.message = None;
    }
}

/// Rebuild the display texture when brightness/contrast change.
/// Runs only on actual changes (the adjustments UI writes settings only
/// when a slider moves).
pub fn refresh_display_texture(
    session: Res<ImageSession>,
    settings: Res<DisplaySettings>,
    mut images: ResMut<Assets<Image>>,
) {
    let Some(ref loaded) = session.current else {
        return;
    };

    images.insert(&loaded.handle, make_display_texture(&loaded.source, &settings));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_world_to_image_origin_is_image_center() {
        let image = world_to_image(Vec2::ZERO, 100, 60);
        assert_eq!(image, Vec2::new(50.0, 30.0));
    }

    #[test]
    fn test_world_to_image_top_left() {
        // Top-left corner of the sprite is image-space (0, 0)
        let image = world_to_image(Vec2::new(-50.0, 30.0), 100, 60);
        assert_eq!(image, Vec2::new(0.0, 0.0));
    }

    #[test]
    fn test_world_to_image_y_axis_flips() {
        // Below world center means further down the image
        let upper = world_to_image(Vec2::new(0.0, 10.0), 100, 60);
        let lower = world_to_image(Vec2::new(0.0, -10.0), 100, 60);
        assert!(lower.y > upper.y);
    }

    #[test]
    fn test_image_world_round_trip() {
        let original = Vec2::new(12.5, 47.25);
        let back = world_to_image(image_to_world(original, 640, 480), 640, 480);
        assert!((back - original).length() < 1e-4);
    }

    #[test]
    fn test_supported_extensions() {
        assert!(is_supported_extension(Path::new("scan.png")));
        assert!(is_supported_extension(Path::new("scan.JPG")));
        assert!(is_supported_extension(Path::new("scan.jpeg")));
        assert!(is_supported_extension(Path::new("series.dcm")));
        assert!(!is_supported_extension(Path::new("notes.txt")));
        assert!(!is_supported_extension(Path::new("noextension")));
    }

    #[test]
    fn test_display_settings_default_is_neutral() {
        let settings = DisplaySettings::default();
        assert_eq!(settings.brightness, FILTER_NEUTRAL);
        assert_eq!(settings.contrast, FILTER_NEUTRAL);
    }
}
