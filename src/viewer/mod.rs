pub mod camera;
pub mod filters;
pub mod measure;
pub mod params;
pub mod session;
pub mod tools;

pub use camera::{ResetViewRequest, ViewerCamera, ZoomInRequest, ZoomOutRequest};
pub use session::{DisplaySettings, ImageSession, LoadErrorDialog, OpenImageRequest};
pub use tools::{CurrentTool, ViewerTool};

use bevy::prelude::*;
use bevy_egui::EguiPrimaryContextPass;

pub struct ViewerPlugin;

impl Plugin for ViewerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<tools::CurrentTool>()
            .init_resource::<session::ImageSession>()
            .init_resource::<session::DisplaySettings>()
            .init_resource::<session::LoadErrorDialog>()
            .init_resource::<measure::MeasurementStore>()
            .init_resource::<measure::MeasureGesture>()
            .add_message::<session::OpenImageRequest>()
            .add_message::<camera::ZoomInRequest>()
            .add_message::<camera::ZoomOutRequest>()
            .add_message::<camera::ResetViewRequest>()
            .init_gizmo_group::<measure::MeasurementGizmoGroup>()
            .add_systems(
                Startup,
                (camera::spawn_camera, measure::configure_measurement_gizmos),
            )
            .add_systems(
                Update,
                (
                    camera::camera_pan,
                    camera::camera_zoom,
                    camera::handle_zoom_buttons,
                    camera::handle_reset_view,
                    camera::apply_camera_zoom,
                    tools::handle_tool_shortcuts,
                    tools::update_cursor_icon,
                ),
            )
            .add_systems(
                Update,
                (
                    session::load_image_system.run_if(on_message::<session::OpenImageRequest>),
                    session::refresh_display_texture
                        .run_if(resource_changed::<session::DisplaySettings>),
                    measure::handle_measure,
                    measure::render_measurements,
                    measure::render_preview,
                ),
            )
            .add_systems(EguiPrimaryContextPass, measure::measurement_labels);
    }
}
