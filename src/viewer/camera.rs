use bevy::input::mouse::{MouseScrollUnit, MouseWheel};
use bevy::prelude::*;
use bevy_egui::EguiContexts;

use crate::constants::{MAX_ZOOM_SCALE, MIN_ZOOM_SCALE, ZOOM_BUTTON_STEP};

use super::tools::{CurrentTool, ViewerTool};

#[derive(Component)]
pub struct ViewerCamera;

/// Current zoom factor of the viewer. Scale 1.0 shows the image at a
/// 1:1 pixel mapping; larger values zoom out.
#[derive(Component)]
pub struct CameraZoom {
    pub scale: f32,
}

impl Default for CameraZoom {
    fn default() -> Self {
        Self { scale: 1.0 }
    }
}

/// Message to zoom in one step (from the zoom controls)
#[derive(Message)]
pub struct ZoomInRequest;

/// Message to zoom out one step (from the zoom controls)
#[derive(Message)]
pub struct ZoomOutRequest;

/// Message to reset zoom and recenter the image
#[derive(Message)]
pub struct ResetViewRequest;

pub fn spawn_camera(mut commands: Commands) {
    commands.spawn((
        Camera2d,
        ViewerCamera,
        CameraZoom::default(),
        Transform::from_translation(Vec3::new(0.0, 0.0, 1000.0)),
    ));
}

/// Left-drag pans the view, but only while the Pan tool is active so
/// measuring gestures are not also interpreted as pans.
pub fn camera_pan(
    mouse_button: Res<ButtonInput<MouseButton>>,
    current_tool: Res<CurrentTool>,
    mut mouse_motion: MessageReader<bevy::input::mouse::MouseMotion>,
    mut camera_query: Query<(&mut Transform, &CameraZoom), With<ViewerCamera>>,
    mut contexts: EguiContexts,
) {
    if current_tool.tool != ViewerTool::Pan || !mouse_button.pressed(MouseButton::Left) {
        mouse_motion.clear();
        return;
    }

    if let Ok(ctx) = contexts.ctx_mut()
        && ctx.is_pointer_over_area()
    {
        mouse_motion.clear();
        return;
    }

    let Ok((mut transform, zoom)) = camera_query.single_mut() else {
        return;
    };

    for event in mouse_motion.read() {
        let delta = event.delta * zoom.scale;
        transform.translation.x -= delta.x;
        transform.translation.y += delta.y;
    }
}

/// Scroll-wheel zoom, active only with the Pan tool (the original viewer
/// disables its transform widget entirely while a measuring tool is active).
pub fn camera_zoom(
    mut scroll_events: MessageReader<MouseWheel>,
    current_tool: Res<CurrentTool>,
    mut camera_query: Query<&mut CameraZoom, With<ViewerCamera>>,
) {
    if current_tool.tool != ViewerTool::Pan {
        scroll_events.clear();
        return;
    }

    let Ok(mut zoom) = camera_query.single_mut() else {
        return;
    };

    for event in scroll_events.read() {
        let scroll_amount = match event.unit {
            MouseScrollUnit::Line => event.y * 0.1,
            MouseScrollUnit::Pixel => event.y * 0.001,
        };

        zoom.scale = (zoom.scale - scroll_amount).clamp(MIN_ZOOM_SCALE, MAX_ZOOM_SCALE);
    }
}

/// The zoom buttons work regardless of the active tool.
pub fn handle_zoom_buttons(
    mut zoom_in: MessageReader<ZoomInRequest>,
    mut zoom_out: MessageReader<ZoomOutRequest>,
    mut camera_query: Query<&mut CameraZoom, With<ViewerCamera>>,
) {
    let Ok(mut zoom) = camera_query.single_mut() else {
        return;
    };

    for _ in zoom_in.read() {
        zoom.scale = (zoom.scale - ZOOM_BUTTON_STEP).clamp(MIN_ZOOM_SCALE, MAX_ZOOM_SCALE);
    }
    for _ in zoom_out.read() {
        zoom.scale = (zoom.scale + ZOOM_BUTTON_STEP).clamp(MIN_ZOOM_SCALE, MAX_ZOOM_SCALE);
    }
}

pub fn handle_reset_view(
    mut events: MessageReader<ResetViewRequest>,
    mut camera_query: Query<(&mut Transform, &mut CameraZoom), With<ViewerCamera>>,
) {
    let mut requested = false;
    for _ in events.read() {
        requested = true;
    }
    if !requested {
        return;
    }

    let Ok((mut transform, mut zoom)) = camera_query.single_mut() else {
        return;
    };

    zoom.scale = 1.0;
    transform.translation.x = 0.0;
    transform.translation.y = 0.0;
}

pub fn apply_camera_zoom(
    mut camera_query: Query<(&CameraZoom, &mut Projection), (With<ViewerCamera>, Changed<CameraZoom>)>,
) {
    for (zoom, mut projection) in camera_query.iter_mut() {
        if let Projection::Orthographic(ref mut ortho) = *projection {
            ortho.scale = zoom.scale;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camera_zoom_default_is_one() {
        assert_eq!(CameraZoom::default().scale, 1.0);
    }

    #[test]
    fn test_zoom_step_stays_within_limits() {
        let mut scale: f32 = MIN_ZOOM_SCALE;
        scale = (scale - ZOOM_BUTTON_STEP).clamp(MIN_ZOOM_SCALE, MAX_ZOOM_SCALE);
        assert_eq!(scale, MIN_ZOOM_SCALE);

        let mut scale: f32 = MAX_ZOOM_SCALE;
        scale = (scale + ZOOM_BUTTON_STEP).clamp(MIN_ZOOM_SCALE, MAX_ZOOM_SCALE);
        assert_eq!(scale, MAX_ZOOM_SCALE);
    }
}
