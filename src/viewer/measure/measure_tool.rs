//! Pointer input handling for the measuring tools.

use bevy::prelude::*;
use bevy_egui::EguiContexts;

use crate::ui::DialogState;

use super::super::params::{is_cursor_over_ui, CameraParams};
use super::super::session::ImageSession;
use super::super::tools::{CurrentTool, ViewerTool};
use super::measurement::MeasurementStore;
use super::state::MeasureGesture;

/// Drives the gesture state machine from pointer input.
///
/// Cursor positions are converted to image space through the camera, so the
/// stored points are independent of the current zoom and window size. With
/// no image open the system is a silent no-op.
pub fn handle_measure(
    mouse_button: Res<ButtonInput<MouseButton>>,
    current_tool: Res<CurrentTool>,
    mut gesture: ResMut<MeasureGesture>,
    mut store: ResMut<MeasurementStore>,
    mut previous_tool: Local<Option<ViewerTool>>,
    session: Res<ImageSession>,
    dialog_state: Res<DialogState>,
    camera: CameraParams,
    mut contexts: EguiContexts,
) {
    // A tool switch discards any in-progress gesture without committing
    if *previous_tool != Some(current_tool.tool) {
        *previous_tool = Some(current_tool.tool);
        if *gesture != MeasureGesture::Idle {
            *gesture = gesture.cancel();
        }
    }

    if !current_tool.tool.is_measure_tool() {
        return;
    }

    let Some(ref loaded) = session.current else {
        return;
    };

    if dialog_state.any_modal_open {
        return;
    }

    if is_cursor_over_ui(&mut contexts) {
        return;
    }

    // Right click cancels
    if mouse_button.just_pressed(MouseButton::Right) {
        *gesture = gesture.cancel();
        return;
    }

    let Some(world_pos) = camera.cursor_world_pos() else {
        return;
    };
    let image_pos = loaded.world_to_image(world_pos);

    if mouse_button.just_pressed(MouseButton::Left) {
        *gesture = gesture.on_press(current_tool.tool, image_pos);
    } else if mouse_button.just_released(MouseButton::Left) {
        let (next, committed) = gesture.on_release(current_tool.tool, image_pos);
        *gesture = next;
        if let Some(measurement) = committed {
            store.commit(measurement);
        }
    }
}
