mod adjustments;
pub mod file_dialog;
mod toolbar;
mod viewer_controls;

use bevy::prelude::*;
use bevy_egui::EguiPrimaryContextPass;

use crate::config::ConfigResetNotification;
use crate::viewer::LoadErrorDialog;

/// Resource that tracks whether any modal dialog is currently open.
/// Viewer input handlers should check this to avoid processing input
/// when the user is interacting with a dialog.
#[derive(Resource, Default)]
pub struct DialogState {
    /// True when any modal dialog is open that should block viewer input
    pub any_modal_open: bool,
}

/// System to aggregate all dialog open states into a single resource.
/// Runs in First schedule before input handlers.
fn update_dialog_state(
    invalid_file: Res<file_dialog::InvalidFileDialog>,
    load_error: Res<LoadErrorDialog>,
    config_reset: Res<ConfigResetNotification>,
    mut dialog_state: ResMut<DialogState>,
) {
    dialog_state.any_modal_open =
        invalid_file.show || load_error.message.is_some() || config_reset.show;
}

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DialogState>()
            .init_resource::<file_dialog::InvalidFileDialog>()
            // Panels must render before overlays; use chain() to enforce ordering
            .add_systems(
                EguiPrimaryContextPass,
                (
                    toolbar::toolbar_ui,
                    adjustments::adjustments_panel_ui,
                    viewer_controls::zoom_controls_ui,
                    file_dialog::welcome_screen_ui,
                )
                    .chain(),
            )
            .add_systems(
                EguiPrimaryContextPass,
                (
                    // Dialogs/overlays render last
                    file_dialog::invalid_file_dialog_ui,
                    file_dialog::load_error_dialog_ui,
                    file_dialog::config_reset_notification_ui,
                )
                    .after(file_dialog::welcome_screen_ui),
            )
            // Update dialog state at the start of each frame
            .add_systems(First, update_dialog_state);
    }
}
