use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};
use std::path::PathBuf;

use crate::config::{AppConfig, ConfigResetNotification};
use crate::constants::SUPPORTED_EXTENSIONS;
use crate::theme;
use crate::viewer::session::is_supported_extension;
use crate::viewer::{ImageSession, LoadErrorDialog, OpenImageRequest};

/// Resource for the invalid-file-type rejection dialog
#[derive(Resource, Default)]
pub struct InvalidFileDialog {
    pub show: bool,
    pub path: Option<PathBuf>,
}

/// Show the native picker and either request a load or raise the
/// rejection dialog for files outside the supported extensions.
pub fn open_image_via_picker(
    open_events: &mut MessageWriter<OpenImageRequest>,
    invalid_file: &mut InvalidFileDialog,
) {
    let Some(path) = rfd::FileDialog::new()
        .add_filter("Images", SUPPORTED_EXTENSIONS)
        .pick_file()
    else {
        return;
    };

    if is_supported_extension(&path) {
        open_events.write(OpenImageRequest { path });
    } else {
        info!("Rejected non-image file {:?}", path);
        invalid_file.show = true;
        invalid_file.path = Some(path);
    }
}

/// Welcome screen shown while no image is open
pub fn welcome_screen_ui(
    mut contexts: EguiContexts,
    session: Res<ImageSession>,
    config: Res<AppConfig>,
    mut open_events: MessageWriter<OpenImageRequest>,
    mut invalid_file: ResMut<InvalidFileDialog>,
) -> Result {
    if session.current.is_some() {
        return Ok(());
    }

    egui::CentralPanel::default().show(contexts.ctx_mut()?, |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(ui.available_height() * 0.25);

            ui.label(
                egui::RichText::new("Welcome to Medscan")
                    .color(theme::ui::ACCENT)
                    .size(28.0)
                    .strong(),
            );
            ui.add_space(4.0);
            ui.label(
                egui::RichText::new("Open a medical image to begin analysis and annotation")
                    .color(theme::ui::LABEL_TEXT),
            );

            ui.add_space(16.0);
            if ui
                .add(egui::Button::new(egui::RichText::new("Open Image…").size(16.0))
                    .min_size(egui::vec2(160.0, 36.0)))
                .clicked()
            {
                open_image_via_picker(&mut open_events, &mut invalid_file);
            }

            ui.add_space(8.0);
            ui.label(
                egui::RichText::new("Supports PNG and JPEG. DICOM (.dcm) files can be selected but not decoded.")
                    .color(theme::ui::HINT_TEXT)
                    .size(11.0),
            );

            if !config.data.recent_images.is_empty() {
                ui.add_space(24.0);
                ui.label(egui::RichText::new("Recent").color(theme::ui::LABEL_TEXT).strong());
                ui.add_space(4.0);

                for path in &config.data.recent_images {
                    let name = path
                        .file_name()
                        .map(|n| n.to_string_lossy().into_owned())
                        .unwrap_or_else(|| path.to_string_lossy().into_owned());
                    if ui.link(name).on_hover_text(path.to_string_lossy()).clicked() {
                        open_events.write(OpenImageRequest { path: path.clone() });
                    }
                }
            }
        });
    });
    Ok(())
}

/// Rejection dialog for files that are not a supported image type
pub fn invalid_file_dialog_ui(
    mut contexts: EguiContexts,
    mut invalid_file: ResMut<InvalidFileDialog>,
) -> Result {
    if !invalid_file.show {
        return Ok(());
    }

    egui::Window::new("Unsupported File")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(contexts.ctx_mut()?, |ui| {
            ui.label("Please select a valid image file.");
            if let Some(ref path) = invalid_file.path {
                ui.add_space(5.0);
                ui.colored_label(theme::ui::HINT_TEXT, path.to_string_lossy());
            }
            ui.add_space(8.0);
            if ui.button("OK").clicked() {
                invalid_file.show = false;
                invalid_file.path = None;
            }
        });
    Ok(())
}

/// Load error dialog (decode failures, including `.dcm` files)
pub fn load_error_dialog_ui(
    mut contexts: EguiContexts,
    mut load_error: ResMut<LoadErrorDialog>,
) -> Result {
    let Some(message) = load_error.message.clone() else {
        return Ok(());
    };

    egui::Window::new("Load Error")
        .collapsible(false)
        .resizable(true)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(contexts.ctx_mut()?, |ui| {
            egui::ScrollArea::vertical().max_height(200.0).show(ui, |ui| {
                ui.colored_label(theme::ui::ERROR_TEXT, &message);
            });
            ui.add_space(8.0);
            if ui.button("OK").clicked() {
                load_error.message = None;
            }
        });
    Ok(())
}

/// Notification shown when the config file was reset to defaults
pub fn config_reset_notification_ui(
    mut contexts: EguiContexts,
    mut notification: ResMut<ConfigResetNotification>,
) -> Result {
    if !notification.show {
        return Ok(());
    }

    egui::Window::new("Settings Reset")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(contexts.ctx_mut()?, |ui| {
            ui.label("Settings could not be read and were reset to defaults.");
            if let Some(ref reason) = notification.reason {
                ui.add_space(5.0);
                ui.colored_label(theme::ui::HINT_TEXT, reason);
            }
            ui.add_space(8.0);
            if ui.button("OK").clicked() {
                notification.show = false;
                notification.reason = None;
            }
        });
    Ok(())
}
