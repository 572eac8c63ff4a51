use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::theme;
use crate::viewer::measure::MeasurementStore;
use crate::viewer::{CurrentTool, ImageSession, OpenImageRequest, ViewerTool};

use super::file_dialog::{open_image_via_picker, InvalidFileDialog};

/// Main toolbar showing the tool buttons and the open-file control
pub fn toolbar_ui(
    mut contexts: EguiContexts,
    mut current_tool: ResMut<CurrentTool>,
    session: Res<ImageSession>,
    store: Res<MeasurementStore>,
    mut open_events: MessageWriter<OpenImageRequest>,
    mut invalid_file: ResMut<InvalidFileDialog>,
) -> Result {
    egui::TopBottomPanel::top("main_toolbar")
        .frame(
            egui::Frame::side_top_panel(&contexts.ctx_mut()?.style())
                .inner_margin(egui::Margin::symmetric(12, 8)),
        )
        .show(contexts.ctx_mut()?, |ui| {
            ui.horizontal(|ui| {
                ui.spacing_mut().item_spacing.x = 4.0;

                ui.label(
                    egui::RichText::new("Medscan")
                        .color(theme::ui::ACCENT)
                        .size(16.0)
                        .strong(),
                );

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                // Tool buttons with keyboard shortcuts
                for tool in ViewerTool::all() {
                    let selected = current_tool.tool == *tool;
                    let button_text = tool_button_label(tool);

                    let button = egui::Button::new(
                        egui::RichText::new(button_text).size(14.0).strong(),
                    )
                    .min_size(egui::vec2(0.0, 28.0))
                    .selected(selected);

                    let response = ui.add(button);
                    if response.clicked() {
                        current_tool.tool = *tool;
                    }
                    response.on_hover_text(tool.display_name());
                }

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                if ui
                    .add(egui::Button::new("Open…").min_size(egui::vec2(0.0, 28.0)))
                    .clicked()
                {
                    open_image_via_picker(&mut open_events, &mut invalid_file);
                }

                // Right-aligned session info
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if let Some(ref loaded) = session.current {
                        ui.colored_label(
                            theme::ui::HINT_TEXT,
                            format!("{} measurement(s)", store.len()),
                        );
                        ui.add_space(8.0);
                        ui.colored_label(
                            theme::ui::LABEL_TEXT,
                            format!(
                                "{} ({}x{})",
                                loaded.file_name(),
                                loaded.width(),
                                loaded.height()
                            ),
                        );
                    }
                });
            });
        });
    Ok(())
}

/// Get the button label for a tool (with keyboard shortcut)
fn tool_button_label(tool: &ViewerTool) -> &'static str {
    match tool {
        ViewerTool::Pan => "Pan [P]",
        ViewerTool::Ruler => "Ruler [R]",
        ViewerTool::Circle => "Circle [C]",
        ViewerTool::Angle => "Angle [A]",
    }
}
