use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::viewer::{ImageSession, ResetViewRequest, ZoomInRequest, ZoomOutRequest};

/// Floating zoom controls in the bottom-right corner of the viewport.
/// These work regardless of the active tool.
pub fn zoom_controls_ui(
    mut contexts: EguiContexts,
    session: Res<ImageSession>,
    mut zoom_in: MessageWriter<ZoomInRequest>,
    mut zoom_out: MessageWriter<ZoomOutRequest>,
    mut reset_view: MessageWriter<ResetViewRequest>,
) -> Result {
    if session.current.is_none() {
        return Ok(());
    }

    egui::Area::new(egui::Id::new("zoom_controls"))
        .anchor(egui::Align2::RIGHT_BOTTOM, egui::vec2(-16.0, -16.0))
        .show(contexts.ctx_mut()?, |ui| {
            ui.horizontal(|ui| {
                ui.spacing_mut().item_spacing.x = 4.0;

                if ui
                    .add(egui::Button::new("+").min_size(egui::vec2(28.0, 28.0)))
                    .on_hover_text("Zoom in")
                    .clicked()
                {
                    zoom_in.write(ZoomInRequest);
                }
                if ui
                    .add(egui::Button::new("−").min_size(egui::vec2(28.0, 28.0)))
                    .on_hover_text("Zoom out")
                    .clicked()
                {
                    zoom_out.write(ZoomOutRequest);
                }
                if ui
                    .add(egui::Button::new("Fit").min_size(egui::vec2(28.0, 28.0)))
                    .on_hover_text("Reset view")
                    .clicked()
                {
                    reset_view.write(ResetViewRequest);
                }
            });
        });
    Ok(())
}
