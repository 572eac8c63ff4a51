use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::constants::{FILTER_MAX, FILTER_MIN, FILTER_NEUTRAL};
use crate::theme;
use crate::viewer::{DisplaySettings, ImageSession};

/// Right-side panel with brightness/contrast sliders for the open image.
///
/// Settings are written back only when a slider actually moved, so the
/// display texture is not rebuilt every frame.
pub fn adjustments_panel_ui(
    mut contexts: EguiContexts,
    session: Res<ImageSession>,
    mut settings: ResMut<DisplaySettings>,
) -> Result {
    if session.current.is_none() {
        return Ok(());
    }

    egui::SidePanel::right("adjustments_panel")
        .resizable(false)
        .default_width(220.0)
        .frame(
            egui::Frame::side_top_panel(&contexts.ctx_mut()?.style())
                .inner_margin(egui::Margin::symmetric(12, 12))
                .fill(theme::ui::PANEL_BACKGROUND),
        )
        .show(contexts.ctx_mut()?, |ui| {
            ui.label(egui::RichText::new("Adjustments").color(theme::ui::LABEL_TEXT).strong());
            ui.add_space(8.0);

            let mut brightness = settings.brightness;
            let mut contrast = settings.contrast;

            ui.label("Brightness");
            ui.add(egui::Slider::new(&mut brightness, FILTER_MIN..=FILTER_MAX).suffix("%"));

            ui.add_space(6.0);
            ui.label("Contrast");
            ui.add(egui::Slider::new(&mut contrast, FILTER_MIN..=FILTER_MAX).suffix("%"));

            ui.add_space(8.0);
            if ui.button("Reset").clicked() {
                brightness = FILTER_NEUTRAL;
                contrast = FILTER_NEUTRAL;
            }

            // Only dirty the resource on an actual change
            if brightness != settings.brightness {
                settings.brightness = brightness;
            }
            if contrast != settings.contrast {
                settings.contrast = contrast;
            }

            ui.add_space(12.0);
            ui.separator();
            ui.add_space(8.0);

            ui.label(
                egui::RichText::new("P/R/C/A: Switch tools\nRight click: Cancel gesture")
                    .color(theme::ui::HINT_TEXT)
                    .size(11.0),
            );
        });
    Ok(())
}
