//! Centralized color theme for the application.
//!
//! This module provides all colors used throughout the viewer UI and
//! measurement rendering. Modify values here to change the color scheme.

use bevy::prelude::Color;
use bevy_egui::egui;

// ============================================================================
// Measurement Colors
// ============================================================================

/// Accent blue used for all measurement strokes and labels (#3b82f6)
pub const MEASUREMENT_COLOR: Color = Color::srgb(0.231, 0.510, 0.965);

/// Same accent blue for egui label text
pub const MEASUREMENT_LABEL_COLOR: egui::Color32 = egui::Color32::from_rgb(59, 130, 246);

/// Preview strokes use the accent color at reduced opacity
pub const PREVIEW_ALPHA: f32 = 0.8;

// ============================================================================
// Viewer Colors
// ============================================================================

/// Background behind the displayed image (dark grey)
pub const VIEWER_BACKGROUND: Color = Color::srgb(0.07, 0.09, 0.11);

// ============================================================================
// UI Colors (egui)
// ============================================================================

pub mod ui {
    use bevy_egui::egui;

    /// Dark grey panel background (adjustments panel, toolbars)
    pub const PANEL_BACKGROUND: egui::Color32 = egui::Color32::from_rgb(31, 41, 55);

    /// Light grey for label text
    pub const LABEL_TEXT: egui::Color32 = egui::Color32::LIGHT_GRAY;

    /// Grey for help/hint text
    pub const HINT_TEXT: egui::Color32 = egui::Color32::GRAY;

    /// Red for error messages
    pub const ERROR_TEXT: egui::Color32 = egui::Color32::RED;

    /// Accent blue for headings and the active tool highlight
    pub const ACCENT: egui::Color32 = egui::Color32::from_rgb(59, 130, 246);
}

// ============================================================================
// Color Conversion Utilities
// ============================================================================

/// Convert a Bevy Color to egui Color32 (fully opaque)
pub fn bevy_to_egui_opaque(color: Color) -> egui::Color32 {
    let srgba = color.to_srgba();
    egui::Color32::from_rgba_unmultiplied(
        (srgba.red * 255.0) as u8,
        (srgba.green * 255.0) as u8,
        (srgba.blue * 255.0) as u8,
        255,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measurement_color_matches_label_color() {
        let c = bevy_to_egui_opaque(MEASUREMENT_COLOR);
        // Within one step of u8 quantization of #3b82f6
        assert!((c.r() as i32 - 59).abs() <= 1);
        assert!((c.g() as i32 - 130).abs() <= 1);
        assert!((c.b() as i32 - 246).abs() <= 1);
    }
}
