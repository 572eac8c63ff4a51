//! Rendering for committed measurements and the live preview.
//!
//! Shapes are immediate-mode gizmos and labels are screen-anchored egui
//! areas, so everything is redrawn in full every frame; window resizes and
//! camera changes need no special handling.

use bevy::gizmos::config::{GizmoConfigGroup, GizmoConfigStore};
use bevy::gizmos::prelude::*;
use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::constants::{MEASUREMENT_LABEL_SIZE, MEASUREMENT_STROKE_WIDTH};
use crate::theme;

use super::super::params::CameraParams;
use super::super::session::ImageSession;
use super::super::tools::CurrentTool;
use super::geometry::{distance, midpoint};
use super::measurement::{length_label, radius_label, Measurement};
use super::state::MeasureGesture;
use super::MeasurementStore;

/// Gizmo group for the measurement overlay (fixed 2px stroke)
#[derive(Default, Reflect, GizmoConfigGroup)]
pub struct MeasurementGizmoGroup;

pub fn configure_measurement_gizmos(mut config_store: ResMut<GizmoConfigStore>) {
    let (config, _) = config_store.config_mut::<MeasurementGizmoGroup>();
    config.line.width = MEASUREMENT_STROKE_WIDTH;
}

/// Label text with its image-space anchor. Angle legs each carry their own
/// length label in addition to the angle at the vertex, mirroring how the
/// legs are drawn as rulers.
pub fn label_entries(measurement: &Measurement) -> Vec<(Vec2, String)> {
    match *measurement {
        Measurement::Ruler { start, end } => {
            vec![(
                midpoint(start, end) + Vec2::new(5.0, -5.0),
                length_label(distance(start, end)),
            )]
        }
        Measurement::Circle { center, edge } => {
            let radius = distance(center, edge);
            vec![(
                center + Vec2::new(radius + 5.0, 0.0),
                radius_label(radius),
            )]
        }
        Measurement::Angle { a, vertex, b } => {
            let mut entries = vec![
                (
                    midpoint(a, vertex) + Vec2::new(5.0, -5.0),
                    length_label(distance(a, vertex)),
                ),
                (
                    midpoint(vertex, b) + Vec2::new(5.0, -5.0),
                    length_label(distance(vertex, b)),
                ),
            ];
            if let Some(label) = measurement.primary_label() {
                entries.push((vertex + Vec2::new(10.0, 10.0), label));
            }
            entries
        }
    }
}

fn draw_measurement(
    gizmos: &mut Gizmos<MeasurementGizmoGroup>,
    loaded: &super::super::session::LoadedImage,
    measurement: &Measurement,
    color: Color,
) {
    match *measurement {
        Measurement::Ruler { start, end } => {
            gizmos.line_2d(loaded.image_to_world(start), loaded.image_to_world(end), color);
        }
        Measurement::Circle { center, edge } => {
            gizmos.circle_2d(
                Isometry2d::from_translation(loaded.image_to_world(center)),
                distance(center, edge),
                color,
            );
        }
        Measurement::Angle { a, vertex, b } => {
            let vertex_world = loaded.image_to_world(vertex);
            gizmos.line_2d(loaded.image_to_world(a), vertex_world, color);
            gizmos.line_2d(vertex_world, loaded.image_to_world(b), color);
        }
    }
}

pub fn render_measurements(
    mut gizmos: Gizmos<MeasurementGizmoGroup>,
    store: Res<MeasurementStore>,
    session: Res<ImageSession>,
) {
    let Some(ref loaded) = session.current else {
        return;
    };

    for measurement in store.iter() {
        draw_measurement(&mut gizmos, loaded, measurement, theme::MEASUREMENT_COLOR);
    }
}

pub fn render_preview(
    mut gizmos: Gizmos<MeasurementGizmoGroup>,
    gesture: Res<MeasureGesture>,
    current_tool: Res<CurrentTool>,
    session: Res<ImageSession>,
    camera: CameraParams,
) {
    let Some(ref loaded) = session.current else {
        return;
    };

    let Some(world_pos) = camera.cursor_world_pos() else {
        return;
    };
    let cursor = loaded.world_to_image(world_pos);

    let Some(preview) = gesture.preview(current_tool.tool, cursor) else {
        return;
    };

    let preview_color = theme::MEASUREMENT_COLOR.with_alpha(theme::PREVIEW_ALPHA);
    draw_measurement(&mut gizmos, loaded, &preview, preview_color);
}

/// Render numeric labels for committed measurements and the preview as
/// screen-anchored egui areas.
pub fn measurement_labels(
    mut contexts: EguiContexts,
    camera: CameraParams,
    session: Res<ImageSession>,
    store: Res<MeasurementStore>,
    gesture: Res<MeasureGesture>,
    current_tool: Res<CurrentTool>,
) {
    let Some(ref loaded) = session.current else {
        return;
    };

    let mut to_label: Vec<(Vec2, String)> = Vec::new();
    for measurement in store.iter() {
        to_label.extend(label_entries(measurement));
    }

    let cursor = camera
        .cursor_world_pos()
        .map(|world| loaded.world_to_image(world));
    if let Some(cursor) = cursor
        && let Some(preview) = gesture.preview(current_tool.tool, cursor)
    {
        to_label.extend(label_entries(&preview));
    }

    if to_label.is_empty() {
        return;
    }

    // Resolve screen positions before borrowing the egui context
    let mut placed: Vec<(Vec2, String)> = Vec::new();
    for (anchor, text) in to_label {
        let world = loaded.image_to_world(anchor);
        if let Some(screen_pos) = camera.world_to_viewport(world) {
            placed.push((screen_pos, text));
        }
    }

    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    for (index, (screen_pos, text)) in placed.iter().enumerate() {
        egui::Area::new(egui::Id::new(("measurement_label", index)))
            .fixed_pos(egui::pos2(screen_pos.x, screen_pos.y))
            .pivot(egui::Align2::LEFT_CENTER)
            .interactable(false)
            .show(ctx, |ui| {
                ui.label(
                    egui::RichText::new(text)
                        .color(theme::MEASUREMENT_LABEL_COLOR)
                        .size(MEASUREMENT_LABEL_SIZE),
                );
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ruler_label_sits_off_the_midpoint() {
        let m = Measurement::Ruler {
            start: Vec2::new(0.0, 0.0),
            end: Vec2::new(10.0, 0.0),
        };
        let entries = label_entries(&m);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].0, Vec2::new(10.0, -5.0));
        assert_eq!(entries[0].1, "10.0px");
    }

    #[test]
    fn test_circle_label_sits_right_of_the_edge() {
        let m = Measurement::Circle {
            center: Vec2::new(10.0, 10.0),
            edge: Vec2::new(10.0, 13.0),
        };
        let entries = label_entries(&m);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].0, Vec2::new(18.0, 10.0));
        assert_eq!(entries[0].1, "r: 3.0px");
    }

    #[test]
    fn test_angle_labels_both_legs_and_vertex() {
        let m = Measurement::Angle {
            a: Vec2::new(0.0, 0.0),
            vertex: Vec2::new(4.0, 0.0),
            b: Vec2::new(4.0, 3.0),
        };
        let entries = label_entries(&m);
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].1, "4.0px");
        assert_eq!(entries[1].1, "3.0px");
        assert_eq!(entries[2].1, "90.0°");
        assert_eq!(entries[2].0, Vec2::new(14.0, 10.0));
    }

    #[test]
    fn test_degenerate_angle_skips_the_angle_label() {
        let v = Vec2::new(4.0, 0.0);
        let m = Measurement::Angle {
            a: v,
            vertex: v,
            b: Vec2::new(4.0, 3.0),
        };
        // Leg labels remain; the angle value is undefined
        let entries = label_entries(&m);
        assert_eq!(entries.len(), 2);
        assert!(entries.iter().all(|(_, text)| !text.contains('°')));
    }
}
