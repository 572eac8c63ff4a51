//! Measurement system for annotating the open image.
//!
//! Three tools commit measurements: ruler (segment + length), circle
//! (center/edge + radius), and angle (three points + degrees). Committed
//! measurements live in an append-only store for the current image session
//! and are redrawn in full every frame.
//!
//! ## Module Structure
//!
//! - [`geometry`] - Pure distance/midpoint/angle helpers
//! - [`measurement`] - [`Measurement`] variants, label formatting, [`MeasurementStore`]
//! - [`state`] - [`MeasureGesture`] state machine (drag, vertex click, drag)
//! - [`measure_tool`] - Pointer input driving the state machine
//! - [`rendering`] - Gizmo shapes and egui label overlay

pub mod geometry;
mod measure_tool;
mod measurement;
mod rendering;
mod state;

pub use measure_tool::handle_measure;
pub use measurement::{Measurement, MeasurementStore};
pub use rendering::{
    configure_measurement_gizmos, measurement_labels, render_measurements, render_preview,
    MeasurementGizmoGroup,
};
pub use state::MeasureGesture;
