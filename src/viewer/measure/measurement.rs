//! Committed measurement types and the per-session store.

use bevy::prelude::*;

use super::geometry::{angle_degrees, distance};

/// A committed annotation. Points are image-space coordinates and are
/// immutable once the measurement is created. The point count is enforced
/// by construction: two for ruler and circle, three for angle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Measurement {
    /// Straight segment from `start` to `end`
    Ruler { start: Vec2, end: Vec2 },
    /// Circle centered at `center`, radius defined by `edge`
    Circle { center: Vec2, edge: Vec2 },
    /// Angle at `vertex` between rays toward `a` and `b`
    Angle { a: Vec2, vertex: Vec2, b: Vec2 },
}

impl Measurement {
    /// Primary numeric label: length, radius, or angle.
    ///
    /// `None` only for a degenerate angle (zero-length ray), which has no
    /// defined value; its legs are still drawn.
    pub fn primary_label(&self) -> Option<String> {
        match *self {
            Measurement::Ruler { start, end } => Some(length_label(distance(start, end))),
            Measurement::Circle { center, edge } => Some(radius_label(distance(center, edge))),
            Measurement::Angle { a, vertex, b } => {
                angle_degrees(a, vertex, b).map(angle_label)
            }
        }
    }
}

pub fn length_label(length: f32) -> String {
    format!("{:.1}px", length)
}

pub fn radius_label(radius: f32) -> String {
    format!("r: {:.1}px", radius)
}

pub fn angle_label(degrees: f32) -> String {
    format!("{:.1}°", degrees)
}

/// Ordered committed measurements for the current image session.
/// Append-only while an image is open; cleared when a new image loads.
#[derive(Resource, Default)]
pub struct MeasurementStore {
    committed: Vec<Measurement>,
}

impl MeasurementStore {
    pub fn commit(&mut self, measurement: Measurement) {
        debug!("Committed measurement: {:?}", measurement);
        self.committed.push(measurement);
    }

    pub fn clear(&mut self) {
        self.committed.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &Measurement> {
        self.committed.iter()
    }

    pub fn len(&self) -> usize {
        self.committed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.committed.is_empty()
    }
}
