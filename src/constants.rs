//! Centralized constants used across the application.
//!
//! This module contains magic numbers and configuration values that are used
//! in multiple places or would benefit from being named constants.

/// Default window width in pixels
pub const DEFAULT_WINDOW_WIDTH: f32 = 1400.0;

/// Default window height in pixels
pub const DEFAULT_WINDOW_HEIGHT: f32 = 900.0;

/// Maximum number of recently opened images to remember in config
pub const MAX_RECENT_IMAGES: usize = 5;

/// Stroke width for measurement overlays, in pixels
pub const MEASUREMENT_STROKE_WIDTH: f32 = 2.0;

/// Font size for measurement labels, in points
pub const MEASUREMENT_LABEL_SIZE: f32 = 14.0;

/// Brightness/contrast slider range (percent); 100 is the neutral value
pub const FILTER_MIN: u32 = 0;
pub const FILTER_MAX: u32 = 200;
pub const FILTER_NEUTRAL: u32 = 100;

/// Zoom scale limits for the viewer camera
pub const MIN_ZOOM_SCALE: f32 = 0.1;
pub const MAX_ZOOM_SCALE: f32 = 10.0;

/// Step applied by the zoom in/out buttons
pub const ZOOM_BUTTON_STEP: f32 = 0.2;

/// File extensions offered by the open-image picker.
/// `.dcm` is accepted for selection but decoding is not implemented;
/// such files surface a load error.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "dcm"];
