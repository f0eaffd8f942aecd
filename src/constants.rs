//! Sizing, color, and calibration constants for the slider.

use floem::peniko::Color;

/// Thumb radius on the range slider
pub const THUMB_RADIUS: f64 = 7.0;

/// Track thickness across the orientation axis
pub const TRACK_THICKNESS: f64 = 4.0;

/// Tick mark length
pub const TICK_LENGTH: f64 = 4.0;

/// Gap between the thumb's outer edge and a tick mark
pub const TICK_GAP: f64 = 1.0;

/// Size of the range slider across its orientation axis (thumb plus tick row)
pub const SLIDER_THICKNESS: f32 = 2.0 * THUMB_RADIUS as f32 + (TICK_GAP + TICK_LENGTH) as f32;

/// Minimum track length along the orientation axis, keeps labels readable
pub const MIN_TRACK_LENGTH: f32 = 300.0;

/// Starting margin on every side, gives some space to print labels
pub const INITIAL_MARGIN: f64 = 10.0;

/// Horizontal gap kept between a vertical slider's labels and the widget's left edge
pub const VERTICAL_LABEL_GAP: f64 = 2.0;

/// Upper bound on generated ticks; each one gets a laid-out label
pub const MAX_TICKS: usize = 10_000;

/// Label font size
pub const LABEL_FONT: f32 = 11.0;

pub const LABEL_COLOR: Color = Color::rgb8(90, 90, 90);
pub const TRACK_COLOR: Color = Color::rgb8(210, 210, 210);
pub const SELECTION_COLOR: Color = Color::rgb8(59, 130, 246);
pub const TICK_COLOR: Color = Color::rgb8(150, 150, 150);
