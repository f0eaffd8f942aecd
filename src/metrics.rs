//! Slider geometry queries: thumb length, usable track span, and the
//! value ↔ pixel mapping along the track.

use crate::constants;
use crate::level::Orientation;

/// Map `value` in `min..=max` to a pixel offset within `0..=span`.
///
/// Values outside the range are clamped to the track ends. A degenerate range
/// or an empty span maps everything to 0. With `upside_down` the maximum sits
/// at offset 0 (the top of a vertical track).
pub fn position_from_value(min: i32, max: i32, value: i32, span: f64, upside_down: bool) -> f64 {
    if span <= 0.0 || max <= min {
        return 0.0;
    }
    let range = max as f64 - min as f64;
    let p = (value.clamp(min, max) as f64 - min as f64) / range * span;
    if upside_down {
        span - p
    } else {
        p
    }
}

/// Inverse of [`position_from_value`], rounded to the nearest integer value.
pub fn value_from_position(min: i32, max: i32, pos: f64, span: f64, upside_down: bool) -> i32 {
    if span <= 0.0 || max <= min {
        return min;
    }
    let pos = pos.clamp(0.0, span);
    let pos = if upside_down { span - pos } else { pos };
    let range = max as f64 - min as f64;
    let value = min as f64 + (pos / span * range).round();
    value.clamp(min as f64, max as f64) as i32
}

/// Style-metric queries the label overlay needs from a slider.
pub trait SliderMetrics {
    fn minimum(&self) -> i32;
    fn maximum(&self) -> i32;
    fn orientation(&self) -> Orientation;

    /// Length of the draggable thumb along the orientation axis.
    fn handle_length(&self) -> f64;

    /// Pixel span over which values map linearly to positions.
    fn available_length(&self) -> f64;

    /// Whether the maximum sits at the start of the track.
    fn upside_down(&self) -> bool {
        self.orientation() == Orientation::Vertical
    }

    /// Leading-edge offset of the thumb when it sits at `value`.
    fn position_from_value(&self, value: i32) -> f64 {
        position_from_value(
            self.minimum(),
            self.maximum(),
            value,
            self.available_length(),
            self.upside_down(),
        )
    }

    fn value_from_position(&self, pos: f64) -> i32 {
        value_from_position(
            self.minimum(),
            self.maximum(),
            pos,
            self.available_length(),
            self.upside_down(),
        )
    }
}

/// Metrics of a laid-out [`RangeSlider`](crate::RangeSlider) track.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackMetrics {
    pub minimum: i32,
    pub maximum: i32,
    pub orientation: Orientation,
    pub handle_length: f64,
    pub available_length: f64,
}

impl TrackMetrics {
    /// Metrics for a track `track_length` pixels long with round thumbs.
    pub fn new(minimum: i32, maximum: i32, orientation: Orientation, track_length: f64) -> Self {
        let handle_length = 2.0 * constants::THUMB_RADIUS;
        Self {
            minimum,
            maximum,
            orientation,
            handle_length,
            available_length: (track_length - handle_length).max(0.0),
        }
    }
}

impl SliderMetrics for TrackMetrics {
    fn minimum(&self) -> i32 {
        self.minimum
    }

    fn maximum(&self) -> i32 {
        self.maximum
    }

    fn orientation(&self) -> Orientation {
        self.orientation
    }

    fn handle_length(&self) -> f64 {
        self.handle_length
    }

    fn available_length(&self) -> f64 {
        self.available_length
    }
}
