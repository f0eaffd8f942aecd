//! Tick label geometry.
//!
//! Placement is split in two steps so it can run outside of painting:
//! [`required_margins`] measures how much room the labels need, and the
//! layout owner grows its [`Margins`] from the result before the next pass.
//! [`label_origins`] then places each label against the margins the current
//! layout reflects.

use floem::kurbo::{Point, Size};

use crate::constants;
use crate::level::{Level, Orientation};
use crate::margins::Margins;
use crate::metrics::SliderMetrics;

/// Offset along the track of the thumb's center when it sits at `value`.
pub fn tick_offset(metrics: &impl SliderMetrics, value: i32) -> f64 {
    metrics.position_from_value(value) + metrics.handle_length() / 2.0
}

/// Margins needed so no label is clipped by the widget bounds.
///
/// `label_sizes` holds the measured size of each level's text, in level order.
/// The result is never smaller than `current`.
pub fn required_margins(
    levels: &[Level],
    label_sizes: &[Size],
    metrics: &impl SliderMetrics,
    current: Margins,
) -> Margins {
    let mut m = current;
    for (level, size) in levels.iter().zip(label_sizes) {
        let offset = tick_offset(metrics, level.value());
        let half_width = size.width / 2.0;

        match metrics.orientation() {
            Orientation::Horizontal => {
                if level.value() == metrics.minimum() {
                    let left = offset - half_width + m.left;
                    if left <= 0.0 {
                        m.left = m.left.max(half_width - offset);
                    }
                    if m.bottom <= size.height {
                        m.bottom = size.height;
                    }
                }
                if level.value() == metrics.maximum() && half_width > m.right {
                    m.right = half_width;
                }
            }
            Orientation::Vertical => {
                let left = m.left - size.width;
                if left <= 0.0 {
                    m.left = size.width + constants::VERTICAL_LABEL_GAP;
                }
            }
        }
    }
    m
}

/// Top-left corner of each label, in widget coordinates.
///
/// Horizontal labels are centered under their tick and rest on the widget's
/// bottom edge. Vertical labels end where the track begins and are centered
/// on their tick.
pub fn label_origins(
    levels: &[Level],
    label_sizes: &[Size],
    metrics: &impl SliderMetrics,
    margins: Margins,
    widget_size: Size,
) -> Vec<Point> {
    levels
        .iter()
        .zip(label_sizes)
        .map(|(level, size)| {
            let offset = tick_offset(metrics, level.value());
            match metrics.orientation() {
                Orientation::Horizontal => Point::new(
                    offset - size.width / 2.0 + margins.left,
                    widget_size.height - size.height,
                ),
                Orientation::Vertical => Point::new(
                    margins.left - size.width,
                    margins.top + offset - size.height / 2.0,
                ),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::TrackMetrics;
    use crate::options::SliderOptions;
    use assert_approx_eq::assert_approx_eq;

    // 7px per character, 13px tall
    fn mono(levels: &[Level]) -> Vec<Size> {
        levels
            .iter()
            .map(|l| Size::new(7.0 * l.text().len() as f64, 13.0))
            .collect()
    }

    fn hue_levels() -> Vec<Level> {
        SliderOptions::new(0, 180).with_interval(30).levels().unwrap()
    }

    #[test]
    fn horizontal_offsets_center_under_thumb() {
        let m = TrackMetrics::new(0, 180, Orientation::Horizontal, 314.0);
        assert_approx_eq!(tick_offset(&m, 0), 7.0);
        assert_approx_eq!(tick_offset(&m, 90), 157.0);
        assert_approx_eq!(tick_offset(&m, 180), 307.0);
    }

    #[test]
    fn vertical_offsets_are_inverted() {
        let m = TrackMetrics::new(0, 100, Orientation::Vertical, 214.0);
        assert_approx_eq!(tick_offset(&m, 100), 7.0);
        assert_approx_eq!(tick_offset(&m, 0), 207.0);
    }

    #[test]
    fn short_labels_only_grow_bottom() {
        let levels = hue_levels();
        let sizes = mono(&levels);
        let m = TrackMetrics::new(0, 180, Orientation::Horizontal, 314.0);
        let required = required_margins(&levels, &sizes, &m, Margins::default());
        assert_eq!(
            required,
            Margins {
                left: 10.0,
                top: 10.0,
                right: 10.5,
                bottom: 13.0,
            }
        );
    }

    #[test]
    fn wide_minimum_label_grows_left() {
        let levels = SliderOptions::new(0, 2)
            .with_labels(["minimum", "mid", "max"])
            .levels()
            .unwrap();
        let sizes = mono(&levels);
        let m = TrackMetrics::new(0, 2, Orientation::Horizontal, 314.0);
        let required = required_margins(&levels, &sizes, &m, Margins::default());
        // 49px wide label, thumb center at 7px
        assert_approx_eq!(required.left, 24.5 - 7.0);

        let origins = label_origins(&levels, &sizes, &m, required, Size::new(400.0, 50.0));
        assert_approx_eq!(origins[0].x, 0.0);
        assert_approx_eq!(origins[0].y, 37.0);
    }

    #[test]
    fn wide_maximum_label_grows_right() {
        let levels = SliderOptions::new(0, 1)
            .with_labels(["a", "far right"])
            .levels()
            .unwrap();
        let sizes = mono(&levels);
        let m = TrackMetrics::new(0, 1, Orientation::Horizontal, 314.0);
        let required = required_margins(&levels, &sizes, &m, Margins::default());
        assert_approx_eq!(required.right, 31.5);
        assert_approx_eq!(required.left, 10.0);
    }

    #[test]
    fn vertical_labels_grow_left_with_gap() {
        let levels = SliderOptions::new(0, 255)
            .with_interval(51)
            .with_orientation(Orientation::Vertical)
            .levels()
            .unwrap();
        let sizes = mono(&levels);
        let m = TrackMetrics::new(0, 255, Orientation::Vertical, 314.0);
        let required = required_margins(&levels, &sizes, &m, Margins::default());
        assert_approx_eq!(required.left, 21.0 + 2.0);
        assert_approx_eq!(required.bottom, 10.0);

        let origins = label_origins(&levels, &sizes, &m, required, Size::new(60.0, 334.0));
        // "255" sits at the top, its right edge on the track's left edge
        let last = origins.last().unwrap();
        assert_approx_eq!(last.x, 2.0);
        assert_approx_eq!(last.y, 10.0 + 7.0 - 6.5);
    }

    #[test]
    fn measuring_twice_is_stable() {
        let levels = SliderOptions::new(0, 2)
            .with_labels(["leftmost", "x", "rightmost"])
            .levels()
            .unwrap();
        let sizes = mono(&levels);
        let m = TrackMetrics::new(0, 2, Orientation::Horizontal, 314.0);
        let once = required_margins(&levels, &sizes, &m, Margins::default());
        let twice = required_margins(&levels, &sizes, &m, once);
        assert_eq!(once, twice);
    }
}
