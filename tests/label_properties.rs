//! Property tests for tick generation and label margin growth.

use floem::kurbo::Size;
use floem_labeled_slider::overlay::{label_origins, required_margins, tick_offset};
use floem_labeled_slider::{
    Level, Margins, Orientation, SliderError, SliderMetrics, SliderOptions, TrackMetrics,
};
use proptest::prelude::*;

fn arb_orientation() -> impl Strategy<Value = Orientation> {
    prop_oneof![Just(Orientation::Horizontal), Just(Orientation::Vertical)]
}

fn sizes_for(levels: &[Level], char_width: f64, height: f64) -> Vec<Size> {
    levels
        .iter()
        .map(|l| Size::new(char_width * l.text().len() as f64, height))
        .collect()
}

proptest! {
    /// Ticks step by the interval from the minimum and stop below maximum + interval.
    #[test]
    fn ticks_are_an_arithmetic_sequence(
        minimum in -500i32..500,
        span in 0i32..1000,
        interval in 1i32..200,
    ) {
        let maximum = minimum + span;
        let opts = SliderOptions::new(minimum, maximum).with_interval(interval);
        let values = opts.tick_values();

        prop_assert_eq!(values.first().copied(), Some(minimum));
        for pair in values.windows(2) {
            prop_assert_eq!(pair[1] - pair[0], interval);
        }
        let last = *values.last().unwrap();
        prop_assert!(last >= maximum);
        prop_assert!(last < maximum + interval);

        let levels = opts.levels().unwrap();
        prop_assert_eq!(levels.len(), values.len());
        for (level, value) in levels.iter().zip(&values) {
            prop_assert_eq!(level.value(), *value);
            prop_assert_eq!(level.text(), value.to_string());
        }
    }

    /// Any label count other than the tick count is rejected.
    #[test]
    fn wrong_label_count_is_rejected(
        span in 0i32..60,
        interval in 1i32..10,
        delta in 1usize..5,
        shorter in any::<bool>(),
    ) {
        let opts = SliderOptions::new(0, span).with_interval(interval);
        let expected = opts.tick_values().len();
        let actual = if shorter { expected.saturating_sub(delta) } else { expected + delta };
        prop_assume!(actual != expected);

        let result = opts.with_labels((0..actual).map(|i| i.to_string())).levels();
        let is_mismatch = matches!(
            result,
            Err(SliderError::LabelCountMismatch { expected: e, actual: a }) if e == expected && a == actual
        );
        prop_assert!(is_mismatch);
    }

    /// Horizontal offsets start and end half a thumb in and never decrease.
    #[test]
    fn horizontal_offsets_are_monotonic(
        span in 1i32..1000,
        track in 20.0f64..2000.0,
    ) {
        let m = TrackMetrics::new(0, span, Orientation::Horizontal, track);
        let half = m.handle_length() / 2.0;

        prop_assert!((tick_offset(&m, 0) - half).abs() < 1e-9);
        prop_assert!((tick_offset(&m, span) - (m.available_length() + half)).abs() < 1e-9);

        let step = (span / 50).max(1);
        let mut prev = f64::NEG_INFINITY;
        let mut v = 0;
        while v <= span {
            let offset = tick_offset(&m, v);
            prop_assert!(offset >= prev);
            prev = offset;
            v += step;
        }
    }

    /// Once margins are applied, the minimum label no longer clips.
    #[test]
    fn wide_minimum_label_stops_clipping(
        chars in 4usize..30,
        track in 100.0f64..800.0,
    ) {
        let text = "W".repeat(chars);
        let levels = vec![Level::new(0, text), Level::new(10, "10")];
        let sizes = sizes_for(&levels, 8.0, 14.0);
        let m = TrackMetrics::new(0, 10, Orientation::Horizontal, track);
        let initial = Margins::default();
        let width = sizes[0].width;
        prop_assume!(width > 2.0 * initial.left);

        let pre_offset = tick_offset(&m, 0);
        let required = required_margins(&levels, &sizes, &m, initial);
        prop_assert!(required.left >= width / 2.0 - pre_offset);

        let origins = label_origins(&levels, &sizes, &m, required, Size::new(track + 100.0, 60.0));
        prop_assert!(origins[0].x >= 0.0);
    }

    /// Repeated measure-and-grow passes never shrink any side.
    #[test]
    fn margins_never_decrease(
        orientation in arb_orientation(),
        span in 1i32..400,
        interval in 1i32..100,
        char_width in 3.0f64..14.0,
        height in 8.0f64..24.0,
        track in 50.0f64..600.0,
        passes in 1usize..5,
    ) {
        let opts = SliderOptions::new(0, span)
            .with_interval(interval)
            .with_orientation(orientation);
        let levels = opts.levels().unwrap();
        let sizes = sizes_for(&levels, char_width, height);
        let m = TrackMetrics::new(0, span, orientation, track);

        let mut margins = Margins::default();
        for _ in 0..passes {
            let before = margins;
            margins.grow_to(required_margins(&levels, &sizes, &m, margins));
            prop_assert!(margins.left >= before.left);
            prop_assert!(margins.top >= before.top);
            prop_assert!(margins.right >= before.right);
            prop_assert!(margins.bottom >= before.bottom);
        }

        // Converged: one more pass changes nothing
        let settled = margins;
        prop_assert!(!margins.grow_to(required_margins(&levels, &sizes, &m, settled)));
    }
}

#[test]
fn hue_slider_labels_match_values() {
    let levels = SliderOptions::new(0, 180).with_interval(30).levels().unwrap();
    let texts: Vec<&str> = levels.iter().map(Level::text).collect();
    assert_eq!(texts, ["0", "30", "60", "90", "120", "150", "180"]);
}
