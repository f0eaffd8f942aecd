//! Construction inputs for a labeled slider and tick generation.

use crate::constants;
use crate::error::SliderError;
use crate::level::{Level, Orientation};

/// Everything needed to build a [`LabeledSlider`](crate::LabeledSlider).
///
/// ```
/// use floem_labeled_slider::{Orientation, SliderOptions};
///
/// let opts = SliderOptions::new(0, 180).with_interval(30);
/// assert_eq!(opts.tick_values(), vec![0, 30, 60, 90, 120, 150, 180]);
/// assert_eq!(opts.orientation(), Orientation::Horizontal);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SliderOptions {
    minimum: i32,
    maximum: i32,
    interval: i32,
    orientation: Orientation,
    labels: Option<Vec<String>>,
}

impl SliderOptions {
    /// Options for a horizontal slider over `minimum..=maximum` with a tick every unit.
    pub fn new(minimum: i32, maximum: i32) -> Self {
        Self {
            minimum,
            maximum,
            interval: 1,
            orientation: Orientation::Horizontal,
            labels: None,
        }
    }

    /// Distance between ticks, also used as the slider's tick interval.
    pub fn with_interval(mut self, interval: i32) -> Self {
        self.interval = interval;
        self
    }

    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Explicit label texts, one per tick in order.
    pub fn with_labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.labels = Some(labels.into_iter().map(Into::into).collect());
        self
    }

    pub fn minimum(&self) -> i32 {
        self.minimum
    }

    pub fn maximum(&self) -> i32 {
        self.maximum
    }

    pub fn interval(&self) -> i32 {
        self.interval
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Number of ticks [`tick_values`](Self::tick_values) describes, without
    /// generating them.
    pub fn tick_count(&self) -> usize {
        if self.interval <= 0 {
            return 0;
        }
        let end = self.maximum as i64 + self.interval as i64;
        // Ticks past i32::MAX can't be represented and are dropped
        let last = (end - 1).min(i32::MAX as i64);
        let first = self.minimum as i64;
        if last < first {
            return 0;
        }
        ((last - first) / self.interval as i64 + 1) as usize
    }

    /// Tick values from `minimum` in steps of `interval`, stopping below `maximum + interval`.
    ///
    /// When the range isn't a multiple of the interval the last tick lands past
    /// `maximum`, unless that would pass `i32::MAX`. A non-positive interval
    /// yields no ticks. At most [`MAX_TICKS`](constants::MAX_TICKS) values are
    /// produced.
    pub fn tick_values(&self) -> Vec<i32> {
        let count = self.tick_count().min(constants::MAX_TICKS);
        let mut values = Vec::with_capacity(count);
        let mut v = self.minimum as i64;
        for _ in 0..count {
            values.push(v as i32);
            v += self.interval as i64;
        }
        values
    }

    /// Pair each tick value with its label.
    pub fn levels(&self) -> Result<Vec<Level>, SliderError> {
        if self.interval <= 0 {
            return Err(SliderError::InvalidInterval(self.interval));
        }
        let count = self.tick_count();
        if count > constants::MAX_TICKS {
            return Err(SliderError::TooManyTicks(count));
        }
        let values = self.tick_values();
        match &self.labels {
            Some(labels) => {
                if labels.len() != values.len() {
                    return Err(SliderError::LabelCountMismatch {
                        expected: values.len(),
                        actual: labels.len(),
                    });
                }
                Ok(values
                    .into_iter()
                    .zip(labels.iter())
                    .map(|(v, text)| Level::new(v, text.clone()))
                    .collect())
            }
            None => Ok(values.into_iter().map(Level::from).collect()),
        }
    }
}
