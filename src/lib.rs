//! # floem-labeled-slider
//!
//! A range slider widget for [Floem](https://github.com/lapce/floem) with
//! evenly spaced numeric tick labels painted beneath (or beside) the track.
//!
//! Labels are kept inside the widget: when the first or last label would
//! clip, the margins around the track grow until it fits.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use floem::prelude::*;
//! use floem_labeled_slider::{labeled_slider, SliderOptions};
//!
//! let hue = RwSignal::new((0, 180));
//! let slider = labeled_slider(SliderOptions::new(0, 180).with_interval(30), hue)
//!     .expect("valid tick set");
//! // Use `slider` in your Floem view tree.
//! ```

pub mod config;
mod constants;
mod error;
mod labeled_slider;
mod level;
mod margins;
mod metrics;
mod options;
pub mod overlay;
mod range_slider;

pub use error::SliderError;
pub use labeled_slider::{labeled_slider, LabeledSlider};
pub use level::{Level, Orientation};
pub use margins::Margins;
pub use metrics::{position_from_value, value_from_position, SliderMetrics, TrackMetrics};
pub use options::SliderOptions;
pub use range_slider::{range_slider, track_metrics, RangeSlider, TickPosition};
