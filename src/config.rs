//! File-based slider configuration.
//!
//! A panel is a list of named channels, each describing one labeled slider:
//!
//! ```toml
//! [[channels]]
//! name = "h"
//! minimum = 0
//! maximum = 180
//! interval = 30
//!
//! [[channels]]
//! name = "v"
//! minimum = 0
//! maximum = 255
//! interval = 51
//! orientation = "vertical"
//! ```

use floem::reactive::RwSignal;
use serde::Deserialize;

use crate::error::SliderError;
use crate::labeled_slider::{labeled_slider, LabeledSlider};
use crate::level::Orientation;
use crate::options::SliderOptions;

fn default_interval() -> i32 {
    1
}

/// One slider as written in a config file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SliderConfig {
    pub minimum: i32,
    pub maximum: i32,
    #[serde(default = "default_interval")]
    pub interval: i32,
    /// `"horizontal"` or `"vertical"`; horizontal when absent.
    #[serde(default)]
    pub orientation: Option<String>,
    #[serde(default)]
    pub labels: Option<Vec<String>>,
}

impl SliderConfig {
    pub fn new(minimum: i32, maximum: i32, interval: i32) -> Self {
        Self {
            minimum,
            maximum,
            interval,
            orientation: None,
            labels: None,
        }
    }

    /// Validated construction options.
    pub fn options(&self) -> Result<SliderOptions, SliderError> {
        let orientation = match &self.orientation {
            Some(text) => text.parse::<Orientation>()?,
            None => Orientation::default(),
        };
        let mut opts = SliderOptions::new(self.minimum, self.maximum)
            .with_interval(self.interval)
            .with_orientation(orientation);
        if let Some(labels) = &self.labels {
            opts = opts.with_labels(labels.iter().cloned());
        }
        // Surface label and interval errors here too, not only at build time
        opts.levels()?;
        Ok(opts)
    }

    pub fn build(&self, selection: RwSignal<(i32, i32)>) -> Result<LabeledSlider, SliderError> {
        labeled_slider(self.options()?, selection)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ChannelConfig {
    pub name: String,
    #[serde(flatten)]
    pub slider: SliderConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PanelConfig {
    pub channels: Vec<ChannelConfig>,
}

impl PanelConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, SliderError> {
        Ok(toml::from_str(text)?)
    }

    /// Hue, saturation and value sliders in OpenCV's 8-bit HSV ranges.
    pub fn hsv() -> Self {
        let channel = |name: &str, maximum, interval| ChannelConfig {
            name: name.to_string(),
            slider: SliderConfig::new(0, maximum, interval),
        };
        Self {
            channels: vec![channel("h", 180, 30), channel("s", 255, 51), channel("v", 255, 51)],
        }
    }
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self::hsv()
    }
}
