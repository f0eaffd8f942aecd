//! Tick levels and slider orientation.

use std::fmt;
use std::str::FromStr;

use crate::error::SliderError;

/// Layout direction of a slider, fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

impl FromStr for Orientation {
    type Err = SliderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "horizontal" | "h" => Ok(Orientation::Horizontal),
            "vertical" | "v" => Ok(Orientation::Vertical),
            _ => Err(SliderError::InvalidOrientation(s.to_string())),
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::Horizontal => f.write_str("horizontal"),
            Orientation::Vertical => f.write_str("vertical"),
        }
    }
}

/// A labeled tick: the slider value it marks and the text drawn for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Level {
    value: i32,
    text: String,
}

impl Level {
    pub fn new(value: i32, text: impl Into<String>) -> Self {
        Self {
            value,
            text: text.into(),
        }
    }

    /// Slider value the tick sits at.
    pub fn value(&self) -> i32 {
        self.value
    }

    /// Label text.
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl From<i32> for Level {
    fn from(value: i32) -> Self {
        Self::new(value, value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_orientation_names() {
        assert_eq!("horizontal".parse::<Orientation>().unwrap(), Orientation::Horizontal);
        assert_eq!(" Vertical ".parse::<Orientation>().unwrap(), Orientation::Vertical);
        assert_eq!("h".parse::<Orientation>().unwrap(), Orientation::Horizontal);
        assert_eq!("V".parse::<Orientation>().unwrap(), Orientation::Vertical);
    }

    #[test]
    fn rejects_unknown_orientation() {
        let err = "diagonal".parse::<Orientation>().unwrap_err();
        assert!(matches!(err, SliderError::InvalidOrientation(ref s) if s == "diagonal"));
    }

    #[test]
    fn level_from_value_uses_decimal_text() {
        let level = Level::from(-45);
        assert_eq!(level.value(), -45);
        assert_eq!(level.text(), "-45");
    }
}
