//! Errors raised while building a slider.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SliderError {
    #[error("Size of labels ({actual}) doesn't match the {expected} tick levels")]
    LabelCountMismatch { expected: usize, actual: usize },

    #[error("Invalid orientation: `{0}`")]
    InvalidOrientation(String),

    #[error("Tick interval must be positive, got {0}")]
    InvalidInterval(i32),

    #[error("Too many ticks: {0} exceeds the limit of {max}", max = crate::constants::MAX_TICKS)]
    TooManyTicks(usize),

    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),
}
