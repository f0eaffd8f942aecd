//! Space reserved around the slider track for label text.

use crate::constants;

/// Padding on each side of the slider track. Only ever grows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margins {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Margins {
    pub const fn uniform(v: f64) -> Self {
        Self {
            left: v,
            top: v,
            right: v,
            bottom: v,
        }
    }

    /// Raise each side to at least the matching side of `other`.
    ///
    /// Returns `true` if any side grew.
    pub fn grow_to(&mut self, other: Margins) -> bool {
        let before = *self;
        self.left = self.left.max(other.left);
        self.top = self.top.max(other.top);
        self.right = self.right.max(other.right);
        self.bottom = self.bottom.max(other.bottom);
        *self != before
    }
}

impl Default for Margins {
    fn default() -> Self {
        Self::uniform(constants::INITIAL_MARGIN)
    }
}
