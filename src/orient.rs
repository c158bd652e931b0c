//! Concatenation orientation.

use std::fmt;
use std::str::FromStr;

use crate::error::TightyTileError;

/// The axis along which images are placed next to each other.
///
/// `Horizontal` lays images out left-to-right and normalizes their heights;
/// `Vertical` stacks them top-to-bottom and normalizes their widths.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// Accepted spellings, matched case-insensitively.
pub const ORIENTATION_ALIASES: &[(&str, Orientation)] = &[
    ("h", Orientation::Horizontal),
    ("horizontal", Orientation::Horizontal),
    ("v", Orientation::Vertical),
    ("vertical", Orientation::Vertical),
];

impl Orientation {
    /// Canonical lowercase name.
    pub fn name(&self) -> &'static str {
        match self {
            Orientation::Horizontal => "horizontal",
            Orientation::Vertical => "vertical",
        }
    }

    /// Splits a `(width, height)` pair into `(concat, cross)` extents.
    #[inline]
    pub fn split(&self, width: u32, height: u32) -> (u32, u32) {
        match self {
            Orientation::Horizontal => (width, height),
            Orientation::Vertical => (height, width),
        }
    }

    /// Inverse of [`split`](Self::split): joins `(concat, cross)` back into
    /// `(width, height)`.
    #[inline]
    pub fn join(&self, concat: u32, cross: u32) -> (u32, u32) {
        match self {
            Orientation::Horizontal => (concat, cross),
            Orientation::Vertical => (cross, concat),
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Orientation {
    type Err = TightyTileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        ORIENTATION_ALIASES
            .iter()
            .find(|(alias, _)| *alias == lowered)
            .map(|(_, orient)| *orient)
            .ok_or_else(|| TightyTileError::UnknownOrientation(s.to_string()))
    }
}
