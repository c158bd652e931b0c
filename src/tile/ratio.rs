//! Exact integer scale ratios.

use std::fmt;

/// A scale factor held as a reduced `numer / denom` pair of integers.
///
/// Scaling multiplies before dividing in 64-bit arithmetic, so the result is
/// `floor(value * numer / denom)` exactly, with no floating-point drift. A
/// ratio built from two equal values is exactly one.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScaleRatio {
    numer: u32,
    denom: u32,
}

impl ScaleRatio {
    /// Builds `numer / denom`, or `None` when `denom` is zero.
    pub fn new(numer: u32, denom: u32) -> Option<Self> {
        if denom == 0 {
            return None;
        }
        let g = gcd(numer, denom);
        Some(Self {
            numer: numer / g,
            denom: denom / g,
        })
    }

    /// The ratio that leaves every value unchanged.
    pub const ONE: Self = Self { numer: 1, denom: 1 };

    #[inline]
    pub fn numer(&self) -> u32 {
        self.numer
    }

    #[inline]
    pub fn denom(&self) -> u32 {
        self.denom
    }

    #[inline]
    pub fn is_identity(&self) -> bool {
        self.numer == self.denom
    }

    /// Returns `floor(value * self)`, saturating at `u32::MAX`.
    #[inline]
    pub fn apply(&self, value: u32) -> u32 {
        let scaled = u64::from(value) * u64::from(self.numer) / u64::from(self.denom);
        u32::try_from(scaled).unwrap_or(u32::MAX)
    }
}

impl fmt::Debug for ScaleRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ScaleRatio({}/{})", self.numer, self.denom)
    }
}

impl fmt::Display for ScaleRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numer, self.denom)
    }
}

fn gcd(mut a: u32, mut b: u32) -> u32 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a.max(1)
}
