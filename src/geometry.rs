//! Lengths and insets: Dp, Inset.
//!
//! Lengths are density-independent units. Components convert them to pixels
//! at layout time; nothing in this crate knows about screen density.

use std::ops::Mul;

// ---------------------------------------------------------------------------
// Dp
// ---------------------------------------------------------------------------

/// A density-independent length.
#[derive(Copy, Clone, Debug, Default, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dp(pub f32);

impl Dp {
    /// Zero length. Also the "unset" sentinel for radius and border width.
    pub const ZERO: Dp = Dp(0.0);

    /// Returns `true` if this length is greater than zero.
    #[inline]
    pub fn is_set(self) -> bool {
        self.0 > 0.0
    }
}

impl Mul<f32> for Dp {
    type Output = Dp;

    #[inline]
    fn mul(self, rhs: f32) -> Dp {
        Dp(self.0 * rhs)
    }
}

// ---------------------------------------------------------------------------
// Inset
// ---------------------------------------------------------------------------

/// Spacing around the four sides of a rectangle, used for margin and padding.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Inset {
    pub top: Dp,
    pub right: Dp,
    pub bottom: Dp,
    pub left: Dp,
}

impl Inset {
    /// Zero inset on all sides.
    pub const ZERO: Inset = Inset { top: Dp::ZERO, right: Dp::ZERO, bottom: Dp::ZERO, left: Dp::ZERO };

    /// Create an inset with explicit values for each side.
    #[inline]
    pub const fn new(top: Dp, right: Dp, bottom: Dp, left: Dp) -> Self {
        Self { top, right, bottom, left }
    }

    /// Create an inset with the same value on all four sides.
    #[inline]
    pub const fn uniform(value: Dp) -> Self {
        Self { top: value, right: value, bottom: value, left: value }
    }

    /// Create an inset with symmetric vertical and horizontal values.
    #[inline]
    pub const fn symmetric(vertical: Dp, horizontal: Dp) -> Self {
        Self { top: vertical, right: horizontal, bottom: vertical, left: horizontal }
    }

    /// Returns `true` if every side is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        *self == Inset::ZERO
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dp_is_set() {
        assert!(!Dp::ZERO.is_set());
        assert!(Dp(1.0).is_set());
    }

    #[test]
    fn dp_scale() {
        assert_eq!(Dp(4.0) * 4.0, Dp(16.0));
    }

    #[test]
    fn inset_uniform() {
        let i = Inset::uniform(Dp(16.0));
        assert_eq!(i, Inset::new(Dp(16.0), Dp(16.0), Dp(16.0), Dp(16.0)));
    }

    #[test]
    fn inset_symmetric() {
        let i = Inset::symmetric(Dp(8.0), Dp(16.0));
        assert_eq!(i.top, Dp(8.0));
        assert_eq!(i.bottom, Dp(8.0));
        assert_eq!(i.left, Dp(16.0));
        assert_eq!(i.right, Dp(16.0));
    }

    #[test]
    fn inset_default_is_zero() {
        assert!(Inset::default().is_zero());
        assert!(!Inset::uniform(Dp(1.0)).is_zero());
    }
}
