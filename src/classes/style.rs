//! The parsed style record.
//!
//! Fields use zero values as "unset" rather than `Option<T>`: components
//! check alpha, inset, and radius against zero before overriding their own
//! defaults, and the `*_or` accessors encode that check once.

use crate::color::Rgba;
use crate::geometry::{Dp, Inset};

/// Border color and width. Either half may be set independently:
/// `border` sets the width, `border-<color>` sets the color.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BorderStyle {
    pub color: Rgba,
    pub width: Dp,
}

/// Style values collected from a utility-class string.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StyleUtility {
    pub padding: Inset,
    pub margin: Inset,
    pub background: Rgba,
    pub border: BorderStyle,
    pub radius: Dp,
    /// Fraction in `0.0..=1.0`. Defaults to fully opaque.
    pub opacity: f32,
}

impl Default for StyleUtility {
    fn default() -> Self {
        Self {
            padding: Inset::ZERO,
            margin: Inset::ZERO,
            background: Rgba::TRANSPARENT,
            border: BorderStyle::default(),
            radius: Dp::ZERO,
            opacity: 1.0,
        }
    }
}

impl StyleUtility {
    /// Create a record with every field unset and opacity `1.0`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parsed padding, or `default` when no side was set.
    pub fn padding_or(&self, default: Inset) -> Inset {
        if self.padding.is_zero() {
            default
        } else {
            self.padding
        }
    }

    /// Parsed margin, or `default` when no side was set.
    pub fn margin_or(&self, default: Inset) -> Inset {
        if self.margin.is_zero() {
            default
        } else {
            self.margin
        }
    }

    /// Parsed background, or `default` when transparent.
    pub fn background_or(&self, default: Rgba) -> Rgba {
        if self.background.is_set() {
            self.background
        } else {
            default
        }
    }

    /// Parsed border color, or `default` when transparent.
    pub fn border_color_or(&self, default: Rgba) -> Rgba {
        if self.border.color.is_set() {
            self.border.color
        } else {
            default
        }
    }

    /// Parsed corner radius, or `default` when zero.
    pub fn radius_or(&self, default: Dp) -> Dp {
        if self.radius.is_set() {
            self.radius
        } else {
            default
        }
    }

    /// Returns `true` if a `border` token set a width.
    pub fn has_border(&self) -> bool {
        self.border.width.is_set()
    }
}
