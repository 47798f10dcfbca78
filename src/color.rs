//! Non-premultiplied RGBA colors and the small set of adjustments
//! components use to derive hover and pressed shades.

use std::fmt;

/// An 8-bit-per-channel, non-premultiplied RGBA color.
///
/// Alpha `0` is the "unset" sentinel: a parsed background or border color
/// with zero alpha never overrides a component default.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// Fully transparent black.
    pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0);
    pub const BLACK: Rgba = Rgba::rgb(0, 0, 0);
    pub const WHITE: Rgba = Rgba::rgb(255, 255, 255);

    /// Create a color from all four channels.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color.
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Look up a color from the utility-class palette (`red`, `gray`, ...).
    pub fn named(name: &str) -> Option<Rgba> {
        crate::classes::tables::named_color(name)
    }

    /// Returns `true` if alpha is non-zero.
    #[inline]
    pub fn is_set(self) -> bool {
        self.a > 0
    }

    /// Scale each color channel toward black by `factor` (0.0..=1.0).
    pub fn darken(self, factor: f32) -> Rgba {
        let scale = |c: u8| (f32::from(c) * (1.0 - factor)) as u8;
        Rgba { r: scale(self.r), g: scale(self.g), b: scale(self.b), a: self.a }
    }

    /// Move each color channel toward white by `factor` (0.0..=1.0).
    pub fn lighten(self, factor: f32) -> Rgba {
        let scale = |c: u8| {
            let c = f32::from(c);
            (c + (255.0 - c) * factor) as u8
        };
        Rgba { r: scale(self.r), g: scale(self.g), b: scale(self.b), a: self.a }
    }

    /// Same color with a replaced alpha channel.
    #[inline]
    pub const fn with_alpha(self, a: u8) -> Rgba {
        Rgba { a, ..self }
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel() {
        assert!(!Rgba::TRANSPARENT.is_set());
        assert!(!Rgba::default().is_set());
        assert!(Rgba::BLACK.is_set());
    }

    #[test]
    fn darken_truncates_and_keeps_alpha() {
        let c = Rgba::new(239, 68, 68, 200).darken(0.1);
        // 239 * 0.9 = 215.1, 68 * 0.9 = 61.2
        assert_eq!(c, Rgba::new(215, 61, 61, 200));
    }

    #[test]
    fn darken_zero_is_identity() {
        let c = Rgba::rgb(59, 130, 246);
        assert_eq!(c.darken(0.0), c);
    }

    #[test]
    fn lighten_toward_white() {
        assert_eq!(Rgba::BLACK.lighten(0.5), Rgba::rgb(127, 127, 127));
        assert_eq!(Rgba::BLACK.lighten(1.0), Rgba::WHITE);
        assert_eq!(Rgba::WHITE.lighten(0.3), Rgba::WHITE);
    }

    #[test]
    fn with_alpha() {
        assert_eq!(Rgba::WHITE.with_alpha(0), Rgba::new(255, 255, 255, 0));
    }

    #[test]
    fn named_palette() {
        assert_eq!(Rgba::named("white"), Some(Rgba::WHITE));
        assert_eq!(Rgba::named("gray"), Some(Rgba::rgb(156, 163, 175)));
        assert_eq!(Rgba::named("teal"), None);
    }

    #[test]
    fn display_hex() {
        assert_eq!(Rgba::rgb(59, 130, 246).to_string(), "#3b82f6ff");
        assert_eq!(Rgba::TRANSPARENT.to_string(), "#00000000");
    }
}
