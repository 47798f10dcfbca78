//! Fixed lookup tables for utility-class values.
//!
//! These scales are kept numerically in step with the theme's spacing and
//! radius constants by convention only; nothing here reads the theme.

use crate::color::Rgba;
use crate::geometry::Dp;

/// Spacing scale used by `p-*` and `m-*`: key `n` maps to `4n` dp.
pub fn spacing(key: &str) -> Option<Dp> {
    let steps = match key {
        "0" => 0.0,
        "1" => 1.0,
        "2" => 2.0,
        "3" => 3.0,
        "4" => 4.0,
        "5" => 5.0,
        "6" => 6.0,
        "8" => 8.0,
        "10" => 10.0,
        "12" => 12.0,
        "16" => 16.0,
        "20" => 20.0,
        "24" => 24.0,
        "32" => 32.0,
        "40" => 40.0,
        "48" => 48.0,
        "56" => 56.0,
        "64" => 64.0,
        _ => return None,
    };
    Some(Dp(4.0) * steps)
}

/// Radius scale used by `rounded-*`. The empty key is the bare default.
pub fn radius(key: &str) -> Option<Dp> {
    let dp = match key {
        "none" => 0.0,
        "sm" => 2.0,
        "" => 4.0,
        "md" => 6.0,
        "lg" => 8.0,
        "xl" => 12.0,
        "2xl" => 16.0,
        "3xl" => 24.0,
        "full" => 9999.0,
        _ => return None,
    };
    Some(Dp(dp))
}

/// Named palette used by `bg-*` and `border-*`.
pub fn named_color(name: &str) -> Option<Rgba> {
    let color = match name {
        "transparent" => Rgba::TRANSPARENT,
        "black" => Rgba::BLACK,
        "white" => Rgba::WHITE,
        "red" => Rgba::rgb(239, 68, 68),
        "green" => Rgba::rgb(34, 197, 94),
        "blue" => Rgba::rgb(59, 130, 246),
        "yellow" => Rgba::rgb(251, 191, 36),
        "purple" => Rgba::rgb(147, 51, 234),
        "pink" => Rgba::rgb(236, 72, 153),
        "indigo" => Rgba::rgb(99, 102, 241),
        "gray" => Rgba::rgb(156, 163, 175),
        _ => return None,
    };
    Some(color)
}

/// Opacity scale used by `opacity-*`: percentage key to a 0.0..=1.0 fraction.
pub fn opacity(key: &str) -> Option<f32> {
    let value = match key {
        "0" => 0.0,
        "5" => 0.05,
        "10" => 0.1,
        "20" => 0.2,
        "25" => 0.25,
        "30" => 0.3,
        "40" => 0.4,
        "50" => 0.5,
        "60" => 0.6,
        "70" => 0.7,
        "75" => 0.75,
        "80" => 0.8,
        "90" => 0.9,
        "95" => 0.95,
        "100" => 1.0,
        _ => return None,
    };
    Some(value)
}
