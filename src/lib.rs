//! # utility-style
//!
//! Tailwind-style utility classes for GUI components.
//!
//! Components accept a short class string such as `"px-4 py-2 bg-white rounded-lg"`
//! and read padding, margin, colors, corner radius, and opacity back out of a flat
//! [`StyleUtility`](classes::StyleUtility) record. Parsing is a pure function: unknown
//! classes are ignored, conflicting classes resolve last-wins, and nothing can fail.
//!
//! ## Core Systems
//!
//! - **[`classes`]** — Tokenizer, lookup tables, prefix-dispatch parser, parse cache
//! - **[`color`]** — Non-premultiplied RGBA color with darken/lighten helpers
//! - **[`geometry`]** — Dp lengths and four-sided insets
//!
//! ## Example
//!
//! ```
//! use utility_style::classes::parse_classes;
//! use utility_style::color::Rgba;
//! use utility_style::geometry::Dp;
//!
//! let style = parse_classes(&["px-4 py-2 bg-white border border-gray rounded-lg opacity-90"]);
//! assert_eq!(style.padding.left, Dp(16.0));
//! assert_eq!(style.padding.top, Dp(8.0));
//! assert_eq!(style.background, Rgba::WHITE);
//! assert_eq!(style.radius, Dp(8.0));
//! ```

// Foundation
pub mod color;
pub mod geometry;

// Class parsing
pub mod classes;
