//! Prefix-dispatch parser for utility classes.
//!
//! Each token is matched against [`PREFIXES`] in order; the first prefix it
//! starts with decides which field the remainder is looked up for. Bare
//! keywords (`rounded`, `border`) are tried only when no prefix matched.
//! Tokens that match nothing, or whose value is missing from the lookup
//! table, leave the record untouched. Later tokens overwrite earlier ones.

use std::fmt;

use crate::classes::style::StyleUtility;
use crate::classes::tables;
use crate::classes::tokenizer::{class_names, tokenize};
use crate::geometry::{Dp, Inset};

/// Errors from strict class parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClassError {
    #[error("unknown utility class `{class}`")]
    UnknownUtility { class: String },
    #[error("unknown value `{value}` for `{utility}` in class `{class}`")]
    UnknownValue { class: String, utility: Utility, value: String },
}

impl ClassError {
    /// The offending class token.
    pub fn class(&self) -> &str {
        match self {
            ClassError::UnknownUtility { class } | ClassError::UnknownValue { class, .. } => class,
        }
    }
}

/// A prefixed utility family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Utility {
    Padding,
    PaddingX,
    PaddingY,
    PaddingTop,
    PaddingRight,
    PaddingBottom,
    PaddingLeft,
    Margin,
    MarginX,
    MarginY,
    Rounded,
    Background,
    BorderColor,
    Opacity,
}

/// Prefix table, most specific first. `px-` must be tried before `p-` and
/// `mx-` before `m-`; the order is part of the grammar.
pub const PREFIXES: &[(&str, Utility)] = &[
    ("px-", Utility::PaddingX),
    ("py-", Utility::PaddingY),
    ("pt-", Utility::PaddingTop),
    ("pr-", Utility::PaddingRight),
    ("pb-", Utility::PaddingBottom),
    ("pl-", Utility::PaddingLeft),
    ("p-", Utility::Padding),
    ("mx-", Utility::MarginX),
    ("my-", Utility::MarginY),
    ("m-", Utility::Margin),
    ("rounded-", Utility::Rounded),
    ("bg-", Utility::Background),
    ("border-", Utility::BorderColor),
    ("opacity-", Utility::Opacity),
];

/// Radius applied by the bare `rounded` keyword.
const DEFAULT_RADIUS: Dp = Dp(4.0);
/// Width applied by the bare `border` keyword.
const DEFAULT_BORDER_WIDTH: Dp = Dp(1.0);

impl Utility {
    /// The class prefix for this family, including the trailing `-`.
    pub fn prefix(self) -> &'static str {
        PREFIXES
            .iter()
            .find(|(_, utility)| *utility == self)
            .map(|(prefix, _)| *prefix)
            .unwrap_or_default()
    }

    /// Find the family a class belongs to, returning it with the value suffix.
    pub fn match_class(class: &str) -> Option<(Utility, &str)> {
        PREFIXES
            .iter()
            .find_map(|(prefix, utility)| class.strip_prefix(prefix).map(|value| (*utility, value)))
    }

    /// Write `value` into `style`. Returns `false` if the value is not on
    /// this family's scale, in which case `style` is unchanged.
    fn apply(self, value: &str, style: &mut StyleUtility) -> bool {
        match self {
            Utility::Padding => set_spacing(value, |dp| style.padding = Inset::uniform(dp)),
            Utility::PaddingX => set_spacing(value, |dp| {
                style.padding.left = dp;
                style.padding.right = dp;
            }),
            Utility::PaddingY => set_spacing(value, |dp| {
                style.padding.top = dp;
                style.padding.bottom = dp;
            }),
            Utility::PaddingTop => set_spacing(value, |dp| style.padding.top = dp),
            Utility::PaddingRight => set_spacing(value, |dp| style.padding.right = dp),
            Utility::PaddingBottom => set_spacing(value, |dp| style.padding.bottom = dp),
            Utility::PaddingLeft => set_spacing(value, |dp| style.padding.left = dp),
            Utility::Margin => set_spacing(value, |dp| style.margin = Inset::uniform(dp)),
            Utility::MarginX => set_spacing(value, |dp| {
                style.margin.left = dp;
                style.margin.right = dp;
            }),
            Utility::MarginY => set_spacing(value, |dp| {
                style.margin.top = dp;
                style.margin.bottom = dp;
            }),
            Utility::Rounded => tables::radius(value).map(|dp| style.radius = dp).is_some(),
            Utility::Background => tables::named_color(value).map(|c| style.background = c).is_some(),
            Utility::BorderColor => tables::named_color(value).map(|c| style.border.color = c).is_some(),
            Utility::Opacity => tables::opacity(value).map(|o| style.opacity = o).is_some(),
        }
    }
}

impl fmt::Display for Utility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix())
    }
}

fn set_spacing(value: &str, set: impl FnOnce(Dp)) -> bool {
    tables::spacing(value).map(set).is_some()
}

/// Why a class token contributed nothing. Borrows from the token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rejected<'a> {
    UnknownUtility,
    UnknownValue { utility: Utility, value: &'a str },
}

impl Rejected<'_> {
    fn into_error(self, class: &str) -> ClassError {
        match self {
            Rejected::UnknownUtility => ClassError::UnknownUtility { class: class.to_string() },
            Rejected::UnknownValue { utility, value } => ClassError::UnknownValue {
                class: class.to_string(),
                utility,
                value: value.to_string(),
            },
        }
    }
}

/// Fold one class token into `style`.
fn apply_class<'a>(class: &'a str, style: &mut StyleUtility) -> Result<(), Rejected<'a>> {
    if let Some((utility, value)) = Utility::match_class(class) {
        return if utility.apply(value, style) {
            Ok(())
        } else {
            Err(Rejected::UnknownValue { utility, value })
        };
    }

    match class {
        "rounded" => style.radius = DEFAULT_RADIUS,
        "border" => style.border.width = DEFAULT_BORDER_WIDTH,
        _ => return Err(Rejected::UnknownUtility),
    }
    Ok(())
}

/// Fold a single class token into `style`.
///
/// Returns `true` if the token changed (or re-set) a field, `false` if it was
/// ignored.
pub fn parse_class(class: &str, style: &mut StyleUtility) -> bool {
    apply_class(class, style).is_ok()
}

/// Parse Tailwind-like utility classes into a [`StyleUtility`].
///
/// The parts are joined with spaces and split on whitespace. Unknown tokens
/// are skipped; this function never fails.
///
/// ```
/// use utility_style::classes::parse_classes;
/// use utility_style::geometry::Dp;
///
/// let style = parse_classes(&["p-4 bg-blue", "rounded-lg"]);
/// assert_eq!(style.padding.top, Dp(16.0));
/// assert_eq!(style.radius, Dp(8.0));
/// ```
pub fn parse_classes<S: AsRef<str>>(classes: &[S]) -> StyleUtility {
    let joined = class_names(classes);
    let mut style = StyleUtility::new();
    for class in tokenize(&joined) {
        if let Err(reason) = apply_class(class, &mut style) {
            tracing::trace!(class, ?reason, "ignoring utility class");
        }
    }
    style
}

/// Parse utility classes, failing on the first token that would be ignored.
pub fn try_parse_classes<S: AsRef<str>>(classes: &[S]) -> Result<StyleUtility, ClassError> {
    let joined = class_names(classes);
    let mut style = StyleUtility::new();
    for class in tokenize(&joined) {
        apply_class(class, &mut style).map_err(|reason| reason.into_error(class))?;
    }
    Ok(style)
}

/// Every token [`parse_classes`] would ignore, in input order.
pub fn unrecognized_classes<S: AsRef<str>>(classes: &[S]) -> Vec<ClassError> {
    let joined = class_names(classes);
    let mut scratch = StyleUtility::new();
    tokenize(&joined)
        .into_iter()
        .filter_map(|class| {
            apply_class(class, &mut scratch)
                .err()
                .map(|reason| reason.into_error(class))
        })
        .collect()
}

impl From<&str> for StyleUtility {
    fn from(classes: &str) -> Self {
        parse_classes(&[classes])
    }
}
