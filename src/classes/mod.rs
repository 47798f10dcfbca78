//! Utility classes: tokenizer, lookup tables, parser, style record, cache.

pub mod cache;
pub mod parser;
pub mod style;
pub mod tables;
pub mod tokenizer;

pub use cache::ClassCache;
pub use parser::{parse_class, parse_classes, try_parse_classes, unrecognized_classes, ClassError, Utility};
pub use style::{BorderStyle, StyleUtility};
pub use tokenizer::class_names;
