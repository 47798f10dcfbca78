//! Single-entry parse cache for components that re-render every frame.
//!
//! A component keeps one [`ClassCache`] next to its class string and asks
//! it for the parsed record on each layout pass. The string is only
//! re-parsed when it differs from the one parsed last time.

use crate::classes::parser::parse_classes;
use crate::classes::style::StyleUtility;

/// Memoized result of parsing one class string.
#[derive(Debug, Clone, Default)]
pub struct ClassCache {
    entry: Option<(String, StyleUtility)>,
    parses: u64,
}

impl ClassCache {
    /// Create an empty cache. The first [`get`](Self::get) always parses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the parsed record for `classes`, parsing only on a key change.
    pub fn get(&mut self, classes: &str) -> &StyleUtility {
        if self.key() != Some(classes) {
            self.entry = None;
        }
        let parses = &mut self.parses;
        let (_, style) = self.entry.get_or_insert_with(|| {
            tracing::debug!(classes, "parsing utility classes");
            *parses += 1;
            (classes.to_string(), parse_classes(&[classes]))
        });
        style
    }

    /// The cached class string, if any.
    pub fn key(&self) -> Option<&str> {
        self.entry.as_ref().map(|(key, _)| key.as_str())
    }

    /// Drop the cached entry so the next [`get`](Self::get) re-parses.
    pub fn invalidate(&mut self) {
        self.entry = None;
    }

    /// Number of times this cache has actually parsed.
    pub fn parse_count(&self) -> u64 {
        self.parses
    }
}
