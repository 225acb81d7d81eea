//! Keyed in-memory cache for suggestion results.

use std::collections::HashMap;

use super::Suggestion;

/// Session-scoped cache of lookup results, keyed by the exact query string.
///
/// There is no eviction; the cache lives and dies with its editing session.
#[derive(Debug, Default)]
pub struct SuggestionCache {
    entries: HashMap<String, Vec<Suggestion>>,
}

impl SuggestionCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, query: &str) -> Option<&[Suggestion]> {
        self.entries.get(query).map(Vec::as_slice)
    }

    pub fn contains(&self, query: &str) -> bool {
        self.entries.contains_key(query)
    }

    pub fn insert(&mut self, query: impl Into<String>, suggestions: Vec<Suggestion>) {
        self.entries.insert(query.into(), suggestions);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
