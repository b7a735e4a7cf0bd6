//! Occurrence counting for label sequences.

use std::collections::BTreeMap;

/// Counts how often each label sequence occurs across the enumeration.
///
/// Duplicates are a diagnostic observation only; the mathematics guarantees
/// injectivity for the canonical catalog, so any count above 1 points at a
/// data error. Recording never rejects or alters a record.
#[derive(Debug, Default)]
pub struct DuplicateRegistry {
    counts: BTreeMap<String, u32>,
}

impl DuplicateRegistry {
    /// An empty registry.
    #[must_use]
    pub fn new() -> DuplicateRegistry {
        DuplicateRegistry::default()
    }

    /// Records one occurrence of `label` and returns the updated count.
    pub fn record(&mut self, label: &str) -> u32 {
        let count = self.counts.entry(label.to_string()).or_insert(0);
        *count += 1;
        *count
    }

    /// The number of distinct label sequences seen.
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Whether no label has been recorded yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// The highest occurrence count over all labels (0 when empty).
    #[must_use]
    pub fn max_count(&self) -> u32 {
        self.counts.values().copied().max().unwrap_or(0)
    }

    /// All labels recorded more than once, with their counts.
    pub fn duplicates(&self) -> impl Iterator<Item = (&str, u32)> {
        self.counts
            .iter()
            .filter(|(_, &c)| c > 1)
            .map(|(label, &c)| (label.as_str(), c))
    }
}
