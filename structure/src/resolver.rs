//! Canonical-name lookup for transformed synthemes and totals.
//!
//! The tables are small enough to scan, but lookup happens 30 times per
//! permutation across 720 permutations, so the resolver precomputes a map
//! from the canonical sorted representation of each entry to its name.
//! Multiset equality reduces to sorted-array equality because duads are
//! normalized at construction.

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::model::{Catalog, Duad};

/// Constant-time resolver from transformed structures to canonical names.
///
/// A failed lookup returns `None`; it signals a defect in the catalog data,
/// not a reachable state for correct input, and callers are expected to
/// substitute a sentinel and continue rather than abort.
#[derive(Debug)]
pub struct Resolver {
    synthemes: HashMap<[Duad; 3], char>,
    totals: HashMap<[char; 5], &'static str>,
}

impl Resolver {
    /// Builds a resolver over the given catalog.
    #[must_use]
    pub fn new(catalog: &Catalog) -> Resolver {
        let mut synthemes = HashMap::with_capacity(catalog.synthemes.len());
        for s in &catalog.synthemes {
            let mut key = s.duads;
            key.sort_unstable();
            synthemes.insert(key, s.name);
        }
        let mut totals = HashMap::with_capacity(catalog.totals.len());
        for t in &catalog.totals {
            let mut key = t.synthemes;
            key.sort_unstable();
            totals.insert(key, t.name);
        }
        Resolver { synthemes, totals }
    }

    /// Returns the resolver over [`Catalog::full()`], built once with
    /// process lifetime.
    #[must_use]
    pub fn full() -> &'static Resolver {
        static RESOLVER: OnceLock<Resolver> = OnceLock::new();
        RESOLVER.get_or_init(|| Resolver::new(Catalog::full()))
    }

    /// Resolves 3 duads to the letter of the syntheme they form, or `None`
    /// if no catalog syntheme matches.
    #[must_use]
    pub fn resolve_syntheme(&self, duads: [Duad; 3]) -> Option<char> {
        let mut key = duads;
        key.sort_unstable();
        self.synthemes.get(&key).copied()
    }

    /// Resolves 5 syntheme letters to the name of the total they form, or
    /// `None` if no catalog total matches.
    #[must_use]
    pub fn resolve_total(&self, names: [char; 5]) -> Option<&'static str> {
        let mut key = names;
        key.sort_unstable();
        self.totals.get(&key).copied()
    }
}
