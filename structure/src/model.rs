//! Core model types for the S6 structure catalog.
//!
//! All reference data is built once and referenced via borrows; the top-level
//! entry point is [`Catalog::full()`](crate::Catalog::full).

use serde::Serialize;

/// An unordered pair of distinct ground-set elements, stored as (min, max).
///
/// Normalization happens at construction, so two duads with swapped
/// endpoints compare equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Duad(u8, u8);

impl Duad {
    /// Builds a duad from two distinct elements of 1..6, normalizing the
    /// endpoints to (min, max).
    #[must_use]
    pub fn new(a: u8, b: u8) -> Duad {
        debug_assert!(a != b, "duad endpoints must differ");
        if a <= b {
            Duad(a, b)
        } else {
            Duad(b, a)
        }
    }

    /// The smaller endpoint.
    #[must_use]
    pub fn low(self) -> u8 {
        self.0
    }

    /// The larger endpoint.
    #[must_use]
    pub fn high(self) -> u8 {
        self.1
    }
}

/// A named partition of {1..6} into 3 disjoint duads.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Syntheme {
    /// Canonical letter name, `A`..`O`.
    pub name: char,
    /// The 3 duads; together they cover every element exactly once.
    pub duads: [Duad; 3],
}

/// A named synthematic total: 5 synthemes that collectively contain each of
/// the 15 duads exactly once.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Total {
    /// Canonical name, `t1`..`t6`.
    pub name: &'static str,
    /// The 5 member synthemes, by letter, in declared order.
    pub synthemes: [char; 5],
}

/// The complete reference structure: 15 synthemes and 6 synthematic totals.
#[derive(Debug)]
pub struct Catalog {
    /// All synthemes in letter order `A`..`O`.
    pub synthemes: [Syntheme; 15],
    /// All totals in order `t1`..`t6`.
    pub totals: [Total; 6],
}

impl Catalog {
    /// Looks up a syntheme by its letter name. Returns `None` if not found.
    #[must_use]
    pub fn syntheme(&self, name: char) -> Option<&Syntheme> {
        self.synthemes.iter().find(|s| s.name == name)
    }

    /// Looks up a total by its name. Returns `None` if not found.
    #[must_use]
    pub fn total(&self, name: &str) -> Option<&Total> {
        self.totals.iter().find(|t| t.name == name)
    }
}
