//! Full enumeration of the syntheme structure under all 720 permutations.

use std::fmt;

use serde::Serialize;

use heteronym_structure::{Catalog, Duad, Resolver, Syntheme};

use crate::perm::Permutation;
use crate::registry::DuplicateRegistry;

/// Sentinel letter substituted when a lookup has no catalog match.
pub const SENTINEL: char = '-';

/// The label sequence of the identity permutation: each total's own
/// synthemes in catalog order.
pub const IDENTITY_LABEL: &str = "AFHJNAEIKMBDHLMBFGKOCEGLNCDIJO";

/// The image of one syntheme under one permutation.
#[derive(Debug, Clone, Serialize)]
pub struct SynthemeImage {
    /// Letter of the catalog syntheme the image came from.
    pub source: char,
    /// Transformed duads with endpoints in permutation order, kept for
    /// display.
    pub raw_duads: [(u8, u8); 3],
    /// Transformed duads normalized to (min, max); the resolution key.
    pub duads: [Duad; 3],
    /// Resolved letter, or [`SENTINEL`] on a failed lookup.
    pub name: char,
}

/// The image of one synthematic total under one permutation.
#[derive(Debug, Clone, Serialize)]
pub struct TotalImage {
    /// Name of the source total.
    pub source: &'static str,
    /// Resolved name of the image total (the automorphism's action), or
    /// `"-"` on a failed lookup.
    pub automorphism: &'static str,
    /// The 5 syntheme images in the source total's declared order.
    pub synthemes: Vec<SynthemeImage>,
}

/// One enumeration record: everything the structure becomes under one
/// permutation.
#[derive(Debug, Clone, Serialize)]
pub struct PermutationRecord {
    /// 1-based position in the lexicographic enumeration, 1..=720.
    pub index: usize,
    /// The permutation itself.
    pub permutation: Permutation,
    /// Tuple rendering of the permutation, e.g. `(2, 1, 3, 4, 5, 6)`.
    pub display: String,
    /// The 30-letter label sequence, totals in catalog order.
    pub label: String,
    /// Per-total images in catalog order.
    pub totals: Vec<TotalImage>,
}

/// A lookup mismatch or duplicate observation raised during enumeration.
///
/// None of these abort the run; every permutation still yields a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A transformed syntheme matched no catalog entry.
    SynthemeMismatch {
        /// Record index the mismatch occurred in.
        index: usize,
        /// Source total being transformed.
        total: &'static str,
        /// Letter of the source syntheme.
        source: char,
        /// The normalized duads that failed to resolve.
        duads: [Duad; 3],
    },
    /// A transformed total matched no catalog entry.
    TotalMismatch {
        /// Record index the mismatch occurred in.
        index: usize,
        /// Source total being transformed.
        total: &'static str,
        /// The 5 resolved letters that failed to resolve as a total.
        letters: [char; 5],
    },
    /// A label sequence was seen more than once.
    DuplicateLabel {
        /// Record index of the repeat occurrence.
        index: usize,
        /// The repeated label sequence.
        label: String,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::SynthemeMismatch { index, total, source, duads } => {
                write!(f, "record {index}: mismatched syntheme {source} in {total}:")?;
                for d in duads {
                    write!(f, " ({}, {})", d.low(), d.high())?;
                }
                Ok(())
            }
            Diagnostic::TotalMismatch { index, total, letters } => {
                let letters: String = letters.iter().collect();
                write!(f, "record {index}: mismatched total {total}: {letters}")
            }
            Diagnostic::DuplicateLabel { index, label } => {
                write!(f, "record {index}: duplicate {label}")
            }
        }
    }
}

/// The result of a full run: all 720 records plus the occurrence registry
/// and every diagnostic raised along the way.
#[derive(Debug)]
pub struct Enumeration {
    /// One record per permutation, in lexicographic order.
    pub records: Vec<PermutationRecord>,
    /// Occurrence counts per label sequence.
    pub registry: DuplicateRegistry,
    /// Mismatch and duplicate observations, in the order raised.
    pub diagnostics: Vec<Diagnostic>,
}

/// Enumerates all 720 permutations against [`Catalog::full()`].
#[must_use]
pub fn enumerate() -> Enumeration {
    let mut records = Vec::with_capacity(720);
    let mut registry = DuplicateRegistry::new();
    let mut diagnostics = Vec::new();

    for (i, p) in Permutation::all().into_iter().enumerate() {
        let index = i + 1;
        let record = transform(index, p, &mut diagnostics);
        if registry.record(&record.label) > 1 {
            diagnostics.push(Diagnostic::DuplicateLabel { index, label: record.label.clone() });
        }
        records.push(record);
    }

    Enumeration { records, registry, diagnostics }
}

/// Transforms the full structure under one permutation, appending any
/// lookup mismatches to `diagnostics`.
pub fn transform(
    index: usize,
    p: Permutation,
    diagnostics: &mut Vec<Diagnostic>,
) -> PermutationRecord {
    let catalog = Catalog::full();
    let resolver = Resolver::full();

    let mut label = String::with_capacity(30);
    let mut totals = Vec::with_capacity(catalog.totals.len());

    for total in &catalog.totals {
        let mut letters = [SENTINEL; 5];
        let mut images = Vec::with_capacity(total.synthemes.len());

        for (k, &source) in total.synthemes.iter().enumerate() {
            // Total membership is validated against the catalog by the
            // structure crate's tests; an unknown letter is a data error
            // and is reported the same way as a failed resolution.
            let image = match catalog.syntheme(source) {
                Some(syntheme) => transform_syntheme(p, syntheme, resolver),
                None => SynthemeImage {
                    source,
                    raw_duads: [(0, 0); 3],
                    duads: [Duad::new(1, 2); 3],
                    name: SENTINEL,
                },
            };
            if image.name == SENTINEL {
                diagnostics.push(Diagnostic::SynthemeMismatch {
                    index,
                    total: total.name,
                    source,
                    duads: image.duads,
                });
            }
            letters[k] = image.name;
            label.push(image.name);
            images.push(image);
        }

        let automorphism = match resolver.resolve_total(letters) {
            Some(name) => name,
            None => {
                diagnostics.push(Diagnostic::TotalMismatch {
                    index,
                    total: total.name,
                    letters,
                });
                "-"
            }
        };

        totals.push(TotalImage { source: total.name, automorphism, synthemes: images });
    }

    PermutationRecord {
        index,
        permutation: p,
        display: p.to_string(),
        label,
        totals,
    }
}

fn transform_syntheme(p: Permutation, syntheme: &Syntheme, resolver: &Resolver) -> SynthemeImage {
    let mut raw = [(0u8, 0u8); 3];
    let mut duads = [Duad::new(1, 2); 3];
    for (k, d) in syntheme.duads.iter().enumerate() {
        let x = p.apply(d.low());
        let y = p.apply(d.high());
        raw[k] = (x, y);
        duads[k] = Duad::new(x, y);
    }
    let name = resolver.resolve_syntheme(duads).unwrap_or(SENTINEL);
    SynthemeImage { source: syntheme.name, raw_duads: raw, duads, name }
}
