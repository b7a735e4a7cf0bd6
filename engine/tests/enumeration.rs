//! Full-run invariants of the permutation enumeration.
//!
//! These run the complete 720-permutation enumeration against the canonical
//! catalog and assert the structural guarantees the mathematics provides.

use heteronym_engine::{enumerate, transform, Permutation, IDENTITY_LABEL};
use heteronym_structure::{Catalog, Duad, Resolver};

#[test]
fn produces_720_records_with_stable_indices() {
    let run = enumerate();
    assert_eq!(run.records.len(), 720);
    for (i, record) in run.records.iter().enumerate() {
        assert_eq!(record.index, i + 1);
    }
    assert_eq!(run.records[0].permutation, Permutation::identity());
    assert_eq!(run.records[719].permutation.values(), [6, 5, 4, 3, 2, 1]);
}

#[test]
fn every_label_is_30_catalog_letters() {
    let run = enumerate();
    for record in &run.records {
        assert_eq!(record.label.chars().count(), 30, "record {}", record.index);
        for c in record.label.chars() {
            assert!(('A'..='O').contains(&c), "record {}: letter {}", record.index, c);
        }
    }
}

#[test]
fn identity_label_matches_the_catalog_concatenation() {
    let run = enumerate();
    assert_eq!(run.records[0].label, IDENTITY_LABEL);
}

#[test]
fn no_lookup_mismatches_over_the_full_run() {
    let run = enumerate();
    assert!(
        run.diagnostics.is_empty(),
        "unexpected diagnostics: {:?}",
        run.diagnostics
    );
}

#[test]
fn label_sequences_are_injective() {
    let run = enumerate();
    assert_eq!(run.registry.len(), 720);
    assert_eq!(run.registry.max_count(), 1);
    assert_eq!(run.registry.duplicates().count(), 0);
}

#[test]
fn automorphism_names_permute_the_totals() {
    let run = enumerate();
    for record in &run.records {
        let mut names: Vec<&str> = record.totals.iter().map(|t| t.automorphism).collect();
        names.sort_unstable();
        assert_eq!(
            names,
            vec!["t1", "t2", "t3", "t4", "t5", "t6"],
            "record {}",
            record.index
        );
    }
}

#[test]
fn rerunning_reproduces_identical_labels() {
    let first = enumerate();
    let second = enumerate();
    for (a, b) in first.records.iter().zip(&second.records) {
        assert_eq!(a.permutation, b.permutation);
        assert_eq!(a.label, b.label);
    }
}

/// Resolves the structure transformed by `q` then `p`, one element at a time.
fn label_by_sequential_application(p: Permutation, q: Permutation) -> String {
    let catalog = Catalog::full();
    let resolver = Resolver::full();
    let mut label = String::with_capacity(30);
    for total in &catalog.totals {
        for &name in &total.synthemes {
            let syntheme = catalog.syntheme(name).unwrap();
            let mut duads = syntheme.duads;
            for d in &mut duads {
                *d = Duad::new(p.apply(q.apply(d.low())), p.apply(q.apply(d.high())));
            }
            label.push(resolver.resolve_syntheme(duads).unwrap_or('-'));
        }
    }
    label
}

#[test]
fn transforming_in_sequence_equals_transforming_by_the_composition() {
    let pairs = [
        ([2, 1, 3, 4, 5, 6], [1, 3, 2, 4, 5, 6]),
        ([2, 3, 4, 5, 6, 1], [6, 5, 4, 3, 2, 1]),
        ([3, 1, 2, 6, 4, 5], [2, 4, 6, 1, 3, 5]),
        ([1, 2, 3, 5, 6, 4], [4, 5, 6, 1, 2, 3]),
        ([5, 6, 1, 2, 3, 4], [2, 1, 4, 3, 6, 5]),
        ([6, 4, 2, 5, 3, 1], [3, 6, 1, 5, 2, 4]),
    ];
    for (pv, qv) in pairs {
        let p = Permutation::new(pv).unwrap();
        let q = Permutation::new(qv).unwrap();
        let mut diagnostics = Vec::new();
        let composed = transform(0, p.compose(q), &mut diagnostics);
        assert!(diagnostics.is_empty());
        assert_eq!(
            composed.label,
            label_by_sequential_application(p, q),
            "p = {p}, q = {q}"
        );
    }
}
