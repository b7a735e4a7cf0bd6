//! Permutation engine for the S6 syntheme structure.
//!
//! The `heteronym-engine` crate enumerates all 720 permutations of (1..6) in
//! lexicographic order and, for each one, applies it to every syntheme of
//! every synthematic total, resolving each image back to its canonical name.
//! The 30 resolved letters form the permutation's label sequence, the
//! fingerprint that downstream consumers render and decode.
//!
//! # Entry Point
//!
//! ```
//! let run = heteronym_engine::enumerate();
//! assert_eq!(run.records.len(), 720);
//! assert_eq!(run.records[0].label, heteronym_engine::IDENTITY_LABEL);
//! assert!(run.diagnostics.is_empty());
//! ```
//!
//! Lookup mismatches never abort the enumeration: the affected slot gets the
//! sentinel `-` and a [`Diagnostic`] is recorded, so a catalog data error is
//! visible in the full output instead of truncating it.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod enumerate;
pub mod perm;
pub mod registry;

pub use enumerate::{
    enumerate, transform, Diagnostic, Enumeration, PermutationRecord, SynthemeImage, TotalImage,
    IDENTITY_LABEL, SENTINEL,
};
pub use perm::Permutation;
pub use registry::DuplicateRegistry;
