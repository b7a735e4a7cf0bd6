//! The fixed combinatorial structure behind the outer automorphism of S6,
//! encoded as typed Rust data.
//!
//! The `heteronym-structure` crate provides the 15 synthemes (partitions of
//! {1..6} into 3 disjoint pairs) and the 6 synthematic totals (sets of 5
//! synthemes covering all 15 duads), as drawn on Greg Egan's diagram of the
//! Tutte–Coxeter graph, together with a constant-time resolver that maps a
//! transformed syntheme or total back to its canonical name.
//!
//! # Entry Points
//!
//! ```
//! let catalog = heteronym_structure::Catalog::full();
//! assert_eq!(catalog.synthemes.len(), 15);
//! assert_eq!(catalog.totals.len(), 6);
//!
//! let resolver = heteronym_structure::Resolver::full();
//! let duads = catalog.synthemes[0].duads;
//! assert_eq!(resolver.resolve_syntheme(duads), Some('A'));
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod catalog;
pub mod model;
pub mod resolver;

pub use model::{Catalog, Duad, Syntheme, Total};
pub use resolver::Resolver;
