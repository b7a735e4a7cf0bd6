//! Vocabularies and the label-sequence decoder.
//!
//! The `heteronym-lexicon` crate loads newline-delimited word lists and
//! decodes fixed positions of a 30-letter label sequence into indices over
//! them, composing one pseudo-author name per permutation record.
//!
//! # Entry Points
//!
//! ```
//! use heteronym_lexicon::{decode_index, Heteronym, Vocabulary};
//!
//! let surnames = Vocabulary::from_words("surnames", vec!["Alfa".into(), "Beta".into()])?;
//! let given = Vocabulary::from_words("given_names", vec!["Ana".into()])?;
//!
//! // Positions [0, 1] of "CB..." decode to 2 + 15 * 1 = 17.
//! assert_eq!(decode_index("CBAAA", &[0, 1]), 17);
//!
//! let h = Heteronym::from_label(1, "CBAAA", &given, &surnames);
//! assert_eq!(h.name, "Ana Beta"); // 17 wraps to index 1 of 2
//! # Ok::<(), heteronym_lexicon::LexiconError>(())
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod decoder;
pub mod heteronym;
pub mod vocabulary;

pub use decoder::{decode_index, select_word, GIVEN_NAME_POSITIONS, SURNAME_POSITIONS};
pub use heteronym::Heteronym;
pub use vocabulary::{LexiconError, Vocabulary};
