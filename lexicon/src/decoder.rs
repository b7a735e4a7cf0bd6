//! Positional base-15 decoding of label sequences.
//!
//! Each label letter `A`..`O` is a base-15 digit 0..14. A sequence of
//! positions decodes least-significant first, and the raw value is reduced
//! modulo the vocabulary length when a word is selected.

use crate::vocabulary::Vocabulary;

/// Label positions that key the surname lookup.
pub const SURNAME_POSITIONS: [usize; 2] = [0, 1];

/// Label positions that key the given-name lookup.
pub const GIVEN_NAME_POSITIONS: [usize; 2] = [2, 3];

/// The base-15 digit of a label letter, or `None` for anything outside
/// `A`..`O` (e.g. the mismatch sentinel `-`).
#[must_use]
pub fn digit(letter: char) -> Option<usize> {
    if letter.is_ascii_uppercase() && letter <= 'O' {
        Some(letter as usize - 'A' as usize)
    } else {
        None
    }
}

/// Decodes the label letters at `positions` into a raw index.
///
/// Positions are taken least-significant first: the raw index is
/// `Σ digit(label[positions[k]]) * 15^k`. The function is total: a position
/// past the end of the label, or a letter with no digit (the sentinel),
/// contributes 0.
#[must_use]
pub fn decode_index(label: &str, positions: &[usize]) -> usize {
    let letters: Vec<char> = label.chars().collect();
    let mut raw = 0usize;
    let mut weight = 1usize;
    for &pos in positions {
        let d = letters.get(pos).copied().and_then(digit).unwrap_or(0);
        raw += d * weight;
        weight *= 15;
    }
    raw
}

/// Selects the word keyed by the label letters at `positions`, wrapping
/// modulo the vocabulary length.
#[must_use]
pub fn select_word<'a>(vocabulary: &'a Vocabulary, label: &str, positions: &[usize]) -> &'a str {
    vocabulary.word(decode_index(label, positions))
}
