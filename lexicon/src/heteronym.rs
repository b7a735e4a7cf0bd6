//! Pseudo-author composition.

use serde::Serialize;

use crate::decoder::{select_word, GIVEN_NAME_POSITIONS, SURNAME_POSITIONS};
use crate::vocabulary::Vocabulary;

/// A pseudo-author decoded from one label sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Heteronym {
    /// Index of the permutation record the name was decoded from.
    pub index: usize,
    /// Given name, from label positions [2, 3] into the `given_names` list.
    pub given: String,
    /// Surname, from label positions [0, 1] into the `surnames` list.
    pub surname: String,
    /// Composed full name, `"<given> <surname>"`.
    pub name: String,
}

impl Heteronym {
    /// Decodes the heteronym keyed by `label`.
    #[must_use]
    pub fn from_label(
        index: usize,
        label: &str,
        given_names: &Vocabulary,
        surnames: &Vocabulary,
    ) -> Heteronym {
        let given = select_word(given_names, label, &GIVEN_NAME_POSITIONS).to_string();
        let surname = select_word(surnames, label, &SURNAME_POSITIONS).to_string();
        let name = format!("{given} {surname}");
        Heteronym { index, given, surname, name }
    }
}
