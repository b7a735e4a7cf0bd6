//! Word-list loading and validation.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// A failure to obtain a usable vocabulary.
#[derive(Debug, Error)]
pub enum LexiconError {
    /// The word-list file is absent or unreadable.
    #[error("cannot read vocabulary '{category}' from {}: {source}", path.display())]
    Missing {
        /// Vocabulary category (also the file name).
        category: String,
        /// Path that was attempted.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
    /// The word list has zero words. Selection reduces an index modulo the
    /// list length, so an empty list can never be selected from; this is
    /// checked at construction rather than at every selection.
    #[error("vocabulary '{category}' is empty")]
    Empty {
        /// Vocabulary category.
        category: String,
    },
}

/// An ordered, non-empty word list. Read-only after load.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    category: String,
    words: Vec<String>,
}

impl Vocabulary {
    /// Builds a vocabulary from already-parsed words.
    ///
    /// # Errors
    ///
    /// Returns [`LexiconError::Empty`] if `words` has no entries.
    pub fn from_words(category: &str, words: Vec<String>) -> Result<Vocabulary, LexiconError> {
        if words.is_empty() {
            return Err(LexiconError::Empty { category: category.to_string() });
        }
        Ok(Vocabulary { category: category.to_string(), words })
    }

    /// Loads the vocabulary file `<dir>/<category>`: one word per line,
    /// blank lines and `#` comment lines skipped, surrounding whitespace
    /// trimmed.
    ///
    /// # Errors
    ///
    /// Returns [`LexiconError::Missing`] if the file cannot be read and
    /// [`LexiconError::Empty`] if it yields no words.
    pub fn load(dir: &Path, category: &str) -> Result<Vocabulary, LexiconError> {
        let path = dir.join(category);
        let contents = fs::read_to_string(&path).map_err(|source| LexiconError::Missing {
            category: category.to_string(),
            path: path.clone(),
            source,
        })?;
        let words = contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(str::to_string)
            .collect();
        Vocabulary::from_words(category, words)
    }

    /// The category this vocabulary was loaded as.
    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    /// The number of words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false: emptiness is rejected at construction.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// The word at `raw_index`, wrapping modulo the list length.
    #[must_use]
    pub fn word(&self, raw_index: usize) -> &str {
        // len >= 1 by construction, so the reduction is well defined.
        &self.words[raw_index % self.words.len()]
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn from_words_rejects_empty_lists() {
        let err = Vocabulary::from_words("surnames", vec![]).unwrap_err();
        assert!(matches!(err, LexiconError::Empty { .. }));
    }

    #[test]
    fn word_wraps_modulo_length() {
        let v = Vocabulary::from_words("surnames", vec!["Alfa".into(), "Beta".into()]).unwrap();
        assert_eq!(v.word(0), "Alfa");
        assert_eq!(v.word(1), "Beta");
        assert_eq!(v.word(17), "Beta");
        assert_eq!(v.word(720), "Alfa");
    }

    #[test]
    fn load_skips_blanks_and_comments() {
        let dir = tempfile::tempdir().unwrap();
        let mut f = std::fs::File::create(dir.path().join("given_names")).unwrap();
        writeln!(f, "# Portuguese given names").unwrap();
        writeln!(f).unwrap();
        writeln!(f, "  Alberto  ").unwrap();
        writeln!(f, "Ricardo").unwrap();
        writeln!(f, "#Bernardo").unwrap();
        drop(f);

        let v = Vocabulary::load(dir.path(), "given_names").unwrap();
        assert_eq!(v.len(), 2);
        assert_eq!(v.word(0), "Alberto");
        assert_eq!(v.word(1), "Ricardo");
    }

    #[test]
    fn load_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Vocabulary::load(dir.path(), "surnames").unwrap_err();
        assert!(matches!(err, LexiconError::Missing { .. }));
        assert!(err.to_string().contains("surnames"));
    }

    #[test]
    fn load_reports_all_comment_file_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("surnames"), "# nothing here\n\n").unwrap();
        let err = Vocabulary::load(dir.path(), "surnames").unwrap_err();
        assert!(matches!(err, LexiconError::Empty { .. }));
    }
}
