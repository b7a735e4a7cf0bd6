//! Output generation for the heteronym enumeration.
//!
//! Runs the permutation engine, decodes one heteronym per record, renders
//! the user-supplied `structure.html` template over both sequences, and
//! writes the results. The engine and lexicon stay free of I/O; everything
//! that touches the filesystem lives here.
//!
//! # Entry Point
//!
//! ```no_run
//! use std::path::Path;
//!
//! let report = heteronym_site::generate(Path::new("data"), Path::new("output"))?;
//! assert!(report.diagnostics.is_empty());
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! # Output Structure
//!
//! ```text
//! output/
//!   structure.html    rendered template over { permutations, heteronyms }
//!   heteronyms.json   the 720 decoded pseudo-authors
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod render;
pub mod writer;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use heteronym_engine::{enumerate, Diagnostic};
use heteronym_lexicon::{Heteronym, Vocabulary};

/// File name of the template, looked up inside the data directory.
pub const STRUCTURE_TEMPLATE: &str = "structure.html";

/// Summary of one generation run, for the caller to report on.
#[derive(Debug)]
pub struct Report {
    /// Number of permutation records produced (always 720).
    pub records: usize,
    /// Number of heteronyms decoded (one per record).
    pub heteronyms: usize,
    /// Engine diagnostics: lookup mismatches and duplicate labels. These
    /// belong on a diagnostic stream, never inside the generated files.
    pub diagnostics: Vec<Diagnostic>,
    /// Paths written, in write order.
    pub outputs: Vec<PathBuf>,
}

/// Generates all output files from the data directory into `out_dir`.
///
/// # Errors
///
/// Returns an error if the template cannot be read or rendered, a
/// vocabulary is missing or empty, or an output file cannot be written.
pub fn generate(data_dir: &Path, out_dir: &Path) -> Result<Report> {
    let template_path = data_dir.join(STRUCTURE_TEMPLATE);
    let template = fs::read_to_string(&template_path)
        .with_context(|| format!("Cannot read template: {}", template_path.display()))?;

    let given_names = Vocabulary::load(data_dir, "given_names")?;
    let surnames = Vocabulary::load(data_dir, "surnames")?;

    let run = enumerate();
    let heteronyms: Vec<Heteronym> = run
        .records
        .iter()
        .map(|r| Heteronym::from_label(r.index, &r.label, &given_names, &surnames))
        .collect();

    let html = render::render_structure(&template, &run.records, &heteronyms)?;
    let structure_path = out_dir.join(STRUCTURE_TEMPLATE);
    writer::write(&structure_path, &html)?;

    let json = serde_json::to_string_pretty(&heteronyms)
        .context("Cannot serialize heteronyms to JSON")?;
    let json_path = out_dir.join("heteronyms.json");
    writer::write(&json_path, &json)?;

    Ok(Report {
        records: run.records.len(),
        heteronyms: heteronyms.len(),
        diagnostics: run.diagnostics,
        outputs: vec![structure_path, json_path],
    })
}
