//! `heteronym` — Enumerates the 720 permutations of S6 over the syntheme
//! structure and renders them, with one decoded pseudo-author per
//! permutation.
//!
//! **Outputs (`--output`, default `./output`):**
//! - `structure.html` — the data directory's template rendered over all 720
//!   permutation records and heteronyms
//! - `heteronyms.json` — the decoded pseudo-authors
//!
//! **Usage:**
//! ```
//! heteronym [--data <dir>] [--output <dir>]
//! ```
//!
//! Lookup-mismatch and duplicate-label diagnostics go to stderr, never into
//! the generated files. A missing template or vocabulary exits non-zero
//! with a message.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use heteronym_site::generate;

/// Render the S6 syntheme structure under all 720 permutations.
#[derive(Parser)]
#[command(
    name = "heteronym",
    about = "Render the S6 syntheme structure under all 720 permutations"
)]
struct Args {
    /// Directory containing the template and word lists.
    #[arg(long, default_value = "./data")]
    data: PathBuf,

    /// Directory to write output into.
    #[arg(long, default_value = "./output")]
    output: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let report = generate(&args.data, &args.output)?;

    for diagnostic in &report.diagnostics {
        eprintln!("{diagnostic}");
    }

    println!("Enumerated {} permutations, {} heteronyms.", report.records, report.heteronyms);
    for path in &report.outputs {
        println!("  Wrote: {}", path.display());
    }

    Ok(())
}
