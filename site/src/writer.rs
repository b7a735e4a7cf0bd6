//! Writes generated output files.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Writes `content` to `path`, creating parent directories as needed.
///
/// # Errors
///
/// Returns an error if a directory cannot be created or the file cannot be
/// written.
pub fn write(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Cannot create output directory: {}", parent.display()))?;
    }
    fs::write(path, content)
        .with_context(|| format!("Cannot write output file: {}", path.display()))?;
    Ok(())
}
