//! Exporters for grouped sentences and version fragments.
//!
//! All sheet results are buffered before the writer is committed: output goes
//! to a `.tmp` sibling path first and is renamed into place, so a failure
//! mid-export never leaves a partial file behind.

mod docx;
mod xlsx;

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use sentify_model::{Language, OutputFormat, Result, SentifyError, SheetSentences, VersionMap};

/// Write grouped sentences to `out` in the requested format.
pub fn export_sentences(
    sheets: &[SheetSentences],
    language: &Language,
    format: OutputFormat,
    out: &Path,
) -> Result<()> {
    let staging = staging_path(out);
    let written = match format {
        OutputFormat::Xlsx => xlsx::write_sentences(sheets, language, &staging),
        OutputFormat::Docx => docx::write_sentences(sheets, language, &staging),
    };
    if let Err(error) = written {
        let _ = fs::remove_file(&staging);
        return Err(error);
    }
    commit(&staging, out)?;
    info!(path = %out.display(), sheets = sheets.len(), "wrote sentence export");
    Ok(())
}

/// Write per-version paragraphs to `out` as a document.
pub fn export_versions(versions: &VersionMap, out: &Path) -> Result<()> {
    let staging = staging_path(out);
    if let Err(error) = docx::write_versions(versions, &staging) {
        let _ = fs::remove_file(&staging);
        return Err(error);
    }
    commit(&staging, out)?;
    info!(path = %out.display(), versions = versions.len(), "wrote version export");
    Ok(())
}

fn staging_path(out: &Path) -> PathBuf {
    let mut name = out.file_name().map(ToOwned::to_owned).unwrap_or_default();
    name.push(".tmp");
    out.with_file_name(name)
}

fn commit(staging: &Path, out: &Path) -> Result<()> {
    fs::rename(staging, out).map_err(|e| {
        let _ = fs::remove_file(staging);
        SentifyError::Io(e)
    })
}
