//! Saving a generated report as a Markdown file.

use chrono::NaiveDate;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("No report to export")]
    NothingToExport,
    #[error("Failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// `review-report-YYYY-MM-DD.md`
pub fn report_file_name(date: NaiveDate) -> String {
    format!("review-report-{}.md", date.format("%Y-%m-%d"))
}

/// Write `content` into `dir`, creating the directory if needed.
/// An existing file for the same date is overwritten.
pub fn export_report(dir: &Path, content: &str, date: NaiveDate) -> Result<PathBuf, ExportError> {
    let path = dir.join(report_file_name(date));
    std::fs::create_dir_all(dir).map_err(|source| ExportError::Io {
        path: dir.to_path_buf(),
        source,
    })?;
    std::fs::write(&path, content).map_err(|source| ExportError::Io {
        path: path.clone(),
        source,
    })?;
    tracing::info!(path = %path.display(), bytes = content.len(), "Report exported");
    Ok(path)
}
