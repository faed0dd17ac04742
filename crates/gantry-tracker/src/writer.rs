//! Persisting issue records as line-delimited JSON.

use std::path::Path;

use gantry_core::error::{Result, TrackerError};
use tracing::info;

use crate::record::IssueRecord;

/// Write records as one JSON object per line, replacing any existing file.
///
/// Output is UTF-8 with non-ASCII characters unescaped. Returns the number of
/// records written; whether the tracker can import them is not verified here.
pub fn write_records(path: &Path, records: &[IssueRecord]) -> Result<usize> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(TrackerError::Io)?;
        }
    }

    let mut out = String::new();
    for record in records {
        out.push_str(&serde_json::to_string(record).map_err(TrackerError::Json)?);
        out.push('\n');
    }

    std::fs::write(path, out).map_err(|e| TrackerError::WriteFailed {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    info!(path = %path.display(), count = records.len(), "wrote issue records");
    Ok(records.len())
}
