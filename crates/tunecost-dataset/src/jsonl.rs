use std::path::Path;

use tunecost_core::{Error, Result, TrainingRecord};

/// Outcome of decoding one non-blank dataset line.
#[derive(Debug)]
pub enum DatasetLine {
    /// Successfully decoded record.
    Record(TrainingRecord),
    /// Line that was not valid JSON; carries the decode error so the
    /// caller can log it. Skippable, never fatal.
    Invalid(serde_json::Error),
}

/// Read a JSONL dataset and classify every non-blank line.
///
/// Whitespace-only lines are dropped silently. Decode failures are
/// returned as [`DatasetLine::Invalid`] values rather than errors; the
/// only error path here is the file read itself.
pub async fn scan(path: &Path) -> Result<Vec<DatasetLine>> {
    let content = tokio::fs::read_to_string(path).await.map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            Error::DatasetNotFound(path.to_path_buf())
        } else {
            Error::Io(e)
        }
    })?;

    Ok(content
        .lines()
        .filter_map(|line| {
            let line = line.trim();
            if line.is_empty() {
                return None;
            }
            Some(match serde_json::from_str::<TrainingRecord>(line) {
                Ok(record) => DatasetLine::Record(record),
                Err(e) => DatasetLine::Invalid(e),
            })
        })
        .collect())
}
