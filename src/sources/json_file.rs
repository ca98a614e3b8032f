use crate::core::Reading;
use crate::sources::{ReadingSource, SourceError, TimeWindow};
use std::fs;
use std::path::{Path, PathBuf};

/// Readings stored in a JSON file, either as one array of records or as
/// newline-delimited records.
///
/// The file is re-read on every fetch. Only readings whose capture instant
/// falls in the requested window are returned.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Every record in the file, regardless of capture instant.
    pub(crate) fn read_all(&self) -> Result<Vec<Reading>, SourceError> {
        let text = fs::read_to_string(&self.path).map_err(|source| SourceError::Io {
            path: self.path.clone(),
            source,
        })?;

        if text.trim_start().starts_with('[') {
            return serde_json::from_str(&text).map_err(|source| SourceError::Malformed {
                path: self.path.clone(),
                line: None,
                source,
            });
        }

        let mut out = Vec::new();
        for (i, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let reading = serde_json::from_str(line).map_err(|source| SourceError::Malformed {
                path: self.path.clone(),
                line: Some(i + 1),
                source,
            })?;
            out.push(reading);
        }
        Ok(out)
    }
}

impl ReadingSource for JsonFileSource {
    fn label(&self) -> String {
        format!("json-file {}", self.path.display())
    }

    fn fetch(&self, window: &TimeWindow) -> Result<Vec<Reading>, SourceError> {
        let all = self.read_all()?;
        let total = all.len();
        let recent: Vec<Reading> = all.into_iter().filter(|r| window.admits(r)).collect();
        log::debug!(
            "{}: {} of {} reading(s) inside window",
            self.label(),
            recent.len(),
            total
        );
        Ok(recent)
    }
}
