use crate::core::Reading;
use crate::sources::TimeWindow;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed reading in {}{}: {source}", .path.display(), line_suffix(.line))]
    Malformed {
        path: PathBuf,
        line: Option<usize>,
        #[source]
        source: serde_json::Error,
    },
}

fn line_suffix(line: &Option<usize>) -> String {
    line.map(|l| format!(" (line {l})")).unwrap_or_default()
}

/// Supplier of raw OCR readings for one estimation request.
///
/// Sources own the windowing policy: a source answers with the readings it
/// considers recent for `window`, in any order. An empty batch is a valid
/// answer and distinct from a failure.
pub trait ReadingSource {
    /// Human-readable description used in logs.
    fn label(&self) -> String;

    /// Fetches the readings for `window`.
    ///
    /// Implementations must not alter stored data. Returns an error only when
    /// the backing store itself cannot be read.
    fn fetch(&self, window: &TimeWindow) -> Result<Vec<Reading>, SourceError>;
}
