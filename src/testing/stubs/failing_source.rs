use crate::core::Reading;
use crate::sources::{ReadingSource, SourceError, TimeWindow};
use std::io::{Error, ErrorKind};
use std::path::PathBuf;

#[derive(Default)]
pub struct FailingSource;

impl ReadingSource for FailingSource {
    fn label(&self) -> String {
        "failing".into()
    }

    fn fetch(&self, _window: &TimeWindow) -> Result<Vec<Reading>, SourceError> {
        Err(SourceError::Io {
            path: PathBuf::from("/unreachable/readings.json"),
            source: Error::new(ErrorKind::NotFound, "store offline"),
        })
    }
}
