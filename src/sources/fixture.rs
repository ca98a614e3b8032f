use crate::core::Reading;
use crate::sources::{JsonFileSource, ReadingSource, SourceError, TimeWindow};

/// Three captures of the gauge taken on 2022-10-20, as the detection stage
/// stored them. Used for local runs without a backing store.
pub fn bundled_fixture() -> Vec<Reading> {
    let captures: [(&str, &str, &[(&str, &str)]); 3] = [
        (
            "2022-10-20T05:41:13.162Z",
            "0049.jpg",
            &[
                ("Text_0", "R26"),
                ("Text_1", "but"),
                ("Text_2", "and"),
                ("Text_3", "86"),
                ("Text_4", "R26"),
                ("Text_5", "but"),
                ("Text_6", "and"),
                ("Text_7", "86"),
            ],
        ),
        (
            "2022-10-20T04:41:43.977Z",
            "0006.jpg",
            &[
                ("Text_0", "<<<<<<<<"),
                ("Text_1", "DUTDOOR"),
                ("Text_2", "222\""),
                ("Text_3", "85"),
                ("Text_4", "<<<<<<<<"),
                ("Text_5", "DUTDOOR"),
                ("Text_6", "222\""),
                ("Text_7", "85"),
            ],
        ),
        (
            "2022-10-20T06:55:56.508Z",
            "0168.jpg",
            &[
                ("Text_0", "12:34'"),
                ("Text_1", "#35."),
                ("Text_2", "87"),
                ("Text_3", "OUTDOOR"),
                ("Text_4", "Bags TRASH"),
                ("Text_5", "PUSH 2932 ON ZADI ® IGNITION"),
                ("Text_6", "12:34'"),
                ("Text_7", "#35."),
                ("Text_8", "87"),
                ("Text_9", "OUTDOOR"),
                ("Text_10", "Bags"),
                ("Text_11", "TRASH"),
                ("Text_12", "PUSH"),
                ("Text_13", "2932"),
                ("Text_14", "ON"),
                ("Text_15", "ZADI"),
                ("Text_16", "®"),
                ("Text_17", "IGNITION"),
            ],
        ),
    ];

    captures
        .iter()
        .map(|(ts, image, texts)| {
            texts.iter().fold(
                Reading::new(Some(*ts)).with_fragment("Image", *image),
                |r, (k, v)| r.with_fragment(*k, *v),
            )
        })
        .collect()
}

/// Fixed input for debugging, returned as-is for every window.
#[derive(Debug, Clone)]
pub struct FixtureSource {
    label: String,
    readings: Vec<Reading>,
}

impl FixtureSource {
    pub fn new<L: Into<String>>(label: L, readings: Vec<Reading>) -> Self {
        Self {
            label: label.into(),
            readings,
        }
    }

    pub fn bundled() -> Self {
        Self::new("bundled", bundled_fixture())
    }

    /// Loads the fixture from a JSON file once. Windowing is not applied.
    pub fn from_json_file(source: &JsonFileSource) -> Result<Self, SourceError> {
        let all = source.read_all()?;
        Ok(Self::new(source.path().display().to_string(), all))
    }
}

impl ReadingSource for FixtureSource {
    fn label(&self) -> String {
        format!("fixture {}", self.label)
    }

    fn fetch(&self, _window: &TimeWindow) -> Result<Vec<Reading>, SourceError> {
        Ok(self.readings.clone())
    }
}
