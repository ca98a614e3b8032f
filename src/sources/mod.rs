mod fixture;
mod json_file;
mod simulated;
mod source;
mod time_window;

pub use fixture::{FixtureSource, bundled_fixture};
pub use json_file::JsonFileSource;
pub use simulated::SimulatedGauge;
pub use source::{ReadingSource, SourceError};
pub use time_window::TimeWindow;
