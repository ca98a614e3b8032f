use crate::sources::{FixtureSource, JsonFileSource, ReadingSource, SimulatedGauge};
use crate::ui::types::build::BuildError;
use crate::ui::types::choices::SourceChoice;

mod fixture;
mod json_file;
mod simulated;

pub fn build_source(choice: SourceChoice) -> Result<Box<dyn ReadingSource>, BuildError> {
    match choice {
        SourceChoice::JsonFile(p) => {
            let s = JsonFileSource::try_from(p)?;
            Ok(Box::new(s))
        }
        SourceChoice::Fixture(p) => {
            let s = FixtureSource::try_from(p)?;
            Ok(Box::new(s))
        }
        SourceChoice::Simulated(p) => {
            let s = SimulatedGauge::try_from(p)?;
            Ok(Box::new(s))
        }
    }
}
