use crate::sources::{FixtureSource, JsonFileSource};
use crate::ui::types::build::BuildError;
use crate::ui::types::choices::FixtureParameters;

impl TryFrom<FixtureParameters> for FixtureSource {
    type Error = BuildError;

    fn try_from(p: FixtureParameters) -> Result<Self, Self::Error> {
        match p.path {
            Some(path) => Ok(FixtureSource::from_json_file(&JsonFileSource::new(path))?),
            None => Ok(FixtureSource::bundled()),
        }
    }
}
