use crate::sources::JsonFileSource;
use crate::ui::types::build::BuildError;
use crate::ui::types::choices::JsonFileParameters;

impl TryFrom<JsonFileParameters> for JsonFileSource {
    type Error = BuildError;

    fn try_from(p: JsonFileParameters) -> Result<Self, Self::Error> {
        if p.path.as_os_str().is_empty() {
            return Err(BuildError::InvalidParameter(
                "json-file source needs a path".into(),
            ));
        }
        Ok(JsonFileSource::new(p.path))
    }
}
