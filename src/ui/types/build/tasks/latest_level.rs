use crate::core::FragmentKeys;
use crate::tasks::LatestLevelTask;
use crate::ui::types::build::{BuildError, build_estimator, build_source};
use crate::ui::types::choices::{LatestLevelParams, MAX_WINDOW_HOURS};
use chrono::TimeDelta;

impl TryFrom<LatestLevelParams> for LatestLevelTask {
    type Error = BuildError;

    fn try_from(p: LatestLevelParams) -> Result<Self, Self::Error> {
        if p.text_prefix.is_empty() {
            return Err(BuildError::InvalidParameter(
                "text_prefix must not be empty".into(),
            ));
        }
        if p.window_hours > MAX_WINDOW_HOURS {
            return Err(BuildError::InvalidParameter(format!(
                "window_hours must be at most {MAX_WINDOW_HOURS}"
            )));
        }
        let window = i64::try_from(p.window_hours)
            .ok()
            .and_then(TimeDelta::try_hours)
            .ok_or_else(|| BuildError::InvalidParameter("window_hours out of range".into()))?;

        let source = build_source(p.source)?;
        let estimator = build_estimator(p.estimator)?;
        let keys = FragmentKeys::new(p.text_prefix, p.ignored_prefixes);

        LatestLevelTask::new(source, estimator, keys, window).map_err(BuildError::from)
    }
}
