use crate::core::FragmentKeys;
use crate::estimation::{Estimate, LevelEstimator, normalize};
use crate::sources::{ReadingSource, SourceError, TimeWindow};
use chrono::{DateTime, TimeDelta, Utc};
use serde::Serialize;
use std::io::{self, ErrorKind};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TaskError {
    /// The source could not answer at all.
    #[error("No results: {0}")]
    Source(#[from] SourceError),

    /// The source answered with an empty batch.
    #[error("No recent results")]
    NoRecentReadings,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LevelReport {
    pub estimate: Estimate,
    /// Readings returned by the source.
    pub fetched: usize,
    /// Readings left after timestamp filtering.
    pub usable: usize,
    pub window: TimeWindow,
}

/// One "what is the battery level now" request: fetch the recent readings,
/// normalize them and hand them to the estimator.
pub struct LatestLevelTask {
    source: Box<dyn ReadingSource>,
    estimator: Box<dyn LevelEstimator>,
    keys: FragmentKeys,
    window: TimeDelta,
}

impl LatestLevelTask {
    pub fn new(
        source: Box<dyn ReadingSource>,
        estimator: Box<dyn LevelEstimator>,
        keys: FragmentKeys,
        window: TimeDelta,
    ) -> Result<Self, io::Error> {
        if window <= TimeDelta::zero() {
            return Err(io::Error::new(
                ErrorKind::InvalidInput,
                "time window must be positive",
            ));
        }
        Ok(Self {
            source,
            estimator,
            keys,
            window,
        })
    }

    pub fn window(&self) -> TimeDelta {
        self.window
    }

    pub fn run(&self, now: DateTime<Utc>) -> Result<LevelReport, TaskError> {
        let window = TimeWindow::ending_at(now, self.window);
        let readings = self.source.fetch(&window).inspect_err(|e| {
            log::warn!("{} failed: {e}", self.source.label());
        })?;

        if readings.is_empty() {
            log::info!("{} returned no readings in window", self.source.label());
            return Err(TaskError::NoRecentReadings);
        }

        let normalized = normalize(&readings, &self.keys);
        if log::log_enabled!(log::Level::Debug) {
            match serde_json::to_string_pretty(&normalized) {
                Ok(dump) => log::debug!("normalized readings:\n{dump}"),
                Err(e) => log::debug!("normalized readings not printable: {e}"),
            }
        }

        let estimate = self.estimator.estimate(&normalized);
        match estimate.value() {
            Some(level) => log::info!("battery level {level:.2}"),
            None => log::info!("no usable battery level in {} reading(s)", readings.len()),
        }

        Ok(LevelReport {
            estimate,
            fetched: readings.len(),
            usable: normalized.len(),
            window,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Reading;
    use crate::estimation::{AgreementEstimator, Strategy};
    use crate::sources::{FixtureSource, bundled_fixture};
    use crate::testing::{FailingSource, VecSource, reading_at, series_origin};
    use chrono::TimeZone;
    use std::rc::Rc;

    fn task_over(source: Box<dyn ReadingSource>) -> LatestLevelTask {
        LatestLevelTask::new(
            source,
            Box::new(AgreementEstimator::default()),
            FragmentKeys::default(),
            TimeDelta::days(3),
        )
        .unwrap()
    }

    #[test]
    fn ctor_guards() {
        let err = LatestLevelTask::new(
            Box::new(VecSource::new(vec![])),
            Box::new(AgreementEstimator::default()),
            FragmentKeys::default(),
            TimeDelta::zero(),
        )
        .err()
        .unwrap();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn bundled_fixture_reports_87() {
        let task = task_over(Box::new(FixtureSource::bundled()));
        let report = task.run(series_origin()).unwrap();
        assert_eq!(report.estimate.value(), Some(87.0));
        assert_eq!(report.estimate.strategy(), Some(Strategy::SingleCandidate));
        assert_eq!(report.fetched, 3);
        assert_eq!(report.usable, 3);
    }

    #[test]
    fn window_ends_at_now_and_spans_configured_duration() {
        struct Shared(Rc<VecSource>);
        impl ReadingSource for Shared {
            fn label(&self) -> String {
                self.0.label()
            }
            fn fetch(&self, window: &TimeWindow) -> Result<Vec<Reading>, SourceError> {
                self.0.fetch(window)
            }
        }

        let inner = Rc::new(VecSource::new(bundled_fixture()));
        let task = task_over(Box::new(Shared(Rc::clone(&inner))));
        let now = Utc.with_ymd_and_hms(2022, 10, 21, 0, 0, 0).unwrap();
        let report = task.run(now).unwrap();

        let w = inner.last_window().unwrap();
        assert_eq!(inner.fetches(), 1);
        assert_eq!(w.end, now);
        assert_eq!(w.end - w.start, TimeDelta::days(3));
        assert_eq!(report.window, w);
    }

    #[test]
    fn empty_batch_is_no_recent_results() {
        let task = task_over(Box::new(VecSource::new(vec![])));
        let err = task.run(series_origin()).unwrap_err();
        assert!(matches!(err, TaskError::NoRecentReadings));
        assert_eq!(err.to_string(), "No recent results");
    }

    #[test]
    fn source_failure_is_propagated() {
        let task = task_over(Box::new(FailingSource));
        let err = task.run(series_origin()).unwrap_err();
        assert!(matches!(err, TaskError::Source(SourceError::Io { .. })));
        assert!(err.to_string().starts_with("No results"));
    }

    #[test]
    fn undated_only_batch_reports_no_data() {
        let task = task_over(Box::new(VecSource::new(vec![
            Reading::new(None::<String>).with_fragment("Text_0", "86"),
        ])));
        let report = task.run(series_origin()).unwrap();
        assert_eq!(report.estimate, Estimate::NoData);
        assert_eq!(report.fetched, 1);
        assert_eq!(report.usable, 0);
    }

    #[test]
    fn running_twice_gives_the_same_report() {
        let task = task_over(Box::new(VecSource::new(vec![
            reading_at("2022-10-20T06:00:00Z", &["10"]),
            reading_at("2022-10-20T05:00:00Z", &["90"]),
        ])));
        let first = task.run(series_origin()).unwrap();
        let second = task.run(series_origin()).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.estimate.value(), Some(50.0));
    }

    #[test]
    fn extreme_window_runs_instead_of_overflowing() {
        let task = LatestLevelTask::new(
            Box::new(FixtureSource::bundled()),
            Box::new(AgreementEstimator::default()),
            FragmentKeys::default(),
            TimeDelta::hours(2_500_000_000),
        )
        .unwrap();
        let report = task.run(series_origin()).unwrap();
        assert_eq!(report.window.start, DateTime::<Utc>::MIN_UTC);
        assert_eq!(report.estimate.value(), Some(87.0));
    }
}
