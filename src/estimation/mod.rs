mod estimate;
mod estimators;
mod normalize;

pub use estimate::{Estimate, LevelEstimate, Strategy};
pub use estimators::{
    AgreementEstimator, DEFAULT_TOLERANCE, DEFAULT_WINDOW, LevelEstimator, RunningMean,
};
pub use normalize::normalize;

use crate::core::{FragmentKeys, Reading};

/// Normalizes `readings` with the default key conventions and runs the
/// default [`AgreementEstimator`].
pub fn estimate_level(readings: &[Reading]) -> Estimate {
    let normalized = normalize(readings, &FragmentKeys::default());
    AgreementEstimator::default().estimate(&normalized)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::bundled_fixture;
    use crate::testing::reading_at;

    #[test]
    fn empty_input_is_no_data() {
        assert_eq!(estimate_level(&[]), Estimate::NoData);
    }

    #[test]
    fn bundled_fixture_reads_87() {
        let e = estimate_level(&bundled_fixture());
        assert_eq!(e.value(), Some(87.0));
        assert_eq!(e.strategy(), Some(Strategy::SingleCandidate));
    }

    #[test]
    fn undated_readings_only_is_no_data() {
        let batch = vec![Reading::new(None::<String>).with_fragment("Text_0", "86")];
        assert!(estimate_level(&batch).is_no_data());
    }

    #[test]
    fn garbled_batch_averages_recent_candidates() {
        let batch = vec![
            reading_at("2022-10-20T06:00:00Z", &["86%", "12:34'"]),
            reading_at("2022-10-20T05:00:00Z", &["8", "OUTDOOR"]),
            reading_at("2022-10-20T04:00:00Z", &["85", "87"]),
        ];
        let e = estimate_level(&batch);
        assert_eq!(e.strategy(), Some(Strategy::WindowedAverage));
        assert_eq!(e.value(), Some(86.0));
    }
}
