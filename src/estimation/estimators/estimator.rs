use crate::core::NormalizedReading;
use crate::estimation::Estimate;

/// Turns a batch of normalized readings into one level estimate.
///
/// The batch is ordered newest first (see [`normalize`](crate::estimation::normalize)).
/// Implementations must be pure: the same batch always yields the same
/// estimate, and nothing carries over between calls.
pub trait LevelEstimator {
    /// Short identifier used in logs.
    fn name(&self) -> &'static str;

    fn estimate(&self, readings: &[NormalizedReading]) -> Estimate;
}
