mod agreement_estimator;
mod estimator;
mod running_mean;

pub use agreement_estimator::{AgreementEstimator, DEFAULT_TOLERANCE, DEFAULT_WINDOW};
pub use estimator::LevelEstimator;
pub use running_mean::RunningMean;
