use crate::estimation::{AgreementEstimator, LevelEstimator};
use crate::ui::types::build::BuildError;
use crate::ui::types::choices::EstimatorChoice;

mod agreement;

pub fn build_estimator(choice: EstimatorChoice) -> Result<Box<dyn LevelEstimator>, BuildError> {
    match choice {
        EstimatorChoice::Agreement(p) => {
            let e = AgreementEstimator::try_from(p)?;
            Ok(Box::new(e))
        }
    }
}
