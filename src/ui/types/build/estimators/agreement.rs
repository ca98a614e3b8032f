use crate::estimation::AgreementEstimator;
use crate::ui::types::build::BuildError;
use crate::ui::types::choices::AgreementParameters;

impl TryFrom<AgreementParameters> for AgreementEstimator {
    type Error = BuildError;

    fn try_from(p: AgreementParameters) -> Result<Self, Self::Error> {
        let window = usize::try_from(p.window)
            .map_err(|_| BuildError::InvalidParameter("window too large for usize".into()))?;
        AgreementEstimator::new(p.tolerance, window).map_err(BuildError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_build() {
        let e = AgreementEstimator::try_from(AgreementParameters::default()).unwrap();
        assert_eq!((e.tolerance(), e.window()), (4, 5));
    }

    #[test]
    fn zero_window_is_rejected() {
        let p = AgreementParameters {
            window: 0,
            ..AgreementParameters::default()
        };
        assert!(matches!(
            AgreementEstimator::try_from(p),
            Err(BuildError::Io(_))
        ));
    }
}
