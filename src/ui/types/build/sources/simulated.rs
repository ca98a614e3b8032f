use crate::sources::SimulatedGauge;
use crate::ui::types::build::BuildError;
use crate::ui::types::choices::{MAX_SIMULATED_CAPTURES, SimulatedParameters};
use chrono::TimeDelta;
use std::convert::TryFrom;

impl TryFrom<SimulatedParameters> for SimulatedGauge {
    type Error = BuildError;

    fn try_from(parameters: SimulatedParameters) -> Result<Self, Self::Error> {
        if !(0.0..=1.0).contains(&parameters.noise_pct) {
            return Err(BuildError::InvalidParameter(
                "noise_pct must be in [0.0, 1.0]".into(),
            ));
        }
        let noise_percentage = (parameters.noise_pct * 100.0).round() as u32;

        if parameters.count > MAX_SIMULATED_CAPTURES {
            return Err(BuildError::InvalidParameter(format!(
                "count must be at most {MAX_SIMULATED_CAPTURES}"
            )));
        }
        let count = usize::try_from(parameters.count)
            .map_err(|_| BuildError::InvalidParameter("count too large for usize".into()))?;

        let interval = i64::try_from(parameters.interval_minutes)
            .ok()
            .and_then(TimeDelta::try_minutes)
            .ok_or_else(|| BuildError::InvalidParameter("interval_minutes out of range".into()))?;

        SimulatedGauge::new(
            parameters.start_level,
            parameters.drain_per_reading,
            count,
            interval,
            noise_percentage,
            parameters.seed,
        )
        .map_err(BuildError::from)
    }
}
