use crate::core::NormalizedReading;
use crate::estimation::estimators::{LevelEstimator, RunningMean};
use crate::estimation::{Estimate, LevelEstimate, Strategy};
use std::io::{Error, ErrorKind};

pub const DEFAULT_TOLERANCE: u8 = 4;
pub const DEFAULT_WINDOW: usize = 5;

/// Estimator that trusts a tight run of single readings, and averages otherwise.
///
/// Single-candidate path: when every reading shows exactly one candidate and
/// each consecutive pair differs by less than `tolerance`, the estimate is the
/// maximum of those values.
///
/// Windowed-average path: otherwise the candidates of all readings are
/// flattened newest reading first (ascending inside a reading) and the first
/// `window` of them are averaged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgreementEstimator {
    tolerance: u8,
    window: usize,
}

impl AgreementEstimator {
    pub fn new(tolerance: u8, window: usize) -> Result<Self, Error> {
        if tolerance == 0 {
            return Err(Error::new(
                ErrorKind::InvalidInput,
                "tolerance must be > 0",
            ));
        }
        if window == 0 {
            return Err(Error::new(ErrorKind::InvalidInput, "window must be > 0"));
        }
        Ok(Self { tolerance, window })
    }

    pub fn tolerance(&self) -> u8 {
        self.tolerance
    }

    pub fn window(&self) -> usize {
        self.window
    }

    #[inline]
    fn agree(&self, a: u8, b: u8) -> bool {
        a.abs_diff(b) < self.tolerance
    }

    fn single_candidate(&self, readings: &[NormalizedReading]) -> Option<LevelEstimate> {
        let values = readings
            .iter()
            .map(NormalizedReading::single_number)
            .collect::<Option<Vec<u8>>>()?;

        if !values.windows(2).all(|w| self.agree(w[0], w[1])) {
            log::debug!("single candidates disagree: {values:?}");
            return None;
        }

        let max = values.iter().copied().max()?;
        Some(LevelEstimate {
            value: f64::from(max),
            strategy: Strategy::SingleCandidate,
            candidates: values.len(),
        })
    }

    fn windowed_average(&self, readings: &[NormalizedReading]) -> Option<LevelEstimate> {
        let mean: RunningMean = readings
            .iter()
            .flat_map(|r| r.numbers.iter().copied())
            .take(self.window)
            .map(f64::from)
            .collect();

        mean.estimation().map(|value| LevelEstimate {
            value,
            strategy: Strategy::WindowedAverage,
            candidates: mean.len(),
        })
    }
}

impl Default for AgreementEstimator {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            window: DEFAULT_WINDOW,
        }
    }
}

impl LevelEstimator for AgreementEstimator {
    fn name(&self) -> &'static str {
        "agreement"
    }

    fn estimate(&self, readings: &[NormalizedReading]) -> Estimate {
        if readings.is_empty() {
            return Estimate::NoData;
        }

        let level = self
            .single_candidate(readings)
            .or_else(|| self.windowed_average(readings));

        match level {
            Some(l) => {
                log::debug!(
                    "{} estimate {:.2} via {} over {} candidate(s)",
                    self.name(),
                    l.value,
                    l.strategy,
                    l.candidates
                );
                Estimate::Level(l)
            }
            None => {
                log::debug!("no usable candidates in {} reading(s)", readings.len());
                Estimate::NoData
            }
        }
    }
}
