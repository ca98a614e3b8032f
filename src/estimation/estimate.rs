use serde::Serialize;
use strum_macros::Display;

/// Which aggregation produced a level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Strategy {
    /// Every reading showed one candidate and neighbours agreed; the maximum wins.
    SingleCandidate,
    /// Mean of the most recent candidates across all readings.
    WindowedAverage,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LevelEstimate {
    pub value: f64,
    pub strategy: Strategy,
    /// Number of candidates the value was computed from.
    pub candidates: usize,
}

/// Outcome of one estimation call.
///
/// `NoData` is an ordinary result: the batch was empty or held no usable
/// candidate. Callers decide how to surface it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Estimate {
    Level(LevelEstimate),
    NoData,
}

impl Estimate {
    #[inline]
    pub fn value(&self) -> Option<f64> {
        match self {
            Estimate::Level(l) => Some(l.value),
            Estimate::NoData => None,
        }
    }

    #[inline]
    pub fn strategy(&self) -> Option<Strategy> {
        match self {
            Estimate::Level(l) => Some(l.strategy),
            Estimate::NoData => None,
        }
    }

    #[inline]
    pub fn is_no_data(&self) -> bool {
        matches!(self, Estimate::NoData)
    }
}
