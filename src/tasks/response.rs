use crate::tasks::{LevelReport, TaskError};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ResponseBody {
    Level {
        #[serde(rename = "batteryLevel")]
        battery_level: Option<f64>,
    },
    Message {
        message: String,
    },
}

/// Status code and JSON body handed back to whoever asked for the level.
///
/// An empty batch is a soft outcome (200 with a message); a source that
/// cannot be read is a hard one (500).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LevelResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub body: ResponseBody,
}

impl LevelResponse {
    pub fn from_outcome(outcome: &Result<LevelReport, TaskError>) -> Self {
        match outcome {
            Ok(report) => Self {
                status_code: 200,
                body: ResponseBody::Level {
                    battery_level: report.estimate.value(),
                },
            },
            Err(e @ TaskError::NoRecentReadings) => Self {
                status_code: 200,
                body: ResponseBody::Message {
                    message: e.to_string(),
                },
            },
            Err(e @ TaskError::Source(_)) => Self {
                status_code: 500,
                body: ResponseBody::Message {
                    message: e.to_string(),
                },
            },
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimation::{Estimate, LevelEstimate, Strategy};
    use crate::sources::{SourceError, TimeWindow};
    use crate::testing::series_origin;
    use serde_json::json;
    use std::path::PathBuf;

    fn report(estimate: Estimate) -> LevelReport {
        LevelReport {
            estimate,
            fetched: 3,
            usable: 3,
            window: TimeWindow::new(series_origin(), series_origin()),
        }
    }

    #[test]
    fn level_maps_to_battery_level_body() {
        let r = report(Estimate::Level(LevelEstimate {
            value: 87.0,
            strategy: Strategy::SingleCandidate,
            candidates: 3,
        }));
        let resp = LevelResponse::from_outcome(&Ok(r));
        assert!(resp.is_success());
        assert_eq!(
            serde_json::to_value(&resp).unwrap(),
            json!({"statusCode": 200, "body": {"batteryLevel": 87.0}})
        );
    }

    #[test]
    fn no_data_maps_to_null_level() {
        let resp = LevelResponse::from_outcome(&Ok(report(Estimate::NoData)));
        assert_eq!(resp.status_code, 200);
        assert_eq!(
            serde_json::to_value(&resp.body).unwrap(),
            json!({"batteryLevel": null})
        );
    }

    #[test]
    fn empty_batch_is_soft_failure() {
        let resp = LevelResponse::from_outcome(&Err(TaskError::NoRecentReadings));
        assert_eq!(resp.status_code, 200);
        assert_eq!(
            resp.body,
            ResponseBody::Message {
                message: "No recent results".into()
            }
        );
    }

    #[test]
    fn source_failure_is_hard_failure() {
        let err = TaskError::Source(SourceError::Io {
            path: PathBuf::from("readings.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        });
        let resp = LevelResponse::from_outcome(&Err(err));
        assert_eq!(resp.status_code, 500);
        assert!(!resp.is_success());
        match resp.body {
            ResponseBody::Message { message } => assert!(message.starts_with("No results")),
            other => panic!("unexpected body: {other:?}"),
        }
    }
}
