use crate::estimation::{DEFAULT_TOLERANCE, DEFAULT_WINDOW};
use crate::ui::types::choices::{UIChoice, params_value};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use strum_macros::{Display, EnumDiscriminants, EnumIter, EnumMessage, EnumString, IntoStaticStr};

fn default_tolerance() -> u8 {
    DEFAULT_TOLERANCE
}

fn default_window() -> u64 {
    DEFAULT_WINDOW as u64
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct AgreementParameters {
    #[serde(default = "default_tolerance")]
    #[schemars(
        title = "Agreement tolerance",
        description = "Consecutive single readings agree when they differ by less than this",
        range(min = 1, max = 99),
        default = "default_tolerance"
    )]
    pub tolerance: u8,

    #[serde(default = "default_window")]
    #[schemars(
        title = "Average window",
        description = "Most recent candidates averaged when readings disagree",
        range(min = 1),
        default = "default_window"
    )]
    pub window: u64,
}

impl Default for AgreementParameters {
    fn default() -> Self {
        Self {
            tolerance: default_tolerance(),
            window: default_window(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, EnumDiscriminants, PartialEq)]
#[serde(tag = "type", content = "params", rename_all = "kebab-case")]
#[strum_discriminants(name(EstimatorKind))]
#[strum_discriminants(derive(EnumIter, EnumString, Display, IntoStaticStr, EnumMessage))]
#[strum_discriminants(strum(serialize_all = "kebab-case"))]
pub enum EstimatorChoice {
    #[strum_discriminants(strum(
        message = "Agreement",
        detailed_message = "Max of agreeing single readings, else mean of recent candidates."
    ))]
    Agreement(AgreementParameters),
}

impl Default for EstimatorChoice {
    fn default() -> Self {
        EstimatorChoice::Agreement(AgreementParameters::default())
    }
}

impl UIChoice for EstimatorChoice {
    type Kind = EstimatorKind;

    fn prompt_label() -> &'static str {
        "Choose an estimator:"
    }

    fn default_params(kind: Self::Kind) -> Value {
        match kind {
            EstimatorKind::Agreement => params_value(AgreementParameters::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_fields_apply_defaults() {
        let p: AgreementParameters = serde_json::from_value(json!({})).unwrap();
        assert_eq!(p, AgreementParameters::default());
        assert_eq!((p.tolerance, p.window), (4, 5));
    }

    #[test]
    fn tagged_enum_serialization() {
        let v = serde_json::to_value(EstimatorChoice::default()).unwrap();
        assert_eq!(
            v,
            json!({"type": "agreement", "params": {"tolerance": 4, "window": 5}})
        );
    }

    #[test]
    fn default_params_matches_struct_default() {
        let v = EstimatorChoice::default_params(EstimatorKind::Agreement);
        let rebuilt = EstimatorChoice::from_parts(EstimatorKind::Agreement, v).unwrap();
        assert_eq!(rebuilt, EstimatorChoice::default());
    }
}
