use crate::core::{DEFAULT_IGNORED_PREFIXES, DEFAULT_TEXT_PREFIX};
use crate::ui::cli::drivers::PromptDriver;
use crate::ui::cli::wizard::prompt_choice;
use crate::ui::types::choices::{EstimatorChoice, SourceChoice, UIChoice};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};
use strum_macros::{Display, EnumDiscriminants, EnumIter, EnumMessage, EnumString, IntoStaticStr};

/// Ten years.
pub const MAX_WINDOW_HOURS: u64 = 87_600;

fn default_window_hours() -> u64 {
    72
}

fn default_text_prefix() -> String {
    DEFAULT_TEXT_PREFIX.to_string()
}

fn default_ignored_prefixes() -> Vec<String> {
    DEFAULT_IGNORED_PREFIXES.iter().map(|p| p.to_string()).collect()
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct LatestLevelParams {
    #[schemars(skip)]
    pub source: SourceChoice,

    #[serde(default)]
    #[schemars(skip)]
    pub estimator: EstimatorChoice,

    #[serde(default = "default_window_hours")]
    #[schemars(
        title = "Time window (hours)",
        description = "Only readings captured this recently are considered",
        range(min = 1, max = 87_600),
        default = "default_window_hours"
    )]
    pub window_hours: u64,

    #[serde(default = "default_text_prefix")]
    #[schemars(
        title = "Detection key prefix",
        description = "Record keys holding detected text start with this",
        default = "default_text_prefix"
    )]
    pub text_prefix: String,

    #[serde(default = "default_ignored_prefixes")]
    #[schemars(
        title = "Ignored key prefixes",
        description = "Record keys never scanned for a level",
        default = "default_ignored_prefixes"
    )]
    pub ignored_prefixes: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, EnumDiscriminants, PartialEq)]
#[serde(tag = "type", content = "params", rename_all = "kebab-case")]
#[strum_discriminants(name(TaskKind))]
#[strum_discriminants(derive(EnumIter, EnumString, Display, IntoStaticStr, EnumMessage))]
#[strum_discriminants(strum(serialize_all = "kebab-case"))]
pub enum TaskChoice {
    #[strum_discriminants(strum(
        message = "Latest Level",
        detailed_message = "Estimate the current battery level from recent readings."
    ))]
    LatestLevel(LatestLevelParams),
}

impl TaskChoice {
    /// Swaps the configured source for another, e.g. a debug fixture.
    pub fn with_source(self, source: SourceChoice) -> Self {
        match self {
            TaskChoice::LatestLevel(p) => TaskChoice::LatestLevel(LatestLevelParams { source, ..p }),
        }
    }
}

impl UIChoice for TaskChoice {
    type Kind = TaskKind;

    fn prompt_label() -> &'static str {
        "Choose a task:"
    }

    fn default_params(kind: Self::Kind) -> Value {
        match kind {
            TaskKind::LatestLevel => json!({
                "window_hours": default_window_hours(),
                "text_prefix": default_text_prefix(),
                "ignored_prefixes": default_ignored_prefixes(),
            }),
        }
    }

    fn subprompts<D: PromptDriver>(
        driver: &D,
        kind: Self::Kind,
    ) -> anyhow::Result<Option<Map<String, Value>>> {
        match kind {
            TaskKind::LatestLevel => {
                let source = prompt_choice::<SourceChoice, _>(driver)?;
                let estimator = prompt_choice::<EstimatorChoice, _>(driver)?;

                let mut m = Map::new();
                m.insert("source".into(), serde_json::to_value(source)?);
                m.insert("estimator".into(), serde_json::to_value(estimator)?);
                Ok(Some(m))
            }
        }
    }
}
