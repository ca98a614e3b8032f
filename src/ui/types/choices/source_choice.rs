use crate::ui::types::choices::{UIChoice, params_value};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::PathBuf;
use strum_macros::{Display, EnumDiscriminants, EnumIter, EnumMessage, EnumString, IntoStaticStr};

const DEFAULT_SEED: u64 = 42;
pub const MAX_SIMULATED_CAPTURES: u64 = 100_000;

fn default_seed() -> u64 {
    DEFAULT_SEED
}
fn default_start_level() -> u8 {
    90
}
fn default_drain() -> f64 {
    0.5
}
fn default_count() -> u64 {
    24
}
fn default_interval_minutes() -> u64 {
    60
}
fn default_noise() -> f32 {
    0.2
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default, PartialEq)]
pub struct JsonFileParameters {
    #[schemars(
        with = "String",
        title = "Readings file",
        description = "JSON array or newline-delimited JSON of OCR reading records",
        extend(
            "format" = "path",
            "x-must-exist" = true,
            "x-extensions" = ["json", "jsonl", "ndjson"]
        )
    )]
    pub path: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default, PartialEq)]
pub struct FixtureParameters {
    #[serde(default)]
    #[schemars(
        with = "Option<String>",
        title = "Fixture file",
        description = "Fixed readings to use regardless of time; the bundled set when empty",
        extend(
            "format" = "path",
            "x-must-exist" = true,
            "x-extensions" = ["json", "jsonl", "ndjson"]
        )
    )]
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct SimulatedParameters {
    #[serde(default = "default_start_level")]
    #[schemars(
        title = "Start level",
        description = "Gauge level of the oldest capture",
        range(min = 0, max = 99),
        default = "default_start_level"
    )]
    pub start_level: u8,

    #[serde(default = "default_drain")]
    #[schemars(
        title = "Drain",
        description = "Level lost between consecutive captures",
        range(min = 0.0),
        default = "default_drain"
    )]
    pub drain_per_reading: f64,

    #[serde(default = "default_count")]
    #[schemars(
        title = "Captures",
        description = "Number of captures generated",
        range(max = 100_000),
        default = "default_count"
    )]
    pub count: u64,

    #[serde(default = "default_interval_minutes")]
    #[schemars(
        title = "Interval (minutes)",
        description = "Time between captures",
        range(min = 1),
        default = "default_interval_minutes"
    )]
    pub interval_minutes: u64,

    #[serde(default = "default_noise")]
    #[schemars(
        title = "Noise",
        description = "Fraction of captures the OCR misreads (0.0–1.0)",
        range(min = 0.0, max = 1.0),
        default = "default_noise"
    )]
    pub noise_pct: f32,

    #[serde(default = "default_seed")]
    #[schemars(title = "Seed", description = "PRNG seed", default = "default_seed")]
    pub seed: u64,
}

impl Default for SimulatedParameters {
    fn default() -> Self {
        Self {
            start_level: default_start_level(),
            drain_per_reading: default_drain(),
            count: default_count(),
            interval_minutes: default_interval_minutes(),
            noise_pct: default_noise(),
            seed: default_seed(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, EnumDiscriminants, PartialEq)]
#[serde(tag = "type", content = "params", rename_all = "kebab-case")]
#[strum_discriminants(name(SourceKind))]
#[strum_discriminants(derive(EnumIter, EnumString, Display, IntoStaticStr, EnumMessage))]
#[strum_discriminants(strum(serialize_all = "kebab-case"))]
pub enum SourceChoice {
    #[strum_discriminants(strum(
        message = "JSON File",
        detailed_message = "Reading records exported from the detection store."
    ))]
    JsonFile(JsonFileParameters),

    #[strum_discriminants(strum(
        message = "Fixture",
        detailed_message = "Fixed readings for local debugging, no time window applied."
    ))]
    Fixture(FixtureParameters),

    #[strum_discriminants(strum(
        message = "Simulated Gauge",
        detailed_message = "Seeded synthetic gauge with configurable OCR noise."
    ))]
    Simulated(SimulatedParameters),
}

impl UIChoice for SourceChoice {
    type Kind = SourceKind;

    fn prompt_label() -> &'static str {
        "Where do readings come from?"
    }

    fn default_params(kind: Self::Kind) -> Value {
        match kind {
            SourceKind::JsonFile => params_value(JsonFileParameters::default()),
            SourceKind::Fixture => params_value(FixtureParameters::default()),
            SourceKind::Simulated => params_value(SimulatedParameters::default()),
        }
    }
}
