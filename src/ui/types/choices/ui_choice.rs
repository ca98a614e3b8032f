use anyhow::Result;
use schemars::{JsonSchema, Schema, SchemaGenerator};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value, json};
use strum::{EnumMessage, IntoEnumIterator};

use crate::ui::cli::drivers::PromptDriver;

/// A configurable component whose variants are picked by kind and filled in
/// from a `params` object, serialized as `{"type": <kind>, "params": {..}}`.
pub trait UIChoice: Sized + Serialize + DeserializeOwned + JsonSchema {
    type Kind: Copy + Into<&'static str> + EnumMessage + IntoEnumIterator;

    /// Schema of the whole tagged enum, `$defs` included.
    fn schema() -> Schema {
        SchemaGenerator::default().into_root_schema_for::<Self>()
    }

    fn prompt_label() -> &'static str;

    fn prompt_help() -> Option<&'static str> {
        Some("↑/↓ to move, ↵ to pick")
    }

    /// `params` used to seed the prompts for `kind`.
    fn default_params(kind: Self::Kind) -> Value;

    /// Extra params gathered by nested prompts (e.g. the source of a task).
    fn subprompts<D: PromptDriver>(
        _driver: &D,
        _kind: Self::Kind,
    ) -> Result<Option<Map<String, Value>>> {
        Ok(None)
    }

    fn from_parts(kind: Self::Kind, params: Value) -> Result<Self> {
        let tag: &'static str = kind.into();
        Ok(serde_json::from_value(json!({ "type": tag, "params": params }))?)
    }
}

/// Serializes a parameter struct; falls back to `null` for types that
/// cannot be represented, which the prompts treat as "no default".
pub fn params_value<P: Serialize>(params: P) -> Value {
    serde_json::to_value(params).unwrap_or_default()
}
