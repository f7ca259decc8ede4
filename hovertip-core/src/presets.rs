//! Named option presets bundled with the crate.

use crate::options::{OptionsError, TooltipOptions};
use once_cell::sync::Lazy;
use serde_json::{Map, Value};
use thiserror::Error;

const PRESETS_JSON: &str = include_str!("../data/presets.json");

static PRESETS: Lazy<Result<Map<String, Value>, String>> = Lazy::new(|| {
    serde_json::from_str::<Map<String, Value>>(PRESETS_JSON).map_err(|e| e.to_string())
});

#[derive(Debug, Error)]
pub enum PresetError {
    #[error("Unknown preset: {0}")]
    Unknown(String),
    #[error("Preset table is malformed: {0}")]
    Table(String),
    #[error("Preset {name} is invalid: {source}")]
    Invalid {
        name: String,
        #[source]
        source: OptionsError,
    },
}

fn table() -> Result<&'static Map<String, Value>, PresetError> {
    (*PRESETS).as_ref().map_err(|e| PresetError::Table(e.clone()))
}

/// Names of the bundled presets, sorted.
///
/// # Errors
/// Returns an error if the bundled table cannot be parsed.
pub fn names() -> Result<Vec<&'static str>, PresetError> {
    let mut names: Vec<&'static str> = table()?.keys().map(String::as_str).collect();
    names.sort_unstable();
    Ok(names)
}

/// Load a preset by name. Fields the preset omits keep their defaults.
///
/// # Errors
/// Returns an error if the preset is unknown or its values are out of range.
pub fn load(name: &str) -> Result<TooltipOptions, PresetError> {
    let raw = table()?
        .get(name)
        .ok_or_else(|| PresetError::Unknown(name.to_string()))?;
    let options: TooltipOptions =
        serde_json::from_value(raw.clone()).map_err(|e| PresetError::Invalid {
            name: name.to_string(),
            source: OptionsError::Json(e),
        })?;
    options.validate().map_err(|source| PresetError::Invalid {
        name: name.to_string(),
        source,
    })?;
    Ok(options)
}
