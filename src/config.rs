//! Settings for the `weightedrand` binary, read from a JSON file.
use crate::weighted::Choice;
use serde::Deserialize;
use std::{fs, io, path::Path};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] serde_json::Error),
}

///
/// ```json
/// {
///     "draws": 100000,
///     "seed": 42,
///     "choices": [
///         { "item": "common", "weight": 70 },
///         { "item": "rare", "weight": 25 },
///         { "item": "legendary", "weight": 5 }
///     ]
/// }
/// ```
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct DrawSettings {
    #[serde(default = "default_draws")]
    pub draws: usize,
    #[serde(default)]
    pub seed: Option<u64>,
    pub choices: Vec<Choice<String>>,
}

fn default_draws() -> usize {
    1
}

impl DrawSettings {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<DrawSettings, ConfigError> {
        let config_file = fs::read_to_string(path)?;
        DrawSettings::from_json(&config_file)
    }

    pub fn from_json(json: &str) -> Result<DrawSettings, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}
