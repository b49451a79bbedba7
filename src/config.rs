//! Validator configuration supplied by the host.

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// How the host invoked validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InvocationMode {
    /// Full structural pass over the target.
    #[default]
    Batch,
    /// Single-field change notification; observed and logged only.
    Live,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidatorConfig {
    #[serde(default)]
    pub mode: InvocationMode,
}

impl ValidatorConfig {
    pub fn batch() -> Self {
        ValidatorConfig {
            mode: InvocationMode::Batch,
        }
    }

    pub fn live() -> Self {
        ValidatorConfig {
            mode: InvocationMode::Live,
        }
    }

    pub fn from_json(json: &str) -> Result<Self, ModelError> {
        serde_json::from_str(json).map_err(ModelError::Config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_defaults_to_batch() {
        let config = ValidatorConfig::from_json("{}").unwrap();
        assert_eq!(config.mode, InvocationMode::Batch);
    }

    #[test]
    fn live_mode_from_json() {
        let config = ValidatorConfig::from_json(r#"{"mode":"live"}"#).unwrap();
        assert_eq!(config.mode, InvocationMode::Live);
    }

    #[test]
    fn unknown_mode_is_rejected() {
        assert!(ValidatorConfig::from_json(r#"{"mode":"eager"}"#).is_err());
    }
}
