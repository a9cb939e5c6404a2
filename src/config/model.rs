//! Model configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Prediction model configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ModelConfig {
    /// Path to the model artifact JSON
    #[serde(default = "default_artifact_path")]
    pub artifact_path: PathBuf,
}

impl ModelConfig {
    /// Validate model configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.artifact_path.as_os_str().is_empty() {
            return Err(ValidationError::MissingRequired("model.artifact_path"));
        }
        Ok(())
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            artifact_path: default_artifact_path(),
        }
    }
}

fn default_artifact_path() -> PathBuf {
    PathBuf::from("artifacts/burnout_model.json")
}
