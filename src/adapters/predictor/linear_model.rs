//! Linear model predictor backed by a JSON artifact.
//!
//! The artifact carries the feature names, standardization parameters, and
//! linear coefficients exported from model training. Scoring standardizes
//! each input value and applies the linear model:
//!
//! score = intercept + sum(coef_i * (x_i - mean_i) / std_i)

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::ports::{BurnoutPredictor, FeatureFrame, ModelInfo, PredictorError};

/// On-disk model artifact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelArtifact {
    pub model_name: String,
    pub model_version: String,
    pub feature_names: Vec<String>,
    pub means: Vec<f64>,
    pub stds: Vec<f64>,
    pub coefficients: Vec<f64>,
    pub intercept: f64,
}

impl ModelArtifact {
    /// Checks internal consistency of the artifact.
    ///
    /// # Errors
    ///
    /// `MalformedArtifact` when parameter vectors disagree in length, the
    /// artifact has no features, or any standardization/coefficient value
    /// is unusable (non-finite, or a non-positive std).
    pub fn validate(&self) -> Result<(), PredictorError> {
        let n = self.feature_names.len();
        if n == 0 {
            return Err(PredictorError::MalformedArtifact(
                "artifact declares no features".to_string(),
            ));
        }
        if self.means.len() != n || self.stds.len() != n || self.coefficients.len() != n {
            return Err(PredictorError::MalformedArtifact(format!(
                "{} features but {} means, {} stds, {} coefficients",
                n,
                self.means.len(),
                self.stds.len(),
                self.coefficients.len()
            )));
        }
        if !self.intercept.is_finite() {
            return Err(PredictorError::MalformedArtifact(
                "intercept is not finite".to_string(),
            ));
        }
        for (i, ((mean, std), coef)) in self
            .means
            .iter()
            .zip(&self.stds)
            .zip(&self.coefficients)
            .enumerate()
        {
            if !mean.is_finite() || !coef.is_finite() || !std.is_finite() || *std <= 0.0 {
                return Err(PredictorError::MalformedArtifact(format!(
                    "unusable parameters for feature '{}'",
                    self.feature_names[i]
                )));
            }
        }
        Ok(())
    }
}

/// Predictor that scores input rows with a standardize-then-linear model.
#[derive(Debug, Clone)]
pub struct LinearModelPredictor {
    artifact: ModelArtifact,
}

impl LinearModelPredictor {
    /// Creates a predictor from a validated artifact.
    pub fn new(artifact: ModelArtifact) -> Result<Self, PredictorError> {
        artifact.validate()?;
        Ok(Self { artifact })
    }

    /// Loads and validates an artifact from disk.
    ///
    /// # Errors
    ///
    /// - `ArtifactUnavailable` when the file cannot be read
    /// - `MalformedArtifact` when it cannot be parsed or fails validation
    pub fn from_path(path: &Path) -> Result<Self, PredictorError> {
        let raw = fs::read_to_string(path).map_err(|e| PredictorError::ArtifactUnavailable {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        let artifact: ModelArtifact = serde_json::from_str(&raw)
            .map_err(|e| PredictorError::MalformedArtifact(e.to_string()))?;
        let predictor = Self::new(artifact)?;
        tracing::info!(
            model = %predictor.artifact.model_name,
            version = %predictor.artifact.model_version,
            features = predictor.artifact.feature_names.len(),
            "loaded model artifact"
        );
        Ok(predictor)
    }

    pub fn artifact(&self) -> &ModelArtifact {
        &self.artifact
    }

    fn score_row(&self, values: &[f64]) -> f64 {
        let mut score = self.artifact.intercept;
        for (i, value) in values.iter().enumerate() {
            let standardized = (value - self.artifact.means[i]) / self.artifact.stds[i];
            score += self.artifact.coefficients[i] * standardized;
        }
        score
    }
}

#[async_trait]
impl BurnoutPredictor for LinearModelPredictor {
    async fn predict(&self, input: &FeatureFrame) -> Result<Vec<f64>, PredictorError> {
        // The preprocessing contract is exact: same names, same order.
        if input.columns() != self.artifact.feature_names.as_slice() {
            return Err(PredictorError::ColumnMismatch {
                expected: self.artifact.feature_names.clone(),
                actual: input.columns().to_vec(),
            });
        }
        Ok(vec![self.score_row(input.values())])
    }

    fn model_info(&self) -> ModelInfo {
        ModelInfo::new(
            self.artifact.model_name.clone(),
            self.artifact.model_version.clone(),
            self.artifact.feature_names.len(),
        )
    }
}
