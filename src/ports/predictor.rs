//! Burnout Predictor Port - Interface to the prediction backend.
//!
//! The backend is an opaque collaborator: it receives a single-row tabular
//! input with named columns and returns an ordered sequence of scores, one
//! per row. This service only ever submits one row and reads index 0.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

/// Port for the external prediction backend.
///
/// Implementations translate between the backend's artifact format and the
/// column-oriented input assembled by the domain. Failures of any kind are
/// reported through [`PredictorError`]; callers surface them without
/// further classification and never retry automatically.
#[async_trait]
pub trait BurnoutPredictor: Send + Sync {
    /// Scores the given input.
    ///
    /// The returned sequence is ordered by input row and non-empty for a
    /// non-empty input.
    async fn predict(&self, input: &FeatureFrame) -> Result<Vec<f64>, PredictorError>;

    /// Metadata about the backing model.
    fn model_info(&self) -> ModelInfo;
}

/// Errors raised by a prediction backend.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PredictorError {
    #[error("model artifact not available at {path}: {reason}")]
    ArtifactUnavailable { path: String, reason: String },

    #[error("model artifact is malformed: {0}")]
    MalformedArtifact(String),

    #[error("input columns do not match model features: expected {expected:?}, got {actual:?}")]
    ColumnMismatch {
        expected: Vec<String>,
        actual: Vec<String>,
    },

    #[error("prediction backend failure: {0}")]
    Backend(String),
}

/// Single-row tabular input: named columns with one value each.
///
/// Column names and order must match what the backend's preprocessing
/// expects exactly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureFrame {
    columns: Vec<String>,
    values: Vec<f64>,
}

impl FeatureFrame {
    /// Creates a single-row frame.
    ///
    /// # Errors
    ///
    /// Invalid format if the column and value counts differ or the frame
    /// is empty.
    pub fn single_row(columns: Vec<String>, values: Vec<f64>) -> Result<Self, ValidationError> {
        if columns.is_empty() {
            return Err(ValidationError::empty_field("columns"));
        }
        if columns.len() != values.len() {
            return Err(ValidationError::invalid_format(
                "feature_frame",
                format!(
                    "{} columns but {} values",
                    columns.len(),
                    values.len()
                ),
            ));
        }
        Ok(Self { columns, values })
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Looks up a value by column name.
    pub fn value_of(&self, column: &str) -> Option<f64> {
        self.columns
            .iter()
            .position(|c| c == column)
            .map(|i| self.values[i])
    }
}

/// Metadata describing a prediction backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelInfo {
    pub name: String,
    pub version: String,
    pub feature_count: usize,
}

impl ModelInfo {
    pub fn new(name: impl Into<String>, version: impl Into<String>, feature_count: usize) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            feature_count,
        }
    }
}
