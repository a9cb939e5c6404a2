//! Burnout score and risk band classification.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::ValidationError;

/// Upper bound of the Low band (inclusive).
pub const LOW_RISK_MAX: f64 = 40.0;

/// Upper bound of the Medium band (inclusive).
pub const MEDIUM_RISK_MAX: f64 = 70.0;

/// A finite burnout score as returned by the prediction backend.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BurnoutScore(f64);

impl BurnoutScore {
    /// Creates a score, rejecting non-finite values.
    ///
    /// The backend contract does not bound scores, but NaN and infinities
    /// are never rendered as results; callers surface them as prediction
    /// failures instead.
    pub fn try_new(value: f64) -> Result<Self, ValidationError> {
        if !value.is_finite() {
            return Err(ValidationError::invalid_format(
                "score",
                format!("expected a finite number, got {}", value),
            ));
        }
        Ok(Self(value))
    }

    /// Returns the raw score.
    pub fn value(&self) -> f64 {
        self.0
    }

    /// The band this score falls into.
    pub fn band(&self) -> RiskBand {
        RiskBand::classify(self.0)
    }
}

impl fmt::Display for BurnoutScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

/// Discretized risk level for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskBand {
    Low,
    Medium,
    High,
}

impl RiskBand {
    /// Classifies a score into a band.
    ///
    /// Thresholds: score <= 40 is Low, 40 < score <= 70 is Medium,
    /// score > 70 is High. Boundaries are closed on the lower band, so
    /// ties resolve to the lower-risk band. Total over all f64 values;
    /// NaN comparisons fail downward and land in High.
    pub fn classify(score: f64) -> Self {
        if score <= LOW_RISK_MAX {
            RiskBand::Low
        } else if score <= MEDIUM_RISK_MAX {
            RiskBand::Medium
        } else {
            RiskBand::High
        }
    }

    /// Uppercase display label, as rendered in the result box.
    pub fn label(&self) -> &'static str {
        match self {
            RiskBand::Low => "LOW RISK",
            RiskBand::Medium => "MEDIUM RISK",
            RiskBand::High => "HIGH RISK",
        }
    }
}

impl fmt::Display for RiskBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RiskBand::Low => "Low",
            RiskBand::Medium => "Medium",
            RiskBand::High => "High",
        };
        write!(f, "{}", s)
    }
}
