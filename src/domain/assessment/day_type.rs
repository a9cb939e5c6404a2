//! DayType categorical input.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::AssessmentError;
use crate::domain::foundation::ValidationError;

/// Kind of day a submission describes.
///
/// The intake form offers an unselected sentinel (the empty string) which
/// blocks submission; only a resolved Weekday/Weekend value is ever
/// forwarded to the predictor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayType {
    Weekday,
    Weekend,
}

impl DayType {
    /// Resolves a raw form selection.
    ///
    /// # Errors
    ///
    /// - `MissingSelection` for the empty/unselected sentinel
    /// - `Validation` for anything outside {"Weekday", "Weekend"}
    pub fn from_selection(raw: &str) -> Result<Self, AssessmentError> {
        match raw.trim() {
            "" => Err(AssessmentError::MissingSelection),
            "Weekday" => Ok(DayType::Weekday),
            "Weekend" => Ok(DayType::Weekend),
            other => Err(AssessmentError::Validation(
                ValidationError::invalid_format(
                    "day_type",
                    format!("unrecognized selection '{}'", other),
                ),
            )),
        }
    }

    /// Numeric encoding expected by the model: Weekday = 1, Weekend = 0.
    pub fn as_feature(&self) -> f64 {
        match self {
            DayType::Weekday => 1.0,
            DayType::Weekend => 0.0,
        }
    }
}

impl fmt::Display for DayType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DayType::Weekday => "Weekday",
            DayType::Weekend => "Weekend",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_selection_resolves_weekday_and_weekend() {
        assert_eq!(DayType::from_selection("Weekday").unwrap(), DayType::Weekday);
        assert_eq!(DayType::from_selection("Weekend").unwrap(), DayType::Weekend);
    }

    #[test]
    fn from_selection_rejects_empty_sentinel() {
        let err = DayType::from_selection("").unwrap_err();
        assert!(matches!(err, AssessmentError::MissingSelection));
    }

    #[test]
    fn from_selection_treats_whitespace_as_unselected() {
        let err = DayType::from_selection("   ").unwrap_err();
        assert!(matches!(err, AssessmentError::MissingSelection));
    }

    #[test]
    fn from_selection_rejects_unknown_value() {
        let err = DayType::from_selection("Holiday").unwrap_err();
        assert!(matches!(err, AssessmentError::Validation(_)));
    }

    #[test]
    fn feature_encoding_matches_model_contract() {
        assert_eq!(DayType::Weekday.as_feature(), 1.0);
        assert_eq!(DayType::Weekend.as_feature(), 0.0);
    }

    #[test]
    fn serializes_to_snake_case_json() {
        assert_eq!(
            serde_json::to_string(&DayType::Weekday).unwrap(),
            "\"weekday\""
        );
        assert_eq!(
            serde_json::to_string(&DayType::Weekend).unwrap(),
            "\"weekend\""
        );
    }
}
