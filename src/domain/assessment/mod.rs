//! Assessment module - the intake-and-classify workflow core.
//!
//! One submission collects eight workplace-behavior metrics, validated into
//! an [`AssessmentRecord`], scored by the prediction backend, and classified
//! into a [`RiskBand`]. Per-user state lives in the [`AssessmentSession`]
//! aggregate: a reset generation counter, the cached last result, and the
//! workflow phase.

mod day_type;
mod errors;
mod record;
mod risk;
mod session;

pub use day_type::DayType;
pub use errors::AssessmentError;
pub use record::{AssessmentRecord, FEATURE_COLUMNS};
pub use risk::{BurnoutScore, RiskBand, LOW_RISK_MAX, MEDIUM_RISK_MAX};
pub use session::{AssessmentOutcome, AssessmentSession, SessionPhase};
