//! AssessmentRecord - one validated submission of workplace metrics.

use serde::{Deserialize, Serialize};

use super::DayType;
use crate::domain::foundation::ValidationError;
use crate::ports::FeatureFrame;

/// Feature columns in the exact order the model's preprocessing expects.
pub const FEATURE_COLUMNS: [&str; 8] = [
    "day_type",
    "work_hours",
    "screen_time_hours",
    "meetings_count",
    "breaks_taken",
    "after_hours_work",
    "sleep_hours",
    "task_completion_rate",
];

pub const WORK_HOURS_MAX: f64 = 24.0;
pub const SCREEN_TIME_HOURS_MAX: f64 = 24.0;
pub const MEETINGS_COUNT_MAX: u32 = 50;
pub const BREAKS_TAKEN_MAX: u32 = 20;
pub const AFTER_HOURS_WORK_MAX: f64 = 12.0;
pub const SLEEP_HOURS_MAX: f64 = 24.0;
pub const TASK_COMPLETION_RATE_MAX: f64 = 100.0;

/// One validated submission of the eight workplace-behavior metrics.
///
/// # Invariants
///
/// - Every numeric field lies within its domain (see the `*_MAX` bounds).
/// - `day_type` is always resolved; the unselected sentinel never reaches
///   a constructed record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentRecord {
    day_type: DayType,
    work_hours: f64,
    screen_time_hours: f64,
    meetings_count: u32,
    breaks_taken: u32,
    after_hours_work: f64,
    sleep_hours: f64,
    task_completion_rate: f64,
}

impl AssessmentRecord {
    /// Creates a record, validating every numeric domain.
    ///
    /// # Errors
    ///
    /// `OutOfRange` naming the first offending field, its bounds, and the
    /// actual value. Non-finite inputs fail the range check as well.
    #[allow(clippy::too_many_arguments)]
    pub fn try_new(
        day_type: DayType,
        work_hours: f64,
        screen_time_hours: f64,
        meetings_count: u32,
        breaks_taken: u32,
        after_hours_work: f64,
        sleep_hours: f64,
        task_completion_rate: f64,
    ) -> Result<Self, ValidationError> {
        check_range("work_hours", work_hours, WORK_HOURS_MAX)?;
        check_range("screen_time_hours", screen_time_hours, SCREEN_TIME_HOURS_MAX)?;
        check_count("meetings_count", meetings_count, MEETINGS_COUNT_MAX)?;
        check_count("breaks_taken", breaks_taken, BREAKS_TAKEN_MAX)?;
        check_range("after_hours_work", after_hours_work, AFTER_HOURS_WORK_MAX)?;
        check_range("sleep_hours", sleep_hours, SLEEP_HOURS_MAX)?;
        check_range(
            "task_completion_rate",
            task_completion_rate,
            TASK_COMPLETION_RATE_MAX,
        )?;

        Ok(Self {
            day_type,
            work_hours,
            screen_time_hours,
            meetings_count,
            breaks_taken,
            after_hours_work,
            sleep_hours,
            task_completion_rate,
        })
    }

    pub fn day_type(&self) -> DayType {
        self.day_type
    }

    pub fn work_hours(&self) -> f64 {
        self.work_hours
    }

    pub fn screen_time_hours(&self) -> f64 {
        self.screen_time_hours
    }

    pub fn meetings_count(&self) -> u32 {
        self.meetings_count
    }

    pub fn breaks_taken(&self) -> u32 {
        self.breaks_taken
    }

    pub fn after_hours_work(&self) -> f64 {
        self.after_hours_work
    }

    pub fn sleep_hours(&self) -> f64 {
        self.sleep_hours
    }

    pub fn task_completion_rate(&self) -> f64 {
        self.task_completion_rate
    }

    /// Materializes the record as the single-row tabular input the
    /// prediction backend expects: eight named columns, model ordering.
    pub fn to_feature_frame(&self) -> Result<FeatureFrame, ValidationError> {
        FeatureFrame::single_row(
            FEATURE_COLUMNS.iter().map(|c| c.to_string()).collect(),
            vec![
                self.day_type.as_feature(),
                self.work_hours,
                self.screen_time_hours,
                f64::from(self.meetings_count),
                f64::from(self.breaks_taken),
                self.after_hours_work,
                self.sleep_hours,
                self.task_completion_rate,
            ],
        )
    }
}

fn check_range(field: &str, value: f64, max: f64) -> Result<(), ValidationError> {
    if !(0.0..=max).contains(&value) {
        return Err(ValidationError::out_of_range(field, 0.0, max, value));
    }
    Ok(())
}

fn check_count(field: &str, value: u32, max: u32) -> Result<(), ValidationError> {
    if value > max {
        return Err(ValidationError::out_of_range(
            field,
            0.0,
            f64::from(max),
            f64::from(value),
        ));
    }
    Ok(())
}
