//! Assessment workflow handlers.

mod clear_session;
mod get_session;
mod submit_assessment;

pub use clear_session::{ClearSessionCommand, ClearSessionHandler};
pub use get_session::{GetSessionHandler, GetSessionQuery};
pub use submit_assessment::{
    SubmitAssessmentCommand, SubmitAssessmentHandler, SubmitAssessmentResult,
};
