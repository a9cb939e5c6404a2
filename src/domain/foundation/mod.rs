//! Foundation module - shared value objects and error types.

mod errors;
mod ids;
mod timestamp;

pub use errors::{ErrorCode, ValidationError};
pub use ids::SessionId;
pub use timestamp::Timestamp;
