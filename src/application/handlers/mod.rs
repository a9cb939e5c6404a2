//! Command and query handlers.

pub mod assessment;
