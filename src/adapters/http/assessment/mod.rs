//! Assessment HTTP surface: routes, handlers, DTOs.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use self::handlers::AssessmentHandlers;
pub use self::routes::assessment_routes;
