pub mod appointments;
pub mod health;
pub mod metrics;
pub mod records;

pub use appointments::get_patient_appointments;
pub use health::{health_check, readiness_check};
pub use records::{get_record, list_records};

use axum::extract::rejection::PathRejection;
use service_core::error::AppError;

/// A path segment axum could not extract (e.g. invalid UTF-8) is a bad
/// identifier, reported in the same JSON shape as other errors.
pub(crate) fn invalid_path(rejection: PathRejection, message: &'static str) -> AppError {
    tracing::debug!(error = %rejection, "Rejected path parameter");
    AppError::BadRequest(anyhow::anyhow!(message))
}
