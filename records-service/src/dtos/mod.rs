pub mod appointments;
pub mod records;

pub use appointments::{AppointmentDetail, AppointmentsResponse};
pub use records::{PatientRecord, PatientSummary};

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = "Record not found")]
    pub message: String,
}

/// Identifier taken from the request path: a patient's UHID. Any
/// non-empty string is accepted and matched verbatim.
#[derive(Debug, Clone, Validate)]
pub struct PatientIdParam {
    #[validate(length(min = 1))]
    pub id: String,
}

impl PatientIdParam {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_identifier_fails_validation() {
        assert!(PatientIdParam::new("").validate().is_err());
    }

    #[test]
    fn any_non_empty_identifier_passes() {
        assert!(PatientIdParam::new("P1").validate().is_ok());
        assert!(PatientIdParam::new("UHID-0042/x").validate().is_ok());
        assert!(PatientIdParam::new("   ").validate().is_ok());
    }
}
