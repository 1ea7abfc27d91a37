use crate::models::{Doctor, Patient};
use async_trait::async_trait;
use service_core::error::AppError;

pub const PATIENTS_COLLECTION: &str = "patients";
pub const DOCTORS_COLLECTION: &str = "doctors";

/// Read access to the `patients` and `doctors` collections.
///
/// Implementations return documents in whatever order the backing store
/// yields them.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Every patient document, unfiltered.
    async fn list_patients(&self) -> Result<Vec<Patient>, AppError>;

    /// The patient whose `UHID` equals `uhid`.
    async fn find_patient(&self, uhid: &str) -> Result<Option<Patient>, AppError>;

    /// Doctors whose embedded appointment list contains at least one entry
    /// for `patient_id`. Other patients' entries are returned as stored.
    async fn find_doctors_with_patient(&self, patient_id: &str) -> Result<Vec<Doctor>, AppError>;

    async fn health_check(&self) -> Result<(), AppError>;
}
