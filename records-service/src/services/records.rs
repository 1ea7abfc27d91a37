//! Patient lookups and appointment aggregation over a [`RecordStore`].

use crate::dtos::{AppointmentDetail, PatientIdParam, PatientSummary};
use crate::models::Patient;
use crate::services::store::RecordStore;
use service_core::error::AppError;
use std::sync::Arc;
use thiserror::Error;
use validator::Validate;

#[derive(Error, Debug)]
pub enum RecordError {
    #[error("{0}")]
    InvalidArgument(&'static str),

    #[error("{0}")]
    NotFound(&'static str),

    #[error("{context}")]
    Internal {
        context: &'static str,
        #[source]
        source: AppError,
    },
}

impl From<RecordError> for AppError {
    fn from(err: RecordError) -> Self {
        match err {
            RecordError::InvalidArgument(msg) => AppError::BadRequest(anyhow::anyhow!(msg)),
            RecordError::NotFound(msg) => AppError::NotFound(anyhow::anyhow!(msg)),
            RecordError::Internal { context, source } => {
                tracing::error!(error = %source, "{}", context);
                AppError::InternalError(anyhow::anyhow!(context))
            }
        }
    }
}

pub const INVALID_UHID: &str = "Invalid UHID";
pub const INVALID_PATIENT_ID: &str = "Invalid patient ID";
pub const RECORD_NOT_FOUND: &str = "Record not found";
pub const NO_APPOINTMENTS: &str = "No appointments found";
pub const RECORDS_FAILED: &str = "Error retrieving records";
pub const RECORD_FAILED: &str = "Error retrieving record";
pub const APPOINTMENTS_FAILED: &str = "Error retrieving appointments";

fn validate_id(id: &str, message: &'static str) -> Result<(), RecordError> {
    PatientIdParam::new(id).validate().map_err(|e| {
        tracing::debug!(error = %e, "Rejected identifier");
        RecordError::InvalidArgument(message)
    })
}

#[derive(Clone)]
pub struct RecordService {
    store: Arc<dyn RecordStore>,
}

impl RecordService {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Arc<dyn RecordStore> {
        &self.store
    }

    /// Every patient, in store order. Unbounded.
    pub async fn list_patients(&self) -> Result<Vec<Patient>, RecordError> {
        self.store
            .list_patients()
            .await
            .map_err(|source| RecordError::Internal {
                context: RECORDS_FAILED,
                source,
            })
    }

    /// The patient with this UHID, projected to a [`PatientSummary`].
    pub async fn get_patient(&self, uhid: &str) -> Result<PatientSummary, RecordError> {
        validate_id(uhid, INVALID_UHID)?;

        let patient = self
            .store
            .find_patient(uhid)
            .await
            .map_err(|source| RecordError::Internal {
                context: RECORD_FAILED,
                source,
            })?
            .ok_or(RecordError::NotFound(RECORD_NOT_FOUND))?;

        Ok(PatientSummary::from(patient))
    }

    /// All appointments of `patient_id` across every doctor.
    ///
    /// The store only guarantees each returned doctor holds at least one
    /// matching entry, so each appointment list is filtered again here.
    /// Order is doctor order as yielded by the store, then the order of each
    /// doctor's embedded list. No date sort is applied.
    pub async fn patient_appointments(
        &self,
        patient_id: &str,
    ) -> Result<Vec<AppointmentDetail>, RecordError> {
        validate_id(patient_id, INVALID_PATIENT_ID)?;

        let doctors = self
            .store
            .find_doctors_with_patient(patient_id)
            .await
            .map_err(|source| RecordError::Internal {
                context: APPOINTMENTS_FAILED,
                source,
            })?;

        if doctors.is_empty() {
            return Err(RecordError::NotFound(NO_APPOINTMENTS));
        }

        let appointments: Vec<AppointmentDetail> = doctors
            .iter()
            .flat_map(|doctor| {
                doctor
                    .appointments_for(patient_id)
                    .map(move |appointment| AppointmentDetail::new(doctor, appointment))
            })
            .collect();

        if appointments.is_empty() {
            tracing::warn!(
                patient_id = %patient_id,
                doctors = doctors.len(),
                "Store returned doctors without a matching appointment"
            );
            return Err(RecordError::NotFound(NO_APPOINTMENTS));
        }

        Ok(appointments)
    }
}
