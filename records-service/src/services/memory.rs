use crate::models::{Doctor, Patient};
use crate::services::store::RecordStore;
use async_trait::async_trait;
use service_core::error::AppError;
use std::sync::RwLock;

/// Store backed by in-process vectors. Filters the way MongoDB does: a
/// doctor matches if any embedded appointment matches.
#[derive(Default)]
pub struct InMemoryStore {
    patients: RwLock<Vec<Patient>>,
    doctors: RwLock<Vec<Doctor>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_data(patients: Vec<Patient>, doctors: Vec<Doctor>) -> Self {
        Self {
            patients: RwLock::new(patients),
            doctors: RwLock::new(doctors),
        }
    }

    pub fn insert_patient(&self, patient: Patient) -> Result<(), AppError> {
        self.patients
            .write()
            .map_err(|e| anyhow::anyhow!("In-memory patients lock poisoned: {}", e))?
            .push(patient);
        Ok(())
    }

    pub fn insert_doctor(&self, doctor: Doctor) -> Result<(), AppError> {
        self.doctors
            .write()
            .map_err(|e| anyhow::anyhow!("In-memory doctors lock poisoned: {}", e))?
            .push(doctor);
        Ok(())
    }
}

#[async_trait]
impl RecordStore for InMemoryStore {
    async fn list_patients(&self) -> Result<Vec<Patient>, AppError> {
        let patients = self
            .patients
            .read()
            .map_err(|e| anyhow::anyhow!("In-memory patients lock poisoned: {}", e))?;
        Ok(patients.clone())
    }

    async fn find_patient(&self, uhid: &str) -> Result<Option<Patient>, AppError> {
        let patients = self
            .patients
            .read()
            .map_err(|e| anyhow::anyhow!("In-memory patients lock poisoned: {}", e))?;
        Ok(patients.iter().find(|p| p.has_uhid(uhid)).cloned())
    }

    async fn find_doctors_with_patient(&self, patient_id: &str) -> Result<Vec<Doctor>, AppError> {
        let doctors = self
            .doctors
            .read()
            .map_err(|e| anyhow::anyhow!("In-memory doctors lock poisoned: {}", e))?;
        Ok(doctors
            .iter()
            .filter(|d| d.has_appointment_for(patient_id))
            .cloned()
            .collect())
    }

    async fn health_check(&self) -> Result<(), AppError> {
        Ok(())
    }
}
