#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use mongodb::bson::{doc, Bson};
use records_service::config::SecurityConfig;
use records_service::models::{Appointment, Doctor, Patient};
use records_service::services::{InMemoryStore, RecordService, RecordStore};
use records_service::{build_router, AppState};
use service_core::error::AppError;
use std::sync::Arc;
use tower::util::ServiceExt;

pub fn patient(uhid: &str, first: &str, last: &str, age: i32, visits: i64) -> Patient {
    Patient::new(doc! {
        "UHID": uhid,
        "firstName": first,
        "lastName": last,
        "age": age,
        "phoneNumber": "555",
        "totalAppointments": visits,
    })
}

pub fn appointment(patient_id: &str, date: &str, time: &str) -> Appointment {
    Appointment {
        patient_id: Some(Bson::from(patient_id)),
        appointment_date: Some(Bson::from(date)),
        appointment_time: Some(Bson::from(time)),
    }
}

pub fn doctor(name: &str, dept: &str, appointments: Vec<Appointment>) -> Doctor {
    Doctor {
        id: None,
        name: Some(Bson::from(name)),
        dept_name: Some(Bson::from(dept)),
        appointments,
    }
}

/// Store whose every call fails, for the 5xx paths.
pub struct FailingStore;

#[async_trait]
impl RecordStore for FailingStore {
    async fn list_patients(&self) -> Result<Vec<Patient>, AppError> {
        Err(AppError::DatabaseError(anyhow::anyhow!("server selection timeout")))
    }

    async fn find_patient(&self, _uhid: &str) -> Result<Option<Patient>, AppError> {
        Err(AppError::DatabaseError(anyhow::anyhow!("server selection timeout")))
    }

    async fn find_doctors_with_patient(&self, _patient_id: &str) -> Result<Vec<Doctor>, AppError> {
        Err(AppError::DatabaseError(anyhow::anyhow!("server selection timeout")))
    }

    async fn health_check(&self) -> Result<(), AppError> {
        Err(AppError::DatabaseError(anyhow::anyhow!("server selection timeout")))
    }
}

pub struct TestApp {
    pub router: Router,
}

impl TestApp {
    pub fn with_store(store: Arc<dyn RecordStore>) -> Self {
        Self::build(store, false)
    }

    pub fn with_swagger() -> Self {
        Self::build(Arc::new(InMemoryStore::new()), true)
    }

    fn build(store: Arc<dyn RecordStore>, swagger_enabled: bool) -> Self {
        let state = AppState {
            records: RecordService::new(store),
            swagger_enabled,
            cors: SecurityConfig {
                allowed_origins: vec![],
            },
        };
        Self {
            router: build_router(state),
        }
    }

    pub fn with_data(patients: Vec<Patient>, doctors: Vec<Doctor>) -> Self {
        Self::with_store(Arc::new(InMemoryStore::with_data(patients, doctors)))
    }

    pub fn failing() -> Self {
        Self::with_store(Arc::new(FailingStore))
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Vec<u8>) {
        let response = self
            .router
            .clone()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .expect("Failed to execute request");

        let status = response.status();
        let body = response
            .into_body()
            .collect()
            .await
            .expect("Failed to read body")
            .to_bytes()
            .to_vec();
        (status, body)
    }

    pub async fn get_json(&self, uri: &str) -> (StatusCode, serde_json::Value) {
        let (status, body) = self.get(uri).await;
        let json = serde_json::from_slice(&body).expect("Response body is not JSON");
        (status, json)
    }
}
