use crate::dtos::{ErrorResponse, PatientRecord, PatientSummary};
use crate::services::records::{INVALID_UHID, RECORDS_FAILED};
use crate::startup::AppState;
use axum::{
    extract::{rejection::PathRejection, Path, State},
    http::StatusCode,
    Json,
};
use service_core::error::AppError;

/// List all patients
///
/// Failure here answers with a plain-text body rather than JSON.
#[utoipa::path(
    get,
    path = "/record",
    responses(
        (status = 200, description = "A list of patients", body = [PatientRecord]),
        (status = 500, description = "Error retrieving records", body = String, content_type = "text/plain")
    ),
    tag = "Patients"
)]
pub async fn list_records(
    State(state): State<AppState>,
) -> Result<Json<Vec<PatientRecord>>, (StatusCode, &'static str)> {
    let patients = state.records.list_patients().await.map_err(|e| {
        tracing::error!(error = ?e, "Failed to list patients");
        (StatusCode::INTERNAL_SERVER_ERROR, RECORDS_FAILED)
    })?;

    tracing::info!(count = patients.len(), "Listed patient records");

    Ok(Json(patients.into_iter().map(PatientRecord::from).collect()))
}

/// Retrieve a patient by UHID
#[utoipa::path(
    get,
    path = "/record/{id}",
    params(
        ("id" = String, Path, description = "The UHID of the patient")
    ),
    responses(
        (status = 200, description = "A single patient record", body = PatientSummary),
        (status = 400, description = "Invalid UHID provided", body = ErrorResponse),
        (status = 404, description = "Record not found", body = ErrorResponse),
        (status = 500, description = "Error retrieving record", body = ErrorResponse)
    ),
    tag = "Patients"
)]
pub async fn get_record(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
) -> Result<Json<PatientSummary>, AppError> {
    let Path(id) = id.map_err(|e| super::invalid_path(e, INVALID_UHID))?;

    tracing::info!(uhid = %id, "Fetching patient record");

    let summary = state.records.get_patient(&id).await?;

    Ok(Json(summary))
}
