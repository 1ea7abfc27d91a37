use crate::dtos::{AppointmentsResponse, ErrorResponse};
use crate::services::records::INVALID_PATIENT_ID;
use crate::startup::AppState;
use axum::{
    extract::{rejection::PathRejection, Path, State},
    Json,
};
use service_core::error::AppError;

/// Retrieve detailed appointments for a patient
///
/// Served on both `/record/appointments/{patientId}` and
/// `/appointments/{patientId}`.
#[utoipa::path(
    get,
    path = "/record/appointments/{patientId}",
    params(
        ("patientId" = String, Path, description = "The ID of the patient")
    ),
    responses(
        (status = 200, description = "Matching appointments with doctor details", body = AppointmentsResponse),
        (status = 400, description = "Invalid patient ID provided", body = ErrorResponse),
        (status = 404, description = "No appointments found", body = ErrorResponse),
        (status = 500, description = "Error retrieving appointments", body = ErrorResponse)
    ),
    tag = "Appointments"
)]
pub async fn get_patient_appointments(
    State(state): State<AppState>,
    patient_id: Result<Path<String>, PathRejection>,
) -> Result<Json<AppointmentsResponse>, AppError> {
    let Path(patient_id) = patient_id.map_err(|e| super::invalid_path(e, INVALID_PATIENT_ID))?;

    tracing::info!(patient_id = %patient_id, "Fetching patient appointments");

    let appointments = state.records.patient_appointments(&patient_id).await?;

    tracing::info!(
        patient_id = %patient_id,
        count = appointments.len(),
        "Appointments retrieved"
    );

    Ok(Json(AppointmentsResponse::new(appointments)))
}
