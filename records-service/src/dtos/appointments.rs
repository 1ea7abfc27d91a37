use crate::models::json::to_json;
use crate::models::{Appointment, Doctor};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

pub const APPOINTMENTS_RETRIEVED: &str = "Appointments retrieved successfully";

/// One appointment of a patient, with the owning doctor's name and
/// department copied in. Values missing from the stored documents are left
/// out.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentDetail {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>, example = "2024-01-01")]
    pub appointment_date: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>, example = "10:00")]
    pub appointment_time: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>, example = "Cardio")]
    pub department: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>, example = "Dr. X")]
    pub doctor_name: Option<Value>,
}

impl AppointmentDetail {
    pub fn new(doctor: &Doctor, appointment: &Appointment) -> Self {
        Self {
            appointment_date: appointment.appointment_date.as_ref().map(to_json),
            appointment_time: appointment.appointment_time.as_ref().map(to_json),
            department: doctor.dept_name.as_ref().map(to_json),
            doctor_name: doctor.name.as_ref().map(to_json),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct AppointmentsResponse {
    #[schema(example = "Appointments retrieved successfully")]
    pub message: String,
    pub appointments: Vec<AppointmentDetail>,
}

impl AppointmentsResponse {
    pub fn new(appointments: Vec<AppointmentDetail>) -> Self {
        Self {
            message: APPOINTMENTS_RETRIEVED.to_string(),
            appointments,
        }
    }
}
