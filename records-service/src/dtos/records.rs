use crate::models::json::to_json;
use crate::models::patient::{AGE, PHONE_NUMBER, TOTAL_APPOINTMENTS, UHID};
use crate::models::Patient;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

/// A patient document exactly as stored, every field included, returned by
/// the listing endpoint. `_id` is rendered as a hex string.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, ToSchema)]
#[serde(transparent)]
pub struct PatientRecord(#[schema(value_type = Object)] pub Map<String, Value>);

impl From<Patient> for PatientRecord {
    fn from(patient: Patient) -> Self {
        Self(
            patient
                .into_document()
                .into_iter()
                .map(|(k, v)| (k, to_json(&v)))
                .collect(),
        )
    }
}

/// Lookup projection of a patient. Fields missing from the stored document
/// are left out.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PatientSummary {
    #[serde(rename = "UHID", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>, example = "P1")]
    pub uhid: Option<Value>,
    #[schema(example = "Jane Doe")]
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<i64>, example = 30)]
    pub age: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>, example = "555")]
    pub phone_number: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<i64>, example = 2)]
    pub total_visits: Option<Value>,
}

impl From<Patient> for PatientSummary {
    fn from(patient: Patient) -> Self {
        Self {
            uhid: patient.get(UHID).map(to_json),
            name: patient.full_name(),
            age: patient.get(AGE).map(to_json),
            phone_number: patient.get(PHONE_NUMBER).map(to_json),
            total_visits: patient.get(TOTAL_APPOINTMENTS).map(to_json),
        }
    }
}
