use mongodb::bson::Bson;
use serde::{Deserialize, Serialize};

/// A document in the `doctors` collection with its appointments embedded.
///
/// Every field is optional: a doctor missing `name` or `dept_name` still
/// contributes its appointments, with those details left out. Fields not
/// listed here are ignored.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct Doctor {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Bson>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<Bson>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dept_name: Option<Bson>,
    #[serde(default)]
    pub appointments: Vec<Appointment>,
}

/// `patientId` is a soft reference to a patient's `UHID`; nothing checks
/// that the patient exists.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patient_id: Option<Bson>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub appointment_date: Option<Bson>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub appointment_time: Option<Bson>,
}

impl Appointment {
    pub fn belongs_to(&self, patient_id: &str) -> bool {
        matches!(&self.patient_id, Some(Bson::String(s)) if s == patient_id)
    }
}

impl Doctor {
    /// Appointments in this doctor's list that belong to `patient_id`, in
    /// stored order.
    pub fn appointments_for<'a>(
        &'a self,
        patient_id: &'a str,
    ) -> impl Iterator<Item = &'a Appointment> + 'a {
        self.appointments
            .iter()
            .filter(move |appointment| appointment.belongs_to(patient_id))
    }

    pub fn has_appointment_for(&self, patient_id: &str) -> bool {
        self.appointments_for(patient_id).next().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::{doc, from_document};

    #[test]
    fn doctor_without_department_still_deserializes() {
        let doctor: Doctor = from_document(doc! {
            "name": "Dr. X",
            "appointments": [{ "patientId": "P1", "appointmentDate": "2024-01-01" }],
            "room": 12,
        })
        .unwrap();

        assert_eq!(doctor.dept_name, None);
        assert!(doctor.has_appointment_for("P1"));
        assert_eq!(doctor.appointments[0].appointment_time, None);
    }

    #[test]
    fn doctor_without_appointments_has_none() {
        let doctor: Doctor = from_document(doc! { "name": "Dr. Y" }).unwrap();
        assert!(doctor.appointments.is_empty());
        assert!(!doctor.has_appointment_for("P1"));
    }

    #[test]
    fn non_string_patient_ids_never_match() {
        let appointment: Appointment = from_document(doc! { "patientId": 1 }).unwrap();
        assert!(!appointment.belongs_to("1"));
    }
}
