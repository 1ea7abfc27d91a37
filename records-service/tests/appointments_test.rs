mod common;

use axum::http::StatusCode;
use common::{appointment, doctor, patient, TestApp};
use mongodb::bson::{doc, from_document};
use records_service::models::Doctor;
use serde_json::json;

fn clinic() -> TestApp {
    TestApp::with_data(
        vec![patient("P1", "Jane", "Doe", 30, 2)],
        vec![
            doctor(
                "Dr. X",
                "Cardio",
                vec![
                    appointment("P1", "2024-01-01", "10:00"),
                    appointment("P2", "2024-01-03", "12:00"),
                ],
            ),
            doctor("Dr. Z", "Peds", vec![appointment("P2", "2024-02-02", "09:00")]),
            doctor("Dr. Y", "Derm", vec![appointment("P1", "2024-01-05", "15:30")]),
        ],
    )
}

#[tokio::test]
async fn appointments_are_flattened_with_doctor_details() {
    let (status, body) = clinic().get_json("/record/appointments/P1").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "message": "Appointments retrieved successfully",
            "appointments": [
                {
                    "appointmentDate": "2024-01-01",
                    "appointmentTime": "10:00",
                    "department": "Cardio",
                    "doctorName": "Dr. X"
                },
                {
                    "appointmentDate": "2024-01-05",
                    "appointmentTime": "15:30",
                    "department": "Derm",
                    "doctorName": "Dr. Y"
                }
            ]
        })
    );
}

#[tokio::test]
async fn both_routes_serve_the_same_aggregation() {
    let app = clinic();

    let nested = app.get_json("/record/appointments/P1").await;
    let top_level = app.get_json("/appointments/P1").await;

    assert_eq!(nested, top_level);
}

#[tokio::test]
async fn patient_without_appointments_is_404() {
    let (status, body) = clinic().get_json("/appointments/P7").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "message": "No appointments found" }));
}

#[tokio::test]
async fn appointments_for_unknown_patient_are_still_returned() {
    // P2 has no patient document.
    let (status, body) = clinic().get_json("/appointments/P2").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["appointments"].as_array().map(Vec::len), Some(2));
}

#[tokio::test]
async fn whitespace_patient_id_is_looked_up_as_is() {
    let app = TestApp::with_data(
        vec![],
        vec![doctor("Dr. X", "Cardio", vec![appointment("  ", "2024-01-01", "10:00")])],
    );

    let (status, body) = app.get_json("/appointments/%20%20").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["appointments"].as_array().map(Vec::len), Some(1));

    let (status, body) = app.get_json("/appointments/%20").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "message": "No appointments found" }));
}

#[tokio::test]
async fn doctor_missing_department_still_contributes() {
    let partial: Doctor = from_document(doc! {
        "name": "Dr. Q",
        "room": 12,
        "appointments": [
            { "patientId": "P1", "appointmentDate": "2024-04-04", "appointmentTime": "13:00", "notes": "follow-up" },
        ],
    })
    .unwrap();
    let app = TestApp::with_data(vec![], vec![partial]);

    let (status, body) = app.get_json("/appointments/P1").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["appointments"],
        json!([{
            "appointmentDate": "2024-04-04",
            "appointmentTime": "13:00",
            "doctorName": "Dr. Q"
        }])
    );
}

#[tokio::test]
async fn store_failure_is_500_json() {
    let (status, body) = TestApp::failing().get_json("/appointments/P1").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "message": "Error retrieving appointments" }));
}
