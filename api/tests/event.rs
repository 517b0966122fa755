mod common;

use axum::http::{Method, StatusCode};
use base64::{engine::general_purpose, Engine as _};
use chrono::{Days, Local};
use common::{TestApp, QR_PREFIX};
use serde_json::json;

#[tokio::test]
async fn created_event_reads_back_with_formatted_times() {
    let app = TestApp::new();
    let token = app.staff_token().await;
    let event_id = app.create_event(&token, "Seminar", "2024-06-01").await;

    let (status, body) = app.get(&format!("/events/{event_id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["event_name"], "Seminar");
    assert_eq!(body["speaker"], "Ferris");
    assert_eq!(body["event_date"], "2024-06-01");
    assert_eq!(body["start_time"], "13:00:00");
    assert_eq!(body["end_time"], "15:00:00");
    assert_eq!(body["qr_code"], serde_json::Value::Null);

    let (status, list) = app.get("/api/events").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list.as_array().unwrap().len(), 1);
    assert_eq!(list[0]["event_id"], event_id);
}

#[tokio::test]
async fn unknown_event_is_not_found() {
    let app = TestApp::new();
    let (status, body) = app.get("/events/99").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Event not found");
}

#[tokio::test]
async fn creating_an_event_requires_a_staff_token() {
    let app = TestApp::new();
    let body = json!({
        "event_name": "Seminar",
        "event_description": "About Rust",
        "location": "Room 101",
        "event_date": "2024-06-01",
        "start_time": "13:00",
        "end_time": "15:00",
    });

    let (status, _) = app.post("/api/events", body.clone()).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = app
        .send(Method::POST, "/api/events", Some("bogus"), Some(body))
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn missing_field_is_a_validation_error() {
    let app = TestApp::new();
    let token = app.staff_token().await;
    let (status, body) = app
        .send(
            Method::POST,
            "/api/events",
            Some(&token),
            Some(json!({
                "event_name": "Seminar",
                "event_description": "About Rust",
                "location": "Room 101",
                "event_date": "2024-06-01",
                "start_time": "13:00",
            })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("end_time"));
}

#[tokio::test]
async fn partial_update_keeps_unspecified_fields() {
    let app = TestApp::new();
    let token = app.staff_token().await;
    let event_id = app.create_event(&token, "Seminar", "2024-06-01").await;
    let (_, before) = app.get(&format!("/events/{event_id}")).await;

    let (status, body) = app
        .send(
            Method::PUT,
            "/api/events",
            Some(&token),
            Some(json!({ "event_id": event_id.to_string(), "location": "Hall B" })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Event updated successfully");

    let (_, after) = app.get(&format!("/events/{event_id}")).await;
    assert_eq!(after["location"], "Hall B");
    for field in [
        "event_name",
        "event_description",
        "speaker",
        "event_date",
        "start_time",
        "end_time",
        "created_at",
    ] {
        assert_eq!(after[field], before[field], "{field} changed");
    }
}

#[tokio::test]
async fn updating_an_unknown_event_is_not_found() {
    let app = TestApp::new();
    let token = app.staff_token().await;
    let (status, _) = app
        .send(
            Method::PUT,
            "/api/events",
            Some(&token),
            Some(json!({ "event_id": 42, "location": "Hall B" })),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn deleting_an_event_removes_its_dependents() {
    let app = TestApp::new();
    let token = app.staff_token().await;
    let event_id = app.create_event(&token, "Seminar", "2024-06-01").await;

    let (status, _) = app.post("/api/attendance", common::scan(event_id, "42")).await;
    assert_eq!(status, StatusCode::CREATED);

    let uri = format!("/api/events/{event_id}");
    let (status, body) = app.send(Method::DELETE, &uri, Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Event deleted successfully");
    assert!(app.store.attendance_rows().is_empty());

    let (status, _) = app.send(Method::DELETE, &uri, Some(&token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn qr_code_encodes_id_name_and_location() {
    let app = TestApp::new();
    let token = app.staff_token().await;
    let event_id = app.create_event(&token, "Seminar", "2024-06-01").await;

    let (status, body) = app
        .send(
            Method::GET,
            &format!("/api/events/{event_id}/generate-qr"),
            Some(&token),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["event_name"], "Seminar");

    let bytes = general_purpose::STANDARD
        .decode(body["qr_code"].as_str().unwrap())
        .unwrap();
    let payload = bytes.strip_prefix(QR_PREFIX).unwrap();
    assert_eq!(payload, format!("{event_id},Seminar,Room 101").as_bytes());

    let (status, _) = app
        .send(Method::GET, "/api/events/99/generate-qr", Some(&token), None)
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn report_counts_today_only_in_total() {
    let app = TestApp::new();
    let token = app.staff_token().await;
    let today = Local::now().date_naive();
    for (name, date) in [
        ("Yesterday", today - Days::new(1)),
        ("Today", today),
        ("Tomorrow", today + Days::new(1)),
    ] {
        app.create_event(&token, name, &date.format("%Y-%m-%d").to_string())
            .await;
    }

    let (status, body) = app.get("/api/reports").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "total_events": 3, "upcoming_events": 1, "completed_events": 1 })
    );
}

#[tokio::test]
async fn non_numeric_event_id_is_a_json_bad_request() {
    let app = TestApp::new();
    let token = app.staff_token().await;

    for uri in [
        "/events/abc",
        "/api/event_registration/xyz",
        "/registrations/xyz",
        "/api/event_attendance/xyz",
        "/attendance/xyz",
    ] {
        let (status, body) = app.get(uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert!(body["error"].is_string(), "{uri}: {body}");
    }

    for (method, uri) in [
        (Method::DELETE, "/api/events/abc"),
        (Method::GET, "/api/events/abc/generate-qr"),
    ] {
        let (status, body) = app.send(method, uri, Some(&token), None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert!(body["error"].is_string(), "{uri}: {body}");
    }
}

#[tokio::test]
async fn empty_description_is_rejected_on_create_and_update() {
    let app = TestApp::new();
    let token = app.staff_token().await;
    let (status, body) = app
        .send(
            Method::POST,
            "/api/events",
            Some(&token),
            Some(json!({
                "event_name": "Seminar",
                "event_description": "",
                "location": "Room 101",
                "event_date": "2024-06-01",
                "start_time": "13:00",
                "end_time": "15:00",
            })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("event_description"));

    let event_id = app.create_event(&token, "Seminar", "2024-06-01").await;
    let (status, _) = app
        .send(
            Method::PUT,
            "/api/events",
            Some(&token),
            Some(json!({ "event_id": event_id, "event_description": "" })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
