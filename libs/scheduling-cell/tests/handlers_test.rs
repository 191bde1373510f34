// libs/scheduling-cell/tests/handlers_test.rs
use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use chrono::{Duration, NaiveTime, Utc};
use serde_json::{json, Value};
use tower::ServiceExt;
use uuid::Uuid;

use provider_cell::services::catalog::AvailabilityCatalog;
use scheduling_cell::router::scheduling_routes;
use scheduling_cell::services::scheduler::SchedulingService;
use scheduling_cell::services::store::BookingStore;

struct TestApp {
    router: Router,
    provider_id: Uuid,
}

fn setup() -> TestApp {
    let catalog = Arc::new(AvailabilityCatalog::default());
    let provider_id = catalog.providers()[1].id; // extended-hours vet
    let store = Arc::new(BookingStore::new());
    let service = Arc::new(SchedulingService::new(catalog, store, 14));

    TestApp {
        router: scheduling_routes(service),
        provider_id,
    }
}

async fn post_json(router: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = serde_json::from_slice(&bytes).unwrap();
    (status, value)
}

fn booking_payload(provider_id: Uuid) -> Value {
    let date = (Utc::now() + Duration::days(1)).date_naive();
    json!({
        "id": Uuid::new_v4(),
        "provider_id": provider_id,
        "date": date,
        "time": NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
        "appointment_type": "consultation",
        "urgency": "low",
        "patient": {
            "first_name": "Ana",
            "last_name": "Reyes",
            "phone": "+15551234567",
            "email": "ana@example.com",
            "pet_name": "Mochi",
            "pet_type": "cat"
        }
    })
}

#[tokio::test]
async fn test_options_rejects_missing_fields_by_name() {
    let app = setup();

    let (status, body) = post_json(app.router, "/options", json!({})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"],
        "Missing required fields: first_name, last_name, phone, symptoms"
    );
}

#[tokio::test]
async fn test_options_reports_only_absent_fields() {
    let app = setup();

    let (status, body) = post_json(
        app.router,
        "/options",
        json!({
            "first_name": "Ana",
            "last_name": "Reyes",
            "phone": "+15551234567"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Missing required fields: symptoms");
}

#[tokio::test]
async fn test_options_happy_path() {
    let app = setup();

    let (status, body) = post_json(
        app.router,
        "/options",
        json!({
            "first_name": "Ana",
            "last_name": "Reyes",
            "phone": "+15551234567",
            "symptoms": "bleeding badly",
            "urgency": "routine"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    // Symptom keyword dominates the routine hint.
    assert_eq!(body["appointment_type"], "emergency");
    assert_eq!(body["urgency"], "high");
    assert!(body["options"].as_array().is_some());
    assert!(body["recommendations"].as_array().is_some());
}

#[tokio::test]
async fn test_book_rejects_missing_fields_by_name() {
    let app = setup();

    let (status, body) = post_json(app.router, "/book", json!({})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"],
        "Missing required fields: id, provider_id, date, time, patient"
    );
}

#[tokio::test]
async fn test_book_and_conflict_on_rebook() {
    let app = setup();
    let payload = booking_payload(app.provider_id);

    let (status, body) = post_json(app.router.clone(), "/book", payload.clone()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["appointment"]["status"], "scheduled");

    // The same window for the same provider is now taken.
    let (status, body) = post_json(app.router, "/book", payload).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "Appointment slot no longer available");
}

#[tokio::test]
async fn test_book_unknown_provider() {
    let app = setup();
    let payload = booking_payload(Uuid::new_v4());

    let (status, body) = post_json(app.router, "/book", payload).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Provider not found");
}

#[tokio::test]
async fn test_cancel_unknown_appointment() {
    let app = setup();

    let (status, body) = post_json(
        app.router,
        &format!("/appointments/{}/cancel", Uuid::new_v4()),
        json!({ "reason": "no longer needed" }),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Appointment not found");
}

#[tokio::test]
async fn test_booking_lifecycle_over_http() {
    let app = setup();
    let payload = booking_payload(app.provider_id);

    let (_, body) = post_json(app.router.clone(), "/book", payload).await;
    let appointment_id = body["appointment"]["id"].as_str().unwrap().to_string();

    let (status, body) = post_json(
        app.router.clone(),
        &format!("/appointments/{}/cancel", appointment_id),
        json!({ "reason": "schedule change" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["appointment"]["status"], "cancelled");
    assert_eq!(body["appointment"]["cancellation_reason"], "schedule change");

    // Cancelled bookings stay on record.
    let request = Request::builder()
        .method("GET")
        .uri(format!("/appointments/{}", appointment_id))
        .body(Body::empty())
        .unwrap();
    let response = app.router.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
