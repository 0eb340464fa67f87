//! HTTP-level tests: full round-trips through the router against a seeded
//! in-memory state.

use axum::http::StatusCode;
use axum_test::TestServer;
use chrono::Utc;
use marketdesk::config::ServerConfig;
use marketdesk::seed;
use marketdesk::server::build_router;
use serde_json::{Value, json};

fn make_server() -> TestServer {
    let config = ServerConfig::default();
    let state = seed::build_state(&config).unwrap();
    TestServer::new(build_router(state))
}

async fn login(server: &TestServer) -> String {
    let response = server
        .post("/api/auth/login")
        .json(&json!({"email": "admin@admin.com", "password": "admin123"}))
        .await;
    response.assert_status_ok();
    let body: Value = response.json();
    body["token"].as_str().unwrap().to_string()
}

// ==========================================================================
// Authentication
// ==========================================================================

#[tokio::test]
async fn test_login_returns_token_and_user() {
    let server = make_server();
    let response = server
        .post("/api/auth/login")
        .json(&json!({"email": "admin@admin.com", "password": "admin123"}))
        .await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert!(body["token"].as_str().is_some());
    assert_eq!(body["user"]["email"], "admin@admin.com");
    assert_eq!(body["user"]["role"], "admin");
    // The stored password never leaves the store
    assert!(body["user"].get("password").is_none());
}

#[tokio::test]
async fn test_wrong_password_is_401() {
    let server = make_server();
    let response = server
        .post("/api/auth/login")
        .json(&json!({"email": "admin@admin.com", "password": "nope"}))
        .await;
    response.assert_status(StatusCode::UNAUTHORIZED);
    let body: Value = response.json();
    assert_eq!(body["code"], "INVALID_CREDENTIALS");
}

#[tokio::test]
async fn test_me_requires_a_session() {
    let server = make_server();
    let response = server.get("/api/auth/me").await;
    response.assert_status(StatusCode::UNAUTHORIZED);

    let token = login(&server).await;
    let response = server.get("/api/auth/me").authorization_bearer(&token).await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["email"], "admin@admin.com");
}

#[tokio::test]
async fn test_logout_invalidates_the_token() {
    let server = make_server();
    let token = login(&server).await;

    let response = server
        .post("/api/auth/logout")
        .authorization_bearer(&token)
        .await;
    response.assert_status(StatusCode::NO_CONTENT);

    let response = server.get("/api/auth/me").authorization_bearer(&token).await;
    response.assert_status(StatusCode::UNAUTHORIZED);
}

// ==========================================================================
// List endpoints
// ==========================================================================

#[tokio::test]
async fn test_list_payments_shape() {
    let server = make_server();
    let response = server.get("/api/payments").await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["pagination"]["total"], 8);
    assert_eq!(body["pagination"]["page"], 1);
    assert_eq!(body["pagination"]["limit"], 8);
    assert_eq!(body["pagination"]["total_pages"], 1);
    assert_eq!(body["pagination"]["has_next"], false);
    assert_eq!(body["pagination"]["has_prev"], false);
    assert_eq!(body["data"].as_array().unwrap().len(), 8);
    // Headline stats ride along with every list response
    assert_eq!(body["stats"]["total_transactions"], 8.0);
    assert_eq!(body["stats"]["total_revenue"], 575.0);
}

#[tokio::test]
async fn test_list_search_and_filter_combine() {
    let server = make_server();
    let response = server
        .get("/api/payments")
        .add_query_param("q", "martinez")
        .add_query_param("filter", r#"{"status":"completed"}"#)
        .await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["pagination"]["total"], 2);
    for row in body["data"].as_array().unwrap() {
        assert_eq!(row["provider"], "Alex Martinez");
        assert_eq!(row["status"], "completed");
    }
}

#[tokio::test]
async fn test_list_range_filter_and_sort() {
    let server = make_server();
    let response = server
        .get("/api/payments")
        .add_query_param("filter", r#"{"amount>=":100,"amount<=":250}"#)
        .add_query_param("sort", "amount:desc")
        .await;
    response.assert_status_ok();
    let body: Value = response.json();
    let amounts: Vec<f64> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|row| row["amount"].as_f64().unwrap())
        .collect();
    assert_eq!(amounts, vec![250.0, 200.0, 175.0, 150.0, 130.0]);
}

#[tokio::test]
async fn test_unknown_filter_field_fails_closed() {
    let server = make_server();
    let response = server
        .get("/api/bookings")
        .add_query_param("filter", r#"{"no_such_field":"x"}"#)
        .await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["pagination"]["total"], 0);
    assert_eq!(body["pagination"]["total_pages"], 1);
    assert_eq!(body["pagination"]["window"], json!([1]));
}

#[tokio::test]
async fn test_pagination_clamps_and_windows() {
    let server = make_server();
    let response = server
        .get("/api/bookings")
        .add_query_param("limit", "3")
        .add_query_param("page", "99")
        .await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["pagination"]["total"], 10);
    assert_eq!(body["pagination"]["total_pages"], 4);
    assert_eq!(body["pagination"]["page"], 4);
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
    assert_eq!(body["pagination"]["window"], json!([1, 2, 3, 4]));
    assert_eq!(body["pagination"]["has_prev"], true);
    assert_eq!(body["pagination"]["has_next"], false);
}

// ==========================================================================
// Export
// ==========================================================================

#[tokio::test]
async fn test_export_download_headers_and_body() {
    let server = make_server();
    let response = server
        .get("/api/payments/export")
        .add_query_param("filter", r#"{"status":"completed"}"#)
        .await;
    response.assert_status_ok();

    let content_type = response.header("content-type");
    assert_eq!(content_type.to_str().unwrap(), "text/plain; charset=utf-8");

    let expected = format!(
        "attachment; filename=\"payment_export_{}.txt\"",
        Utc::now().date_naive()
    );
    let disposition = response.header("content-disposition");
    assert_eq!(disposition.to_str().unwrap(), expected);

    let body = response.text();
    let mut lines = body.lines();
    assert_eq!(
        lines.next(),
        Some("Transaction ID,Customer,Provider,Service,Amount,Status,Method,Date")
    );
    // header plus one row per completed payment
    assert_eq!(lines.count(), 4);
}

// ==========================================================================
// Dashboard
// ==========================================================================

#[tokio::test]
async fn test_dashboard_aggregates_full_collections() {
    let server = make_server();
    let response = server.get("/api/dashboard").await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["bookings"]["total_bookings"], 10.0);
    assert_eq!(body["bookings"]["completed"], 4.0);
    assert_eq!(body["bookings"]["revenue"], 575.0);
    assert_eq!(body["bookings"]["completion_rate"], 40.0);
    assert_eq!(body["payments"]["total_revenue"], 575.0);
    assert_eq!(body["payments"]["failed_payments"], 1.0);
}

// ==========================================================================
// Notifications
// ==========================================================================

#[tokio::test]
async fn test_notifications_require_auth() {
    let server = make_server();
    let response = server.get("/api/notifications").await;
    response.assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_notifications_list_and_mark_read() {
    let server = make_server();
    let token = login(&server).await;

    let response = server
        .get("/api/notifications")
        .authorization_bearer(&token)
        .await;
    response.assert_status_ok();
    let list: Value = response.json();
    let items = list.as_array().unwrap();
    assert_eq!(items.len(), 4);
    assert!(items.iter().all(|n| n["is_read"] == false));

    let id = items[0]["id"].as_str().unwrap();
    let response = server
        .patch(&format!("/api/notifications/{id}/read"))
        .authorization_bearer(&token)
        .await;
    response.assert_status(StatusCode::NO_CONTENT);

    let response = server
        .get("/api/notifications")
        .authorization_bearer(&token)
        .await;
    let list: Value = response.json();
    let read: Vec<bool> = list
        .as_array()
        .unwrap()
        .iter()
        .map(|n| n["is_read"].as_bool().unwrap())
        .collect();
    assert_eq!(read.iter().filter(|r| **r).count(), 1);
}

#[tokio::test]
async fn test_mark_unknown_notification_is_404() {
    let server = make_server();
    let token = login(&server).await;
    let response = server
        .patch(&format!("/api/notifications/{}/read", uuid::Uuid::new_v4()))
        .authorization_bearer(&token)
        .await;
    response.assert_status(StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["code"], "NOT_FOUND");
}
