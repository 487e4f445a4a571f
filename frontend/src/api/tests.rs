#![cfg(not(coverage))]

use super::*;
use crate::utils::storage;
use httpmock::prelude::*;
use serde_json::json;

fn seed_token() {
    storage::set_item(storage::keys::ACCESS_TOKEN, "test-token");
}

fn clear_token() {
    storage::remove_item(storage::keys::ACCESS_TOKEN);
}

fn employee_json(id: &str) -> serde_json::Value {
    json!({
        "id": id,
        "employee_id": format!("EMP-{}", id),
        "full_name": "Alice Example",
        "email": "alice@example.com",
        "role_names": ["Sales"],
        "department": "Sales",
        "is_active": true,
        "can_manage_attendance": true,
        "attendance_status": {
            "status": "present",
            "can_checkin": false,
            "can_checkout": true
        }
    })
}

#[tokio::test]
async fn fetch_employees_returns_collection_from_employees_field() {
    let server = MockServer::start_async().await;
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/employees")
            .query_param("page", "1")
            .query_param("limit", "50")
            .header("authorization", "Bearer test-token");
        then.status(200).json_body(json!({
            "success": true,
            "employees": [employee_json("e1"), employee_json("e2")]
        }));
    });

    seed_token();
    let client = ApiClient::new_with_base_url(server.url("/api"));
    let records = client.fetch_employees().await.unwrap();
    clear_token();

    mock.assert();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].full_name.as_deref(), Some("Alice Example"));
}

#[tokio::test]
async fn fetch_employees_accepts_data_field_alias() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/api/employees");
        then.status(200).json_body(json!({
            "success": true,
            "data": [employee_json("e1")]
        }));
    });

    seed_token();
    let client = ApiClient::new_with_base_url(server.url("/api"));
    let records = client.fetch_employees().await.unwrap();
    clear_token();

    assert_eq!(records.len(), 1);
}

#[tokio::test]
async fn fetch_employees_reports_failure_flagged_body() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/api/employees");
        then.status(200).json_body(json!({"success": false}));
    });

    seed_token();
    let client = ApiClient::new_with_base_url(server.url("/api"));
    let error = client.fetch_employees().await.unwrap_err();
    clear_token();

    assert_eq!(error, EmployeeFetchError::Rejected);
}

#[tokio::test]
async fn fetch_employees_maps_http_rejection_to_unauthorized() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/api/employees");
        then.status(401).json_body(json!({"detail": "token expired"}));
    });

    seed_token();
    let client = ApiClient::new_with_base_url(server.url("/api"));
    let error = client.fetch_employees().await.unwrap_err();
    clear_token();

    assert_eq!(error, EmployeeFetchError::Unauthorized(401));
}

#[tokio::test]
async fn fetch_employees_maps_forbidden_to_unauthorized() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/api/employees");
        then.status(403).json_body(json!({}));
    });

    seed_token();
    let client = ApiClient::new_with_base_url(server.url("/api"));
    let error = client.fetch_employees().await.unwrap_err();
    clear_token();

    assert_eq!(error, EmployeeFetchError::Unauthorized(403));
}

#[tokio::test]
async fn fetch_employees_without_token_skips_the_request() {
    let server = MockServer::start_async().await;
    let mock = server.mock(|when, then| {
        when.method(GET).path("/api/employees");
        then.status(200).json_body(json!({"success": true, "employees": []}));
    });

    clear_token();
    let client = ApiClient::new_with_base_url(server.url("/api"));
    let error = client.fetch_employees().await.unwrap_err();

    assert_eq!(error, EmployeeFetchError::MissingCredentials);
    assert_eq!(mock.hits(), 0);
}

#[tokio::test]
async fn fetch_employees_maps_malformed_body_to_network_error() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/api/employees");
        then.status(200)
            .header("content-type", "application/json")
            .body("not json");
    });

    seed_token();
    let client = ApiClient::new_with_base_url(server.url("/api"));
    let error = client.fetch_employees().await.unwrap_err();
    clear_token();

    assert!(matches!(error, EmployeeFetchError::Network(_)));
}
