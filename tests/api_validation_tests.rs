// SPDX-License-Identifier: MIT

//! API input validation tests.
//!
//! All of these run against the offline mock database: a validation
//! failure must be rejected with 400 before any database access, so a
//! 500 here means validation ran too late.

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use serde_json::json;
use tower::ServiceExt;

mod common;

fn post_json(uri: &str, token: Option<&str>, body: serde_json::Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");

    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }

    builder.body(Body::from(body.to_string())).unwrap()
}

#[tokio::test]
async fn test_register_missing_fields() {
    let (app, _) = common::create_test_app();

    let response = app
        .oneshot(post_json(
            "/users/register",
            None,
            json!({ "name": "Asha", "email": "" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_login_missing_password() {
    let (app, _) = common::create_test_app();

    let response = app
        .oneshot(post_json(
            "/users/login",
            None,
            json!({ "email": "asha@example.com" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_battery_update_level_out_of_range() {
    let (app, state) = common::create_test_app();
    let token = common::create_test_jwt("user-1", &state.config.jwt_signing_key);

    let response = app
        .oneshot(post_json(
            "/battery/update",
            Some(&token),
            json!({
                "level": 140.0,
                "last_charged": "2024-01-01T00:00:00Z",
                "health": "Good"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_battery_update_missing_health() {
    let (app, state) = common::create_test_app();
    let token = common::create_test_jwt("user-1", &state.config.jwt_signing_key);

    let response = app
        .oneshot(post_json(
            "/battery/update",
            Some(&token),
            json!({
                "level": 80.0,
                "last_charged": "2024-01-01T00:00:00Z"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_add_trip_missing_start_location() {
    let (app, state) = common::create_test_app();
    let token = common::create_test_jwt("user-1", &state.config.jwt_signing_key);

    let response = app
        .oneshot(post_json(
            "/trips/add",
            Some(&token),
            json!({
                "end_location": "Pune",
                "distance": 148.0
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_add_trip_negative_distance() {
    let (app, state) = common::create_test_app();
    let token = common::create_test_jwt("user-1", &state.config.jwt_signing_key);

    let response = app
        .oneshot(post_json(
            "/trips/add",
            Some(&token),
            json!({
                "start_location": "Mumbai",
                "end_location": "Pune",
                "distance": -10.0
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_maps_route_missing_numeric_field() {
    let (app, state) = common::create_test_app();
    let token = common::create_test_jwt("user-1", &state.config.jwt_signing_key);

    let response = app
        .oneshot(post_json(
            "/maps/route",
            Some(&token),
            json!({
                "source": "Mumbai",
                "destination": "Pune",
                "trip_distance": 148.0,
                "elevation_change": 120.0,
                "battery_consumption": 15.0
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_maps_directions_rejects_non_coordinates() {
    let (app, state) = common::create_test_app();
    let token = common::create_test_jwt("user-1", &state.config.jwt_signing_key);

    let response = app
        .oneshot(post_json(
            "/maps/directions",
            Some(&token),
            json!({ "start": "Mumbai", "end": "73.8567,18.5204" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
