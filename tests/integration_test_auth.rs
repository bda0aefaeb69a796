mod common;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use common::TestApp;
use serde_json::{json, Value};
use tower::ServiceExt;

async fn parse_body(response: axum::response::Response) -> Value {
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    if bytes.is_empty() {
        panic!("Response body is empty. Status: {}", status);
    }
    match serde_json::from_slice(&bytes) {
        Ok(v) => v,
        Err(e) => panic!("Failed to parse JSON: {:?}. Status: {}. Body: {:?}", e, status, String::from_utf8_lossy(&bytes))
    }
}

#[tokio::test]
async fn test_login_and_me() {
    let app = TestApp::new().await;
    app.seed_user("daiana", "password").await;

    let auth = app.login("daiana", "password").await;
    assert!(!auth.access_token.is_empty());
    assert!(!auth.csrf_token.is_empty());

    let me_res = app.router.clone().oneshot(
        Request::builder().method("GET").uri("/api/v1/auth/me")
            .header(header::COOKIE, format!("access_token={}", auth.access_token))
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    assert_eq!(me_res.status(), StatusCode::OK);
    let me = parse_body(me_res).await;
    assert_eq!(me["username"], "daiana");
}

#[tokio::test]
async fn test_login_wrong_password_rejected() {
    let app = TestApp::new().await;
    app.seed_user("antonino", "password").await;

    let res = app.router.clone().oneshot(
        Request::builder().method("POST").uri("/api/v1/auth/login")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json!({"username": "antonino", "password": "wrong"}).to_string())).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    let res = app.router.clone().oneshot(
        Request::builder().method("POST").uri("/api/v1/auth/login")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json!({"username": "nobody", "password": "password"}).to_string())).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_me_without_session_rejected() {
    let app = TestApp::new().await;

    let res = app.router.clone().oneshot(
        Request::builder().method("GET").uri("/api/v1/auth/me")
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_mutation_without_csrf_header_rejected() {
    let app = TestApp::new().await;
    app.seed_user("marco", "password").await;
    let auth = app.login("marco", "password").await;

    let res = app.router.clone().oneshot(
        Request::builder().method("POST").uri("/api/v1/invitations")
            .header(header::COOKIE, format!("access_token={}", auth.access_token))
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json!({"name": "Famiglia Verdi"}).to_string())).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_refresh_rotates_tokens() {
    let app = TestApp::new().await;
    app.seed_user("daiana", "password").await;

    let login_res = app.router.clone().oneshot(
        Request::builder().method("POST").uri("/api/v1/auth/login")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json!({"username": "daiana", "password": "password"}).to_string())).unwrap()
    ).await.unwrap();
    assert_eq!(login_res.status(), StatusCode::OK);

    let cookies: Vec<String> = login_res.headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .map(|h| h.to_str().unwrap().to_string())
        .collect();
    let refresh_cookie = cookies.iter()
        .find(|c| c.starts_with("refresh_token="))
        .expect("No refresh_token cookie returned");
    let refresh_value = refresh_cookie
        .split(';').next().unwrap()
        .trim_start_matches("refresh_token=")
        .to_string();

    let refresh_res = app.router.clone().oneshot(
        Request::builder().method("POST").uri("/api/v1/auth/refresh")
            .header(header::COOKIE, format!("refresh_token={}", refresh_value))
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    assert_eq!(refresh_res.status(), StatusCode::OK);
    let body = parse_body(refresh_res).await;
    assert_eq!(body["user"]["username"], "daiana");
    assert!(body["csrf_token"].as_str().is_some());

    // The old refresh token was consumed by the rotation.
    let replay_res = app.router.clone().oneshot(
        Request::builder().method("POST").uri("/api/v1/auth/refresh")
            .header(header::COOKIE, format!("refresh_token={}", refresh_value))
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    assert_eq!(replay_res.status(), StatusCode::UNAUTHORIZED);
}
