mod common;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use common::{AuthHeaders, TestApp};
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

async fn create_invitation(app: &TestApp, auth: &AuthHeaders, name: &str) -> i64 {
    let res = app.router.clone().oneshot(
        Request::builder().method("POST").uri("/api/v1/invitations")
            .header(header::COOKIE, format!("access_token={}", auth.access_token))
            .header("X-CSRF-Token", &auth.csrf_token)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json!({"name": name}).to_string())).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    parse_body(res).await["invitation_id"].as_i64().unwrap()
}

#[tokio::test]
async fn test_add_guest_round_trip() {
    let app = TestApp::new().await;
    app.seed_user("daiana", "password").await;
    let auth = app.login("daiana", "password").await;
    let invitation_id = create_invitation(&app, &auth, "Famiglia Rossi").await;

    let payload = json!({
        "full_name": "Marco Bianchi",
        "menu_type": "Vegetarian",
        "menu_kids": true,
        "needs": "Bus-And-Hotel",
        "status": "Accepted",
        "nights_needed": "21-Only",
        "estimated_participation": false
    });
    let res = app.router.clone().oneshot(
        Request::builder().method("POST").uri(format!("/api/v1/invitations/{}/guests", invitation_id))
            .header(header::COOKIE, format!("access_token={}", auth.access_token))
            .header("X-CSRF-Token", &auth.csrf_token)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(payload.to_string())).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    let guest_id = parse_body(res).await["guest_id"].as_i64().unwrap();

    let res = app.router.clone().oneshot(
        Request::builder().method("GET").uri(format!("/api/v1/invitations/{}/guests", invitation_id))
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let guests = parse_body(res).await;
    let guest = guests.as_array().unwrap().iter()
        .find(|g| g["guest_id"] == guest_id)
        .expect("Created guest missing from invitation");

    assert_eq!(guest["invitation_id"], invitation_id);
    assert_eq!(guest["full_name"], "Marco Bianchi");
    assert_eq!(guest["menu_type"], "Vegetarian");
    assert_eq!(guest["menu_kids"], true);
    assert_eq!(guest["needs"], "Bus-And-Hotel");
    assert_eq!(guest["status"], "Accepted");
    assert_eq!(guest["nights_needed"], "21-Only");
    assert_eq!(guest["estimated_participation"], false);
}

#[tokio::test]
async fn test_add_guest_applies_defaults() {
    let app = TestApp::new().await;
    app.seed_user("daiana", "password").await;
    let auth = app.login("daiana", "password").await;
    let invitation_id = create_invitation(&app, &auth, "Famiglia Rossi").await;

    let res = app.router.clone().oneshot(
        Request::builder().method("POST").uri(format!("/api/v1/invitations/{}/guests", invitation_id))
            .header(header::COOKIE, format!("access_token={}", auth.access_token))
            .header("X-CSRF-Token", &auth.csrf_token)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json!({"full_name": "Anna Rossi"}).to_string())).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    let guest_id = parse_body(res).await["guest_id"].as_i64().unwrap();

    let res = app.router.clone().oneshot(
        Request::builder().method("GET").uri(format!("/api/v1/invitations/{}/guests", invitation_id))
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    let guests = parse_body(res).await;
    let guest = guests.as_array().unwrap().iter()
        .find(|g| g["guest_id"] == guest_id)
        .unwrap()
        .clone();

    assert_eq!(guest["menu_type"], "Standard");
    assert_eq!(guest["menu_kids"], false);
    assert_eq!(guest["needs"], "Autonomous");
    assert_eq!(guest["status"], "Pending");
    assert_eq!(guest["nights_needed"], "None");
    assert_eq!(guest["estimated_participation"], true);
}

#[tokio::test]
async fn test_add_guest_requires_name_and_invitation() {
    let app = TestApp::new().await;
    app.seed_user("daiana", "password").await;
    let auth = app.login("daiana", "password").await;
    let invitation_id = create_invitation(&app, &auth, "Famiglia Rossi").await;

    let res = app.router.clone().oneshot(
        Request::builder().method("POST").uri(format!("/api/v1/invitations/{}/guests", invitation_id))
            .header(header::COOKIE, format!("access_token={}", auth.access_token))
            .header("X-CSRF-Token", &auth.csrf_token)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json!({"full_name": "  "}).to_string())).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let unknown = if invitation_id == 123_456 { 123_457 } else { 123_456 };
    let res = app.router.clone().oneshot(
        Request::builder().method("POST").uri(format!("/api/v1/invitations/{}/guests", unknown))
            .header(header::COOKIE, format!("access_token={}", auth.access_token))
            .header("X-CSRF-Token", &auth.csrf_token)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json!({"full_name": "Anna Rossi"}).to_string())).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_single_edit_keeps_unpatched_fields() {
    let app = TestApp::new().await;
    app.seed_user("daiana", "password").await;
    let auth = app.login("daiana", "password").await;
    let invitation_id = create_invitation(&app, &auth, "Famiglia Rossi").await;

    let res = app.router.clone().oneshot(
        Request::builder().method("POST").uri(format!("/api/v1/invitations/{}/guests", invitation_id))
            .header(header::COOKIE, format!("access_token={}", auth.access_token))
            .header("X-CSRF-Token", &auth.csrf_token)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json!({
                "full_name": "Marco Bianchi",
                "menu_type": "Vegan",
                "needs": "Hotel-Only"
            }).to_string())).unwrap()
    ).await.unwrap();
    let guest_id = parse_body(res).await["guest_id"].as_i64().unwrap();

    // Patch only the status.
    let res = app.router.clone().oneshot(
        Request::builder().method("PUT").uri(format!("/api/v1/guests/{}", guest_id))
            .header(header::COOKIE, format!("access_token={}", auth.access_token))
            .header("X-CSRF-Token", &auth.csrf_token)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json!({"status": "Accepted"}).to_string())).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let guest = parse_body(res).await;

    assert_eq!(guest["status"], "Accepted");
    assert_eq!(guest["full_name"], "Marco Bianchi");
    assert_eq!(guest["menu_type"], "Vegan");
    assert_eq!(guest["needs"], "Hotel-Only");

    // The single accepted guest makes the invitation Accepted.
    let res = app.router.clone().oneshot(
        Request::builder().method("GET").uri(format!("/api/v1/invitations/{}", invitation_id))
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    let body = parse_body(res).await;
    assert_eq!(body["status"], "Accepted");
}

#[tokio::test]
async fn test_delete_guest() {
    let app = TestApp::new().await;
    app.seed_user("daiana", "password").await;
    let auth = app.login("daiana", "password").await;
    let invitation_id = create_invitation(&app, &auth, "Famiglia Rossi").await;

    let res = app.router.clone().oneshot(
        Request::builder().method("POST").uri(format!("/api/v1/invitations/{}/guests", invitation_id))
            .header(header::COOKIE, format!("access_token={}", auth.access_token))
            .header("X-CSRF-Token", &auth.csrf_token)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json!({"full_name": "Mario Rossi"}).to_string())).unwrap()
    ).await.unwrap();
    let guest_id = parse_body(res).await["guest_id"].as_i64().unwrap();

    let res = app.router.clone().oneshot(
        Request::builder().method("DELETE").uri(format!("/api/v1/guests/{}", guest_id))
            .header(header::COOKIE, format!("access_token={}", auth.access_token))
            .header("X-CSRF-Token", &auth.csrf_token)
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::NO_CONTENT);

    let res = app.router.clone().oneshot(
        Request::builder().method("DELETE").uri(format!("/api/v1/guests/{}", guest_id))
            .header(header::COOKIE, format!("access_token={}", auth.access_token))
            .header("X-CSRF-Token", &auth.csrf_token)
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}
