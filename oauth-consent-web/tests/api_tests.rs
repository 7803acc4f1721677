//! Endpoint integration tests

use actix_web::http::StatusCode;
use actix_web::{test, App};
use serde_json::json;

use oauth_consent_web::handlers;

#[actix_web::test]
async fn consent_config_serves_the_documented_defaults() {
    let app = test::init_service(App::new().configure(handlers::configure)).await;

    let req = test::TestRequest::get()
        .uri("/api/consent-config")
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["branding"]["companyName"], "Acme Inc");
    assert_eq!(body["branding"]["companyLogo"], "/logo.svg");
    assert_eq!(
        body["branding"]["serviceDescription"],
        "Requesting API access to your account"
    );
    assert_eq!(body["regions"].as_array().unwrap().len(), 4);
    assert_eq!(body["regions"][0]["value"], "us-east-1");

    let permissions = body["permissions"].as_array().unwrap();
    assert_eq!(permissions.len(), 3);
    assert_eq!(permissions[0]["id"], "read");
    assert_eq!(permissions[0]["defaultChecked"], true);
    assert_eq!(permissions[2]["id"], "delete");
    assert_eq!(permissions[2]["defaultChecked"], false);

    assert_eq!(body["defaults"]["apiVersion"], "v2.0");
    assert_eq!(body["defaults"]["timeout"], 30);
}

#[actix_web::test]
async fn authorize_rejects_a_blank_token() {
    let app = test::init_service(App::new().configure(handlers::configure)).await;

    let req = test::TestRequest::post()
        .uri("/api/authorize")
        .set_json(json!({"apiToken": "   "}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "API token is required");
    assert!(body.get("token").is_none());
}

#[actix_web::test]
async fn authorize_rejects_a_missing_token() {
    let app = test::init_service(App::new().configure(handlers::configure)).await;

    let req = test::TestRequest::post()
        .uri("/api/authorize")
        .set_json(json!({}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn authorize_issues_a_demo_token() {
    let app = test::init_service(App::new().configure(handlers::configure)).await;

    let req = test::TestRequest::post()
        .uri("/api/authorize")
        .set_json(json!({
            "apiToken": "abc123",
            "permissions": ["read", "write"],
            "region": "us-east-1",
            "apiVersion": "v2.0",
            "timeout": 30
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Authorization successful");
    assert_eq!(body["redirectUrl"], "/dashboard");
    assert_eq!(body["token"]["expiresIn"], 3600);
    assert!(!body["token"]["accessToken"].as_str().unwrap().is_empty());
}

#[actix_web::test]
async fn authorize_accepts_a_token_with_surrounding_whitespace() {
    let app = test::init_service(App::new().configure(handlers::configure)).await;

    let req = test::TestRequest::post()
        .uri("/api/authorize")
        .set_json(json!({"apiToken": "  abc123  "}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
}
