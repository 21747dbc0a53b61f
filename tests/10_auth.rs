mod common;

use anyhow::Result;
use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn issued_token_is_accepted_immediately() -> Result<()> {
    let app = common::test_app();

    let (status, body) = common::send(
        &app,
        "POST",
        "/jwt",
        None,
        Some(json!({ "email": "a@x.com" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let token = body["token"].as_str().expect("token missing").to_string();

    let (status, _) =
        common::send(&app, "GET", "/my-bills/a@x.com", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    Ok(())
}

#[tokio::test]
async fn jwt_requires_an_email() -> Result<()> {
    let app = common::test_app();

    let (status, body) = common::send(
        &app,
        "POST",
        "/jwt",
        None,
        Some(json!({ "name": "no email here" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], true);
    Ok(())
}

#[tokio::test]
async fn missing_secret_is_a_server_configuration_error() -> Result<()> {
    let app = common::app_without_secret();

    let (status, body) = common::send(
        &app,
        "POST",
        "/jwt",
        None,
        Some(json!({ "email": "a@x.com" })),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["message"].as_str().unwrap().contains("secret"));
    Ok(())
}

#[tokio::test]
async fn protected_route_rejects_missing_header() -> Result<()> {
    let app = common::test_app();

    let (status, body) = common::send(&app, "GET", "/my-bills/a@x.com", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], "UNAUTHORIZED");
    Ok(())
}

#[tokio::test]
async fn protected_route_rejects_malformed_token() -> Result<()> {
    let app = common::test_app();

    let (status, _) = common::send(
        &app,
        "GET",
        "/my-bills/a@x.com",
        Some("not.a.jwt"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    Ok(())
}

#[tokio::test]
async fn protected_route_rejects_expired_token() -> Result<()> {
    let app = common::test_app();
    let token = common::expired_token_for("a@x.com");

    let (status, _) = common::send(&app, "GET", "/my-bills/a@x.com", Some(&token), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    Ok(())
}

#[tokio::test]
async fn protected_route_rejects_foreign_signature() -> Result<()> {
    let app = common::test_app();
    let token = utility_bill_api::auth::generate_jwt(
        "some-other-secret",
        &utility_bill_api::auth::Claims::new("a@x.com", 3600),
    )?;

    let (status, _) = common::send(&app, "GET", "/my-bills/a@x.com", Some(&token), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    Ok(())
}
