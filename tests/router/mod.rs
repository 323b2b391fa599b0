//! Tests for the complete application service.
//!
//! These tests send requests through the router with every layer attached, covering path
//! normalisation, extractor rejections and multi-step flows across endpoints.

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
};
use multiverse_test_utils::prelude::*;
use sea_orm::EntityTrait;
use serde_json::json;
use tower::ServiceExt;

use crate::{
    util::{send, send_raw},
    TestContextExt,
};

/// Tests the full lifecycle of a user and a favorite.
///
/// Expected: create, read, add, list and delete succeed, and a second delete is 404
#[tokio::test]
async fn user_favorite_lifecycle() -> Result<(), TestError> {
    let test = TestBuilder::new().with_multiverse_tables().build().await?;
    let app = test.into_app();

    let (status, body) = send(
        &app,
        Method::POST,
        "/user",
        Some(json!({ "email": "a@x.com", "password": "p" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "msg": "user created", "result": { "id": 1, "email": "a@x.com" } })
    );

    let (status, body) = send(&app, Method::GET, "/user/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "id": 1, "email": "a@x.com" }));

    let (status, body) = send(
        &app,
        Method::POST,
        "/user/1",
        Some(json!({ "name": "favitem", "user_id": 1 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["msg"], json!("favorite added"));
    assert_eq!(body["result"]["user_id"], json!(1));
    let favorite_id = body["result"]["id"].as_i64().expect("favorite id");

    let (status, body) = send(&app, Method::GET, "/user/1/favorites", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["results"].as_array().map(Vec::len), Some(1));
    assert_eq!(body["results"][0]["name"], json!("favitem"));

    let uri = format!("/user/1/favorites/{}", favorite_id);
    let (status, body) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "msg": "Your favorite item has been deleted!" }));

    let (status, body) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], json!(true));

    Ok(())
}

/// Tests that missing records return 404 for every entity.
///
/// Expected: 404 NOT_FOUND in the error envelope
#[tokio::test]
async fn not_found_for_missing_records() -> Result<(), TestError> {
    let test = TestBuilder::new().with_multiverse_tables().build().await?;
    let app = test.into_app();

    for uri in ["/user/99", "/character/99", "/planet/99", "/user/99/favorites"] {
        let (status, body) = send(&app, Method::GET, uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
        assert_eq!(body["error"], json!(true), "{uri}");
    }

    Ok(())
}

/// Tests that trailing slashes reach the same handler.
///
/// Expected: 200 OK with identical bodies
#[tokio::test]
async fn ignores_trailing_slash() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_multiverse_tables()
        .with_user("rick@citadel.com")
        .build()
        .await?;
    let app = test.into_app();

    let (status, with_slash) = send(&app, Method::GET, "/user/", None).await;
    assert_eq!(status, StatusCode::OK);
    let (_, without_slash) = send(&app, Method::GET, "/user", None).await;
    assert_eq!(with_slash, without_slash);

    Ok(())
}

/// Tests malformed JSON bodies.
///
/// Expected: 400 BAD_REQUEST in the error envelope
#[tokio::test]
async fn bad_request_for_malformed_json() -> Result<(), TestError> {
    let test = TestBuilder::new().with_multiverse_tables().build().await?;
    let app = test.into_app();

    let (status, body) = send_raw(
        &app,
        Method::POST,
        "/user",
        "application/json",
        "{\"email\": ",
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], json!(true));
    assert!(body["message"]
        .as_str()
        .is_some_and(|m| m.starts_with("Invalid JSON body")));

    Ok(())
}

/// Tests a body sent without a JSON content type.
///
/// Expected: 400 BAD_REQUEST in the error envelope
#[tokio::test]
async fn bad_request_for_missing_content_type() -> Result<(), TestError> {
    let test = TestBuilder::new().with_multiverse_tables().build().await?;
    let app = test.into_app();

    let (status, body) = send_raw(
        &app,
        Method::POST,
        "/user",
        "text/plain",
        "{\"email\": \"a@x.com\", \"password\": \"p\"}",
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], json!(true));

    Ok(())
}

/// Tests missing required fields in a well formed body.
///
/// Expected: 400 BAD_REQUEST naming the field
#[tokio::test]
async fn bad_request_for_missing_field() -> Result<(), TestError> {
    let test = TestBuilder::new().with_multiverse_tables().build().await?;
    let app = test.into_app();

    let (status, body) = send(&app, Method::POST, "/user", Some(json!({ "email": "a@x.com" }))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({ "message": "Missing required field: password", "error": true })
    );

    Ok(())
}

/// Tests a path id that is not a number.
///
/// Expected: 400 BAD_REQUEST in the error envelope
#[tokio::test]
async fn bad_request_for_non_numeric_id() -> Result<(), TestError> {
    let test = TestBuilder::new().with_multiverse_tables().build().await?;
    let app = test.into_app();

    let (status, body) = send(&app, Method::GET, "/character/rick", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], json!(true));
    assert!(body["message"]
        .as_str()
        .is_some_and(|m| m.starts_with("Invalid path parameter")));

    Ok(())
}

/// Tests creating a second user with the same email.
///
/// Expected: 409 CONFLICT and a single stored user
#[tokio::test]
async fn conflict_for_duplicate_email() -> Result<(), TestError> {
    let test = TestBuilder::new().with_multiverse_tables().build().await?;
    let app = test.into_app();
    let payload = json!({ "email": "a@x.com", "password": "p" });

    let (status, _) = send(&app, Method::POST, "/user", Some(payload.clone())).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&app, Method::POST, "/user", Some(payload)).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], json!(true));

    let users = entity::prelude::User::find().all(&test.db).await?;
    assert_eq!(users.len(), 1);

    Ok(())
}

/// Tests deleting a favorite through another user's path.
///
/// Expected: 404 NOT_FOUND and the favorite still listed for its owner
#[tokio::test]
async fn delete_favorite_of_other_user_keeps_row() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_multiverse_tables()
        .with_user("rick@citadel.com")
        .with_user("morty@smith.com")
        .with_favorite(1, "portal gun", None, None)
        .build()
        .await?;
    let app = test.into_app();

    let (status, _) = send(&app, Method::DELETE, "/user/2/favorites/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = send(&app, Method::GET, "/user/1/favorites", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["results"][0]["id"], json!(1));

    Ok(())
}

/// Tests that repeated reads without writes are identical.
///
/// Expected: equal bodies for consecutive GET /user and GET /character
#[tokio::test]
async fn repeated_reads_are_identical() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_multiverse_tables()
        .with_user("rick@citadel.com")
        .with_user("morty@smith.com")
        .with_character("Rick Sanchez")
        .with_character("Morty Smith")
        .build()
        .await?;
    let app = test.into_app();

    for uri in ["/user", "/character"] {
        let (_, first) = send(&app, Method::GET, uri, None).await;
        let (_, second) = send(&app, Method::GET, uri, None).await;
        assert_eq!(first, second, "{uri}");
    }

    Ok(())
}

/// Tests the sitemap served at the root path.
///
/// Expected: 200 OK with an HTML page linking list routes and the docs
#[tokio::test]
async fn serves_sitemap_at_root() -> Result<(), TestError> {
    let test = TestBuilder::new().with_multiverse_tables().build().await?;
    let app = test.into_app();

    let request = Request::builder()
        .uri("/")
        .body(Body::empty())
        .expect("Failed to build request");
    let resp = app.oneshot(request).await.expect("Router service is infallible");

    assert_eq!(resp.status(), StatusCode::OK);
    assert!(resp
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.starts_with("text/html")));

    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");
    let html = String::from_utf8_lossy(&bytes);
    assert!(html.contains("<a href=\"/user\">/user</a>"));
    assert!(html.contains("<a href=\"/character\">/character</a>"));
    assert!(html.contains("/user/{user_id}/favorites/{favorites_id}"));
    assert!(html.contains("href=\"/docs\""));

    Ok(())
}

/// Tests that the OpenAPI document is served.
///
/// Expected: 200 OK with the API title
#[tokio::test]
async fn serves_openapi_document() -> Result<(), TestError> {
    let test = TestBuilder::new().with_multiverse_tables().build().await?;
    let app = test.into_app();

    let (status, body) = send(&app, Method::GET, "/docs/openapi.json", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["info"]["title"], json!("Multiverse"));
    assert!(body["paths"].get("/user/{user_id}/favorites").is_some());

    Ok(())
}

/// Tests that Swagger UI is reachable from its bare path.
///
/// Expected: `/docs` redirects to `/docs/`, which serves the UI with 200 OK
#[tokio::test]
async fn serves_swagger_ui_after_redirect() -> Result<(), TestError> {
    let test = TestBuilder::new().with_multiverse_tables().build().await?;
    let app = test.into_app();

    let request = Request::builder()
        .uri("/docs")
        .body(Body::empty())
        .expect("Failed to build request");
    let resp = app
        .clone()
        .oneshot(request)
        .await
        .expect("Router service is infallible");

    assert!(resp.status().is_redirection());
    let location = resp
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .expect("redirect should carry a location")
        .to_string();
    assert_eq!(location, "/docs/");

    let request = Request::builder()
        .uri(location.as_str())
        .body(Body::empty())
        .expect("Failed to build request");
    let resp = app.oneshot(request).await.expect("Router service is infallible");

    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Tests a path that matches no route.
///
/// Expected: 404 NOT_FOUND in the error envelope
#[tokio::test]
async fn not_found_envelope_for_unknown_route() -> Result<(), TestError> {
    let test = TestBuilder::new().with_multiverse_tables().build().await?;
    let app = test.into_app();

    let (status, body) = send(&app, Method::GET, "/starship/", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        body,
        json!({ "message": "No route for /starship", "error": true })
    );

    Ok(())
}

/// Tests a known path requested with an unsupported method.
///
/// Expected: 405 METHOD_NOT_ALLOWED in the error envelope
#[tokio::test]
async fn method_not_allowed_envelope() -> Result<(), TestError> {
    let test = TestBuilder::new().with_multiverse_tables().build().await?;
    let app = test.into_app();

    let (status, body) = send(&app, Method::PUT, "/user", None).await;

    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(
        body,
        json!({ "message": "Method PUT not allowed for /user", "error": true })
    );

    Ok(())
}
