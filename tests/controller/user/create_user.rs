use axum::{extract::State, http::StatusCode, response::IntoResponse};
use multiverse::{
    model::user::CreateUserDto,
    server::controller::{user::create_user, util::extract::ApiJson},
};
use serde_json::json;

use super::*;

fn payload(email: Option<&str>, password: Option<&str>) -> ApiJson<CreateUserDto> {
    ApiJson(CreateUserDto {
        email: email.map(str::to_string),
        password: password.map(str::to_string),
    })
}

/// Tests successful user creation.
///
/// Expected: Ok with 200 OK, the created user and no password in the body
#[tokio::test]
async fn creates_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_multiverse_tables().build().await?;

    let result = create_user(
        State(test.into_app_state()),
        payload(Some("a@x.com"), Some("p")),
    )
    .await;

    assert!(result.is_ok());
    let (status, body) = into_json(result.unwrap().into_response()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "msg": "user created", "result": { "id": 1, "email": "a@x.com" } })
    );

    Ok(())
}

/// Tests validation of a missing email.
///
/// Expected: Err with 400 BAD_REQUEST naming the missing field
#[tokio::test]
async fn bad_request_for_missing_email() -> Result<(), TestError> {
    let test = TestBuilder::new().with_multiverse_tables().build().await?;

    let result = create_user(State(test.into_app_state()), payload(None, Some("p"))).await;

    let Err(err) = result else {
        panic!("expected validation error");
    };
    let (status, body) = into_json(err.into_response()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({ "message": "Missing required field: email", "error": true })
    );

    Ok(())
}

/// Tests validation of a blank password.
///
/// Expected: Err with 400 BAD_REQUEST
#[tokio::test]
async fn bad_request_for_blank_password() -> Result<(), TestError> {
    let test = TestBuilder::new().with_multiverse_tables().build().await?;

    let result = create_user(
        State(test.into_app_state()),
        payload(Some("a@x.com"), Some("")),
    )
    .await;

    let Err(err) = result else {
        panic!("expected validation error");
    };
    assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Tests conflict on a duplicate email.
///
/// Expected: Err with 409 CONFLICT
#[tokio::test]
async fn conflict_for_duplicate_email() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_multiverse_tables()
        .with_user("a@x.com")
        .build()
        .await?;

    let result = create_user(
        State(test.into_app_state()),
        payload(Some("a@x.com"), Some("p")),
    )
    .await;

    let Err(err) = result else {
        panic!("expected conflict error");
    };
    let (status, body) = into_json(err.into_response()).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], json!(true));

    Ok(())
}
