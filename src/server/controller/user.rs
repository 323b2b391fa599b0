//! User endpoints.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        user::{CreateUserDto, UserCreatedDto, UserDto, UserListDto},
    },
    server::{
        controller::util::{
            extract::{ApiJson, ApiPath},
            validate::required_field,
        },
        error::Error,
        model::app::AppState,
        service::user::UserService,
    },
};

/// OpenAPI tag for user routes.
pub static USER_TAG: &str = "user";

/// List all users
#[utoipa::path(
    get,
    path = "/user",
    tag = USER_TAG,
    responses(
        (status = 200, description = "All users", body = UserListDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_users(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let user_service = UserService::new(&state.db);

    let users = user_service.get_users().await?;

    Ok((
        StatusCode::OK,
        Json(UserListDto {
            success: true,
            results: users,
        }),
    ))
}

/// Get a single user
#[utoipa::path(
    get,
    path = "/user/{user_id}",
    tag = USER_TAG,
    params(("user_id" = i32, Path, description = "ID of the user")),
    responses(
        (status = 200, description = "The user", body = UserDto),
        (status = 400, description = "Invalid user ID", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    ApiPath(user_id): ApiPath<i32>,
) -> Result<impl IntoResponse, Error> {
    let user_service = UserService::new(&state.db);

    let user = user_service.get_user(user_id).await?;

    Ok((StatusCode::OK, Json(user)))
}

/// Create a user
///
/// Both `email` and `password` are required. The password is stored hashed and is never
/// returned.
#[utoipa::path(
    post,
    path = "/user",
    tag = USER_TAG,
    request_body = CreateUserDto,
    responses(
        (status = 200, description = "User created", body = UserCreatedDto),
        (status = 400, description = "Missing field or malformed body", body = ErrorDto),
        (status = 409, description = "Email already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_user(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateUserDto>,
) -> Result<impl IntoResponse, Error> {
    let email = required_field(payload.email, "email")?;
    let password = required_field(payload.password, "password")?;

    let user_service = UserService::new(&state.db);
    let user = user_service.create_user(email, password).await?;

    Ok((
        StatusCode::OK,
        Json(UserCreatedDto {
            msg: "user created".to_string(),
            result: user,
        }),
    ))
}
