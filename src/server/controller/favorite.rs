//! Endpoints for a user's favorites.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        favorite::{CreateFavoriteDto, FavoriteCreatedDto, FavoriteListDto},
    },
    server::{
        controller::util::{
            extract::{ApiJson, ApiPath},
            validate::required_field,
        },
        error::{api::ApiError, Error},
        model::app::AppState,
        service::favorite::{FavoriteService, NewFavorite},
    },
};

/// OpenAPI tag for favorites routes.
pub static FAVORITE_TAG: &str = "favorites";

/// List the favorites of a user
#[utoipa::path(
    get,
    path = "/user/{user_id}/favorites",
    tag = FAVORITE_TAG,
    params(("user_id" = i32, Path, description = "ID of the user")),
    responses(
        (status = 200, description = "Favorites of the user", body = FavoriteListDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_favorites(
    State(state): State<AppState>,
    ApiPath(user_id): ApiPath<i32>,
) -> Result<impl IntoResponse, Error> {
    let favorite_service = FavoriteService::new(&state.db);

    let favorites = favorite_service.get_user_favorites(user_id).await?;

    Ok((
        StatusCode::OK,
        Json(FavoriteListDto {
            msg: "These are your favorite items:".to_string(),
            results: favorites,
        }),
    ))
}

/// Add a favorite to a user
///
/// `name` is required. `user_id` in the body is optional but must match the path when
/// given. `character_id` and `planet_id` must reference existing records when given.
#[utoipa::path(
    post,
    path = "/user/{user_id}",
    tag = FAVORITE_TAG,
    params(("user_id" = i32, Path, description = "ID of the user")),
    request_body = CreateFavoriteDto,
    responses(
        (status = 200, description = "Favorite added", body = FavoriteCreatedDto),
        (status = 400, description = "Missing field, mismatched user or malformed body", body = ErrorDto),
        (status = 404, description = "User, character or planet not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_favorite(
    State(state): State<AppState>,
    ApiPath(user_id): ApiPath<i32>,
    ApiJson(payload): ApiJson<CreateFavoriteDto>,
) -> Result<impl IntoResponse, Error> {
    let name = required_field(payload.name, "name")?;

    if let Some(body_user_id) = payload.user_id {
        if body_user_id != user_id {
            return Err(ApiError::new(format!(
                "Body user_id {} does not match user {} in path",
                body_user_id, user_id
            ))
            .into());
        }
    }

    let favorite_service = FavoriteService::new(&state.db);
    let favorite = favorite_service
        .add_favorite(
            user_id,
            NewFavorite {
                name,
                character_id: payload.character_id,
                planet_id: payload.planet_id,
            },
        )
        .await?;

    Ok((
        StatusCode::OK,
        Json(FavoriteCreatedDto {
            msg: "favorite added".to_string(),
            result: favorite,
        }),
    ))
}

/// Delete a favorite of a user
///
/// Only deletes the favorite if it belongs to the user in the path.
#[utoipa::path(
    delete,
    path = "/user/{user_id}/favorites/{favorites_id}",
    tag = FAVORITE_TAG,
    params(
        ("user_id" = i32, Path, description = "ID of the user"),
        ("favorites_id" = i32, Path, description = "ID of the favorite")
    ),
    responses(
        (status = 200, description = "Favorite deleted", body = MessageDto),
        (status = 404, description = "Favorite not found for this user", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_favorite(
    State(state): State<AppState>,
    ApiPath((user_id, favorites_id)): ApiPath<(i32, i32)>,
) -> Result<impl IntoResponse, Error> {
    let favorite_service = FavoriteService::new(&state.db);

    favorite_service
        .delete_favorite(user_id, favorites_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            msg: "Your favorite item has been deleted!".to_string(),
        }),
    ))
}
