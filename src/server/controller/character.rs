//! Character endpoints.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        character::{CharacterDto, CharacterListDto},
    },
    server::{
        controller::util::extract::ApiPath, error::Error, model::app::AppState,
        service::character::CharacterService,
    },
};

/// OpenAPI tag for character routes.
pub static CHARACTER_TAG: &str = "character";

/// List all characters
#[utoipa::path(
    get,
    path = "/character",
    tag = CHARACTER_TAG,
    responses(
        (status = 200, description = "All characters", body = CharacterListDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_characters(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let character_service = CharacterService::new(&state.db);

    let characters = character_service.get_characters().await?;

    Ok((StatusCode::OK, Json(CharacterListDto { msg: characters })))
}

/// Get a single character
#[utoipa::path(
    get,
    path = "/character/{character_id}",
    tag = CHARACTER_TAG,
    params(("character_id" = i32, Path, description = "ID of the character")),
    responses(
        (status = 200, description = "The character", body = CharacterDto),
        (status = 404, description = "Character not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_character(
    State(state): State<AppState>,
    ApiPath(character_id): ApiPath<i32>,
) -> Result<impl IntoResponse, Error> {
    let character_service = CharacterService::new(&state.db);

    let character = character_service.get_character(character_id).await?;

    Ok((StatusCode::OK, Json(character)))
}
