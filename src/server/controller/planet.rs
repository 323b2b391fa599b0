//! Planet endpoints.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        planet::{PlanetDto, PlanetListDto},
    },
    server::{
        controller::util::extract::ApiPath, error::Error, model::app::AppState,
        service::planet::PlanetService,
    },
};

/// OpenAPI tag for planet routes.
pub static PLANET_TAG: &str = "planet";

/// List all planets
#[utoipa::path(
    get,
    path = "/planet",
    tag = PLANET_TAG,
    responses(
        (status = 200, description = "All planets", body = PlanetListDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_planets(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let planet_service = PlanetService::new(&state.db);

    let planets = planet_service.get_planets().await?;

    Ok((StatusCode::OK, Json(PlanetListDto { msg: planets })))
}

/// Get a single planet
#[utoipa::path(
    get,
    path = "/planet/{planet_id}",
    tag = PLANET_TAG,
    params(("planet_id" = i32, Path, description = "ID of the planet")),
    responses(
        (status = 200, description = "The planet", body = PlanetDto),
        (status = 404, description = "Planet not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_planet(
    State(state): State<AppState>,
    ApiPath(planet_id): ApiPath<i32>,
) -> Result<impl IntoResponse, Error> {
    let planet_service = PlanetService::new(&state.db);

    let planet = planet_service.get_planet(planet_id).await?;

    Ok((StatusCode::OK, Json(planet)))
}
