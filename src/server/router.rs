//! HTTP routing and OpenAPI documentation configuration.
//!
//! This module defines the application's HTTP routes and generates OpenAPI documentation
//! using utoipa. All API endpoints are registered here with their OpenAPI specifications,
//! Swagger UI is served at `/docs` and an HTML sitemap of the routes at `/`.

use axum::{response::Html, routing::get, Router};
use tower::Layer;
use tower_http::{cors::CorsLayer, normalize_path::NormalizePathLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's API router with all endpoints and their documentation.
///
/// # Registered Endpoints
/// - `GET /user` - List users
/// - `POST /user` - Create a user
/// - `GET /user/{user_id}` - Get a user
/// - `POST /user/{user_id}` - Add a favorite to a user
/// - `GET /user/{user_id}/favorites` - List a user's favorites
/// - `DELETE /user/{user_id}/favorites/{favorites_id}` - Delete a user's favorite
/// - `GET /character`, `GET /character/{character_id}` - Characters
/// - `GET /planet`, `GET /planet/{planet_id}` - Planets
///
/// Unknown paths and wrong methods respond with the error envelope.
///
/// # Returns
/// - An Axum `Router<AppState>` with all API routes and the sitemap, ready for state
/// - The assembled OpenAPI document, served by [`app`] at `/docs/openapi.json`
pub fn routes() -> (Router<AppState>, utoipa::openapi::OpenApi) {
    #[derive(OpenApi)]
    #[openapi(info(title = "Multiverse", description = "Multiverse API"), tags(
        (name = controller::user::USER_TAG, description = "User API routes"),
        (name = controller::favorite::FAVORITE_TAG, description = "Favorites API routes"),
        (name = controller::character::CHARACTER_TAG, description = "Character API routes"),
        (name = controller::planet::PLANET_TAG, description = "Planet API routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(
            controller::user::get_users,
            controller::user::create_user
        ))
        .routes(routes!(
            controller::user::get_user,
            controller::favorite::add_favorite
        ))
        .routes(routes!(controller::favorite::get_user_favorites))
        .routes(routes!(controller::favorite::delete_favorite))
        .routes(routes!(controller::character::get_characters))
        .routes(routes!(controller::character::get_character))
        .routes(routes!(controller::planet::get_planets))
        .routes(routes!(controller::planet::get_planet))
        .split_for_parts();

    let sitemap = controller::sitemap::render(&api);

    let routes = routes
        .route("/", get(move || async move { Html(sitemap) }))
        .fallback(controller::fallback::route_not_found)
        .method_not_allowed_fallback(controller::fallback::method_not_allowed);

    (routes, api)
}

/// Builds the complete application service served to clients.
///
/// Swagger UI is mounted ahead of the API and keeps its own trailing slash redirect. Every
/// other request has its trailing slash stripped before reaching [`routes`], so `/user/` and
/// `/user` reach the same handler. Permissive CORS and request tracing wrap both.
pub fn app(state: AppState) -> Router {
    let (routes, api) = routes();

    let api_service = NormalizePathLayer::trim_trailing_slash().layer(routes.with_state(state));

    Router::new()
        .merge(SwaggerUi::new("/docs").url("/docs/openapi.json", api))
        .fallback_service(api_service)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
