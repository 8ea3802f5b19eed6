//! HTTP API routes for the user API.

mod system;
pub mod types;
mod users;

use axum::Router;
use axum::http::{HeaderValue, Method};
use axum::middleware;
use axum::routing::get;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::error::{ErrorResponse, FieldError, handle_panic};
use crate::request_id::request_id_middleware;
use crate::state::AppState;
use crate::users::User;

// ---------------------------------------------------------------------------
// OpenAPI
// ---------------------------------------------------------------------------

#[derive(OpenApi)]
#[openapi(
    info(
        title = "User API",
        description = "Small user service with centralized error handling.\n\nEvery error response carries the same JSON shape: a symbolic `code`, a human-readable `message`, and (for validation failures only) an `errors` array of field/reason pairs.",
        version = "0.1.0",
        license(name = "Apache-2.0"),
    ),
    paths(
        users::create_user,
        users::get_user,
        users::list_users,
        system::health,
    ),
    components(
        schemas(
            types::CreateUserRequest, types::ListUsersResponse, types::HealthResponse,
            User, ErrorResponse, FieldError,
        )
    ),
    tags(
        (name = "Users", description = "User management (create, fetch, list)"),
        (name = "System", description = "System and health endpoints"),
    )
)]
pub struct ApiDoc;

// ---------------------------------------------------------------------------
// Router
// ---------------------------------------------------------------------------

/// Builds the main application router.
pub fn router(state: AppState) -> Router {
    let api = Router::new()
        // User management
        .route("/users", get(users::list_users).post(users::create_user))
        .route("/users/{id}", get(users::get_user))
        // System
        .route("/health", get(system::health))
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(request_id_middleware))
        .layer(cors_layer(&state))
        .with_state(state);

    api.merge(SwaggerUi::new("/api/docs").url("/api/openapi.json", ApiDoc::openapi()))
}

fn cors_layer(state: &AppState) -> CorsLayer {
    let origins = state.cors_origins();

    // No origins configured → no CORS headers (deny cross-origin by default).
    // Use --cors-origins "*" for permissive or specify exact origins.
    if origins.is_empty() {
        return CorsLayer::new();
    }

    let x_request_id = axum::http::header::HeaderName::from_static("x-request-id");
    let base = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([axum::http::header::CONTENT_TYPE, x_request_id.clone()])
        .expose_headers([x_request_id]);

    if origins.len() == 1 && origins[0] == "*" {
        tracing::warn!("CORS configured with wildcard origin; all cross-origin requests allowed");
        base.allow_origin(tower_http::cors::Any)
    } else {
        let parsed: Vec<HeaderValue> = origins
            .iter()
            .map(|o| o.parse().expect("invalid CORS origin"))
            .collect();
        base.allow_origin(parsed)
    }
}
