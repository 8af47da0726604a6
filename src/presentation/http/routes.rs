//! Route Configuration
//!
//! Configures all HTTP routes for the API.

use axum::{
    middleware,
    routing::{delete, get, post},
    Router,
};

use super::handlers;
use crate::presentation::middleware::admin_auth_middleware;
use crate::startup::AppState;

/// Create the main API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api/v1", api_routes(state.clone()))
        // Health check endpoints
        .route("/health", get(handlers::health::health_check))
        .route("/health/live", get(handlers::health::liveness))
        .route("/health/ready", get(handlers::health::readiness))
        .with_state(state)
}

/// API v1 routes
fn api_routes(state: AppState) -> Router<AppState> {
    Router::new().nest("/courses", course_routes(state))
}

/// Course routes. Deletion is gated by the admin token; everything else is
/// open.
fn course_routes(state: AppState) -> Router<AppState> {
    let admin_routes = Router::new()
        .route("/{course_id}", delete(handlers::course::delete_course))
        .route_layer(middleware::from_fn_with_state(
            state,
            admin_auth_middleware,
        ));

    Router::new()
        .route(
            "/",
            post(handlers::course::create_course).get(handlers::course::list_courses),
        )
        .route(
            "/{course_id}",
            get(handlers::course::get_course).patch(handlers::course::update_course),
        )
        .merge(admin_routes)
}
