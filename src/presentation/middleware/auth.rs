//! Admin Authorization Middleware
//!
//! Token gate for destructive routes. The expected token comes from
//! `AuthSettings`, loaded once at startup; the middleware never touches the
//! process environment.

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};

use crate::shared::error::AppError;
use crate::startup::AppState;

/// Middleware that compares the Authorization header against the configured
/// admin token. Rejects the request before any handler or service runs.
pub async fn admin_auth_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| AppError::Unauthorized("Missing authorization header".into()))?;

    if token != state.settings.auth.token {
        return Err(AppError::Forbidden("Invalid token".into()));
    }

    Ok(next.run(request).await)
}
