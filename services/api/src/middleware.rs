//! Authentication middleware for bearer token validation
//!
//! This is the only place identity is checked. Handlers behind it read the
//! resolved [`AuthUser`] from the request extensions and trust it.

use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::Response,
};
use axum_extra::headers::{Authorization, HeaderMapExt, authorization::Bearer};
use tracing::warn;

use crate::{error::ApiError, jwt::INVALID_TOKEN, state::AppState};

/// Error message when no bearer token accompanies a protected request
pub const NO_TOKEN: &str = "No token provided";

/// Authenticated user information
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub id: String,
}

/// Authentication middleware
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, ApiError> {
    // Extract the bearer token from the Authorization header
    let Some(Authorization(bearer)) = req.headers().typed_get::<Authorization<Bearer>>() else {
        warn!("Rejected {} {}: no bearer token", req.method(), req.uri().path());
        return Err(ApiError::Unauthorized(NO_TOKEN.to_string()));
    };

    // Validate the token
    let user_id = state.jwt_service.resolve_token(bearer.token()).map_err(|e| {
        warn!("Rejected {} {}: {}", req.method(), req.uri().path(), e);
        ApiError::Unauthorized(INVALID_TOKEN.to_string())
    })?;

    // Insert the user into the request extensions
    req.extensions_mut().insert(AuthUser { id: user_id });

    Ok(next.run(req).await)
}
