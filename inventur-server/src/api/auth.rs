//! Authentication middleware for admin routes
//!
//! HTTP Basic credentials are checked against the configured admin account.
//! Every failure produces the same 401 with a Basic challenge, so a client
//! cannot tell a wrong username from a wrong password.

use axum::{
    extract::{Request, State},
    http::{header, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use inventur_common::api::auth::parse_basic_authorization;
use serde_json::json;
use tracing::warn;

use crate::AppState;

/// Challenge sent with every 401
pub const BASIC_CHALLENGE: &str = "Basic realm=\"inventur-admin\"";

/// Authenticated admin, available to handlers as a request extension
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminIdentity(pub String);

/// Authentication middleware
///
/// Applied to the admin routes only. `/`, `/submit-all`, `/api/buildings`
/// and `/health` do NOT use this middleware.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let header_value = request
        .headers()
        .get(header::AUTHORIZATION)
        .ok_or(AuthError::Unauthorized)?
        .to_str()
        .map_err(|_| AuthError::Unauthorized)?;

    let supplied = parse_basic_authorization(header_value).map_err(|e| {
        warn!("Rejected admin request to {}: {}", request.uri().path(), e);
        AuthError::Unauthorized
    })?;

    if !state.credentials.verify(&supplied) {
        warn!("Rejected admin credentials for {}", request.uri().path());
        return Err(AuthError::Unauthorized);
    }

    request
        .extensions_mut()
        .insert(AdminIdentity(supplied.username));

    Ok(next.run(request).await)
}

/// Authentication error types for HTTP responses
#[derive(Debug)]
pub enum AuthError {
    Unauthorized,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            AuthError::Unauthorized => {
                let body = Json(json!({
                    "error": {
                        "code": "UNAUTHORIZED",
                        "message": "Falsche Zugangsdaten",
                    }
                }));

                (
                    StatusCode::UNAUTHORIZED,
                    [(header::WWW_AUTHENTICATE, BASIC_CHALLENGE)],
                    body,
                )
                    .into_response()
            }
        }
    }
}
