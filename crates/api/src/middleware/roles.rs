//! Role gate for write routes.
//!
//! The caller's role arrives in the `X-User-Role` header, set by the gateway
//! in front of this service.

use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::app::AppState;
use crate::error::ApiError;

/// Header carrying the caller's role.
pub const USER_ROLE_HEADER: &str = "X-User-Role";

/// Rejects requests whose role is not in `security.ingest_roles`.
///
/// An empty role list disables the check.
pub async fn require_ingest_role(
    State(state): State<AppState>,
    req: Request<Body>,
    next: Next,
) -> Response {
    let allowed = &state.config.security.ingest_roles;
    if allowed.is_empty() {
        return next.run(req).await;
    }

    let role = req
        .headers()
        .get(USER_ROLE_HEADER)
        .and_then(|v| v.to_str().ok());

    if !role_allowed(role, allowed) {
        tracing::warn!(
            role = role.unwrap_or("<none>"),
            path = %req.uri().path(),
            "Rejected request with insufficient role"
        );
        return ApiError::Forbidden("Insufficient Role".to_string()).into_response();
    }

    next.run(req).await
}

/// Exact, case-sensitive match against the allowed roles.
fn role_allowed(role: Option<&str>, allowed: &[String]) -> bool {
    role.is_some_and(|role| allowed.iter().any(|a| a == role))
}
