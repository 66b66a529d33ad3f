/**
 * Authentication Middleware
 *
 * Guards every protected route. Each request must carry
 * `Authorization: Bearer <token>`; the middleware verifies the token
 * signature, resolves the username it names to a live user row, and stores
 * the result in the request extensions for handlers to extract.
 *
 * # Failure Behavior
 *
 * Every token failure answers 401 `Invalid JWT Token`: a missing or
 * malformed header, a bad signature, and a token naming a user that has
 * been removed from the store.
 *
 * Resolving the user on every request means a token dies the moment its
 * user row disappears, even though the token itself never expires.
 */

use axum::extract::{FromRequestParts, Request, State};
use axum::http::header;
use axum::http::request::Parts;
use axum::middleware::Next;
use axum::response::Response;

use crate::auth::{sessions, users};
use crate::error::ApiError;
use crate::server::state::AppState;

/// Identity of the requester, resolved from the bearer token
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    /// Primary key of the user row the token resolved to
    pub user_id: i64,
    /// Username carried by the token
    pub username: String,
}

/// Verify the bearer token and attach the requester's identity
///
/// Applied with `middleware::from_fn_with_state` to the protected router.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .ok_or(ApiError::TokenError)?;

    let claims = sessions::verify_token(&state.jwt, token).map_err(|err| {
        tracing::warn!("Token verification failed: {}", err);
        ApiError::TokenError
    })?;

    let user = users::find_by_username(&state.db, &claims.username)
        .await?
        .ok_or_else(|| {
            tracing::warn!("Token names a missing user: {}", claims.username);
            ApiError::TokenError
        })?;

    request.extensions_mut().insert(AuthenticatedUser {
        user_id: user.user_id,
        username: user.username,
    });

    Ok(next.run(request).await)
}

/// Extractor giving handlers the authenticated requester
///
/// Only works on routes behind `auth_middleware`, which inserts the
/// identity this extractor reads.
///
/// # Usage
///
/// ```rust,ignore
/// pub async fn get_feed(
///     State(pool): State<SqlitePool>,
///     AuthUser(user): AuthUser,
/// ) -> Result<Json<Vec<FeedItem>>, ApiError> {
///     // user.user_id identifies the requester
/// }
/// ```
pub struct AuthUser(pub AuthenticatedUser);

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .map(AuthUser)
            .ok_or(ApiError::TokenError)
    }
}
