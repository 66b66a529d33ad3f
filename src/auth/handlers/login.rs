/**
 * User Login Handler
 *
 * Checks credentials against the stored bcrypt hash and issues a session
 * token.
 *
 * # Authentication Process
 *
 * 1. Look up the user by username
 * 2. Verify the password against the stored hash
 * 3. Sign a JWT carrying the username and return it as `{"jwtToken": ...}`
 *
 * # Failure Answers
 *
 * Unknown usernames answer `Invalid user` and wrong passwords answer
 * `Invalid password`, both with status 400. The two cases are told apart on
 * the wire, matching the client contract.
 */

use axum::extract::State;
use axum::Json;

use crate::auth::{passwords, sessions, users};
use crate::error::ApiError;
use crate::server::state::AppState;

use super::types::{LoginRequest, LoginResponse};

/// Handle POST /login/
///
/// # Returns
///
/// * `200` with `{"jwtToken": "..."}` on success
/// * `400` with `Invalid user` for an unknown username
/// * `400` with `Invalid password` for a wrong password
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let user = users::find_by_username(&state.db, &request.username)
        .await?
        .ok_or_else(|| {
            tracing::warn!("Login rejected, unknown user: {}", request.username);
            ApiError::authentication("Invalid user")
        })?;

    if !passwords::verify_password(&request.password, &user.password_hash) {
        tracing::warn!("Login rejected, wrong password: {}", request.username);
        return Err(ApiError::authentication("Invalid password"));
    }

    let jwt_token =
        sessions::create_token(&state.jwt, &user.username).map_err(ApiError::SigningError)?;

    tracing::info!("User logged in: {}", user.username);
    Ok(Json(LoginResponse { jwt_token }))
}
