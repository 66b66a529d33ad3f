/**
 * User Registration Handler
 *
 * Creates a new account from a username, password, display name, and
 * gender.
 *
 * # Registration Process
 *
 * 1. Open a transaction
 * 2. Reject if the username is already registered
 * 3. Reject if the password is shorter than the minimum length
 * 4. Hash the password with bcrypt
 * 5. Insert the user row and commit
 *
 * # Validation Order
 *
 * The uniqueness probe runs before the password-length check, so a taken
 * username answers `User already exists` even when the password is also too
 * short. Probe and insert share one transaction, which keeps two concurrent
 * registrations of the same username from both passing the probe.
 */

use axum::extract::State;
use axum::Json;
use sqlx::SqlitePool;

use crate::auth::passwords::{self, MIN_PASSWORD_LENGTH};
use crate::auth::users;
use crate::error::ApiError;

use super::types::RegisterRequest;

/// Handle POST /register/
///
/// # Returns
///
/// * `200` with `User created successfully`
/// * `400` with `User already exists` for a taken username
/// * `400` with `Password is too short` for a password under 6 characters
pub async fn register(
    State(pool): State<SqlitePool>,
    Json(request): Json<RegisterRequest>,
) -> Result<&'static str, ApiError> {
    let mut tx = pool.begin().await?;

    if users::username_taken(&mut *tx, &request.username).await? {
        tracing::warn!("Registration rejected, username taken: {}", request.username);
        return Err(ApiError::validation("User already exists"));
    }

    if request.password.chars().count() < MIN_PASSWORD_LENGTH {
        tracing::warn!(
            "Registration rejected, password too short: {}",
            request.username
        );
        return Err(ApiError::validation("Password is too short"));
    }

    let password_hash = passwords::hash_password(&request.password)?;

    let user_id = users::create_user(
        &mut *tx,
        &request.name,
        &request.username,
        &password_hash,
        &request.gender,
    )
    .await?;

    tx.commit().await?;

    tracing::info!("User created: {} (id {})", request.username, user_id);
    Ok("User created successfully")
}
