/**
 * Authentication Request/Response Types
 *
 * Wire types for the registration and login endpoints. Field names follow
 * the JSON the client sends; the login response uses the `jwtToken` key the
 * client contract specifies.
 */

use serde::{Deserialize, Serialize};

/// Request body for POST /register/
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    /// Desired unique login name
    pub username: String,
    /// Plaintext password, hashed before storage
    pub password: String,
    /// Display name shown in follower listings
    pub name: String,
    /// Free-form gender string
    pub gender: String,
}

/// Request body for POST /login/
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    /// Login name
    pub username: String,
    /// Plaintext password to check against the stored hash
    pub password: String,
}

/// Response body for a successful login
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    /// Signed session token for the Authorization header
    #[serde(rename = "jwtToken")]
    pub jwt_token: String,
}
