/**
 * API Error Types
 *
 * This module defines the error type used by HTTP handlers and the
 * authentication middleware. Every failure a request can produce is a
 * variant here, and each variant knows its HTTP status code and the
 * plain-text body the client receives.
 *
 * # Error Categories
 *
 * ## Validation Errors
 *
 * Malformed or unacceptable input on the public endpoints: a username that
 * is already registered, a password below the minimum length.
 *
 * ## Authentication Errors
 *
 * Credential failures at login: unknown username or wrong password. Both
 * answer 400 with the literal body the client contract specifies.
 *
 * ## Token and Authorization Errors
 *
 * `TokenError` covers every bearer-token failure (missing header, bad
 * signature, token naming a user that no longer exists) and always renders
 * as 401 `Invalid JWT Token`. `AuthorizationError` is the 401
 * `Invalid Request` answer for tweet-scoped reads and deletes; it covers
 * both "tweet does not exist" and "requester may not see it", and the two
 * cases are intentionally indistinguishable on the wire.
 *
 * ## Internal Errors
 *
 * Store, hashing, and token-signing faults. These render as a generic 500
 * body; the underlying cause is logged, never sent to the client.
 */

use axum::http::StatusCode;
use thiserror::Error;

/// All errors an HTTP request can produce
///
/// Each variant maps to a fixed status code and response body. Handlers
/// return `Result<_, ApiError>` and rely on the `IntoResponse`
/// implementation in `conversion.rs` to render the failure.
///
/// # Usage
///
/// ```rust
/// use chirp::error::ApiError;
///
/// // Input validation failure on a public endpoint
/// let err = ApiError::validation("User already exists");
///
/// // Credential failure at login
/// let err = ApiError::authentication("Invalid password");
/// ```
#[derive(Debug, Error)]
pub enum ApiError {
    /// Unacceptable input on a public endpoint (registration)
    #[error("Validation error: {message}")]
    ValidationError {
        /// Literal body sent to the client
        message: String,
    },

    /// Credential failure at login (unknown user, wrong password)
    #[error("Authentication error: {message}")]
    AuthenticationError {
        /// Literal body sent to the client
        message: String,
    },

    /// Bearer token missing, malformed, forged, or naming a deleted user
    #[error("Invalid JWT Token")]
    TokenError,

    /// Tweet-scoped access denied; also covers tweets that do not exist
    #[error("Invalid Request")]
    AuthorizationError,

    /// Database fault
    #[error("Store error: {0}")]
    StoreError(#[from] sqlx::Error),

    /// Password hashing fault
    #[error("Hash error: {0}")]
    HashError(#[from] bcrypt::BcryptError),

    /// Token signing fault
    #[error("Token signing error: {0}")]
    SigningError(jsonwebtoken::errors::Error),
}

impl ApiError {
    /// Create a validation error with the given response body
    ///
    /// # Arguments
    ///
    /// * `message` - Literal body sent to the client with status 400
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError {
            message: message.into(),
        }
    }

    /// Create an authentication error with the given response body
    ///
    /// # Arguments
    ///
    /// * `message` - Literal body sent to the client with status 400
    pub fn authentication(message: impl Into<String>) -> Self {
        Self::AuthenticationError {
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `ValidationError` / `AuthenticationError` - 400 Bad Request
    /// - `TokenError` / `AuthorizationError` - 401 Unauthorized
    /// - `StoreError` / `HashError` / `SigningError` - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::ValidationError { .. } | Self::AuthenticationError { .. } => {
                StatusCode::BAD_REQUEST
            }
            Self::TokenError | Self::AuthorizationError => StatusCode::UNAUTHORIZED,
            Self::StoreError(_) | Self::HashError(_) | Self::SigningError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the response body for this error
    ///
    /// Internal faults all render the same generic body; their detail goes
    /// to the log, not to the client.
    pub fn message(&self) -> String {
        match self {
            Self::ValidationError { message } | Self::AuthenticationError { message } => {
                message.clone()
            }
            Self::TokenError => "Invalid JWT Token".to_string(),
            Self::AuthorizationError => "Invalid Request".to_string(),
            Self::StoreError(_) | Self::HashError(_) | Self::SigningError(_) => {
                "Internal Server Error".to_string()
            }
        }
    }
}
