/**
 * Session Tokens
 *
 * JWT creation and verification for bearer-token authentication. A token
 * carries only the username it was issued to; it does not expire. Logout is
 * client-side (discard the token), and a token stops working only when the
 * user it names is removed from the store.
 *
 * # Token Flow
 *
 * 1. Login succeeds and `create_token` signs `{ "username": ... }`
 * 2. The client sends `Authorization: Bearer <token>` on protected routes
 * 3. The middleware calls `verify_token` and resolves the username to a
 *    user row on every request
 */

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// Claims carried by a session token
///
/// Deliberately minimal: the username and nothing else. There is no `exp`
/// claim; tokens are valid until the user disappears.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Username the token was issued to
    pub username: String,
}

/// Signing and verification keys derived from the configured secret
///
/// Built once at startup and shared through application state. Both keys
/// come from the same HMAC secret.
#[derive(Clone)]
pub struct JwtKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl JwtKeys {
    /// Derive the key pair from a shared secret
    pub fn new(secret: &[u8]) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
        }
    }
}

/// Create a signed session token for the given username
///
/// # Arguments
///
/// * `keys` - Key material from application state
/// * `username` - Username to embed in the claims
///
/// # Returns
///
/// * `Ok(String)` - Signed compact JWT
/// * `Err(jsonwebtoken::errors::Error)` - Signing failure
pub fn create_token(keys: &JwtKeys, username: &str) -> Result<String, jsonwebtoken::errors::Error> {
    let claims = Claims {
        username: username.to_string(),
    };
    encode(&Header::default(), &claims, &keys.encoding)
}

/// Verify a session token and extract its claims
///
/// Validates the signature only. Expiry validation is disabled because the
/// tokens carry no `exp` claim.
///
/// # Returns
///
/// * `Ok(Claims)` - Claims from a token with a valid signature
/// * `Err(jsonwebtoken::errors::Error)` - Malformed token or bad signature
pub fn verify_token(keys: &JwtKeys, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
    let mut validation = Validation::default();
    validation.validate_exp = false;
    validation.required_spec_claims.clear();

    decode::<Claims>(token, &keys.decoding, &validation).map(|data| data.claims)
}
