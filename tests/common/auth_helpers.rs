//! Authentication test helpers
//!
//! Seeds users straight into the store and mints tokens with the same
//! secret the test server state is built with.

use axum::http::{HeaderName, HeaderValue};
use axum_test::TestRequest;
use sqlx::SqlitePool;

use chirp::auth::passwords;
use chirp::auth::sessions::{self, JwtKeys};

/// Signing secret shared by test servers and test tokens
pub const TEST_JWT_SECRET: &str = "integration-test-secret";

/// Keys matching [`TEST_JWT_SECRET`]
pub fn test_keys() -> JwtKeys {
    JwtKeys::new(TEST_JWT_SECRET.as_bytes())
}

/// A seeded user with a ready-to-use bearer token
pub struct TestUser {
    pub user_id: i64,
    pub username: String,
    pub password: String,
    pub token: String,
}

/// Insert a user directly and mint a token for them
///
/// The password goes through the real bcrypt path so login tests exercise
/// verification against a genuine hash.
pub async fn create_test_user(
    pool: &SqlitePool,
    name: &str,
    username: &str,
    password: &str,
) -> TestUser {
    let password_hash = passwords::hash_password(password).expect("Failed to hash password");

    let result =
        sqlx::query("INSERT INTO user (name, username, password, gender) VALUES (?, ?, ?, ?)")
            .bind(name)
            .bind(username)
            .bind(&password_hash)
            .bind("other")
            .execute(pool)
            .await
            .expect("Failed to insert user");

    let token = sessions::create_token(&test_keys(), username).expect("Failed to create token");

    TestUser {
        user_id: result.last_insert_rowid(),
        username: username.to_string(),
        password: password.to_string(),
        token,
    }
}

/// Attach `Authorization: Bearer <token>` to a request
pub fn with_bearer(request: TestRequest, token: &str) -> TestRequest {
    request.add_header(
        HeaderName::from_static("authorization"),
        HeaderValue::from_str(&format!("Bearer {token}")).expect("Invalid header value"),
    )
}
