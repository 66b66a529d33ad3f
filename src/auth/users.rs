/**
 * User Model and Database Operations
 *
 * The `user` table row and the queries the credential store needs: lookup
 * by username, existence probe for registration, and insertion of a new
 * account.
 */

use sqlx::{SqliteConnection, SqlitePool};

/// A row from the `user` table
///
/// The stored password is a bcrypt hash; the plaintext is never persisted.
/// This type stays server-side and is never serialized into a response.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    /// Primary key
    pub user_id: i64,
    /// Display name shown in follower listings
    pub name: String,
    /// Unique login name
    pub username: String,
    /// bcrypt hash of the password
    #[sqlx(rename = "password")]
    pub password_hash: String,
    /// Free-form gender string captured at registration
    pub gender: String,
}

/// Look up a user by username
///
/// # Returns
///
/// * `Ok(Some(User))` - User found
/// * `Ok(None)` - No user with that username
/// * `Err(sqlx::Error)` - Database error
pub async fn find_by_username(
    pool: &SqlitePool,
    username: &str,
) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>("SELECT * FROM user WHERE username = ?")
        .bind(username)
        .fetch_optional(pool)
        .await
}

/// Check whether a username is already registered
pub async fn username_taken(
    conn: &mut SqliteConnection,
    username: &str,
) -> Result<bool, sqlx::Error> {
    sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM user WHERE username = ?)")
        .bind(username)
        .fetch_one(&mut *conn)
        .await
}

/// Insert a new user and return its id
///
/// # Arguments
///
/// * `password_hash` - bcrypt hash, already computed by the caller
pub async fn create_user(
    conn: &mut SqliteConnection,
    name: &str,
    username: &str,
    password_hash: &str,
    gender: &str,
) -> Result<i64, sqlx::Error> {
    let result = sqlx::query(
        "INSERT INTO user (name, username, password, gender) VALUES (?, ?, ?, ?)",
    )
    .bind(name)
    .bind(username)
    .bind(password_hash)
    .bind(gender)
    .execute(&mut *conn)
    .await?;

    Ok(result.last_insert_rowid())
}
