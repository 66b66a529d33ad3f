//! Database operations for the follow graph
//!
//! The `follower` table stores directed edges: `follower_user_id` follows
//! `following_user_id`. Both listing queries join to `user` for display
//! names and return rows in store order, duplicates included if duplicate
//! edges exist.

use serde::Serialize;
use sqlx::SqlitePool;

/// A display name row, serialized as `{"name": ...}`
#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct FollowName {
    pub name: String,
}

/// Get the display names of everyone the given user follows
pub async fn get_following_names(
    pool: &SqlitePool,
    user_id: i64,
) -> Result<Vec<FollowName>, sqlx::Error> {
    sqlx::query_as::<_, FollowName>(
        r#"
        SELECT name
        FROM follower
        INNER JOIN user ON follower.following_user_id = user.user_id
        WHERE follower.follower_user_id = ?
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}

/// Get the display names of everyone following the given user
pub async fn get_follower_names(
    pool: &SqlitePool,
    user_id: i64,
) -> Result<Vec<FollowName>, sqlx::Error> {
    sqlx::query_as::<_, FollowName>(
        r#"
        SELECT name
        FROM follower
        INNER JOIN user ON follower.follower_user_id = user.user_id
        WHERE follower.following_user_id = ?
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}
