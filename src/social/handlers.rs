//! HTTP handlers for follow-graph listings
//!
//! Both endpoints answer for the authenticated requester only; there is no
//! way to list another user's graph.

use axum::extract::State;
use axum::Json;
use sqlx::SqlitePool;

use crate::error::ApiError;
use crate::middleware::AuthUser;

use super::db::{self, FollowName};

/// Handle GET /user/following/
///
/// Returns the display names of everyone the requester follows, as
/// `[{"name": ...}, ...]`.
pub async fn get_following(
    State(pool): State<SqlitePool>,
    AuthUser(user): AuthUser,
) -> Result<Json<Vec<FollowName>>, ApiError> {
    let names = db::get_following_names(&pool, user.user_id).await?;
    Ok(Json(names))
}

/// Handle GET /user/followers/
///
/// Returns the display names of everyone following the requester, as
/// `[{"name": ...}, ...]`.
pub async fn get_followers(
    State(pool): State<SqlitePool>,
    AuthUser(user): AuthUser,
) -> Result<Json<Vec<FollowName>>, ApiError> {
    let names = db::get_follower_names(&pool, user.user_id).await?;
    Ok(Json(names))
}
