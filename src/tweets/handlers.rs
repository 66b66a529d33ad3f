//! HTTP handlers for tweet endpoints
//!
//! ## Endpoints
//!
//! - `GET /user/tweets/feed/` - latest tweets from followed users
//! - `GET /user/tweets/` - the requester's own tweets with counts
//! - `GET /tweets/{tweet_id}/` - one tweet with counts, gated
//! - `GET /tweets/{tweet_id}/likes/` - who liked it, gated
//! - `GET /tweets/{tweet_id}/replies/` - replies with author names, gated
//! - `POST /user/tweets/` - create a tweet
//! - `DELETE /tweets/{tweet_id}/` - delete an owned tweet
//!
//! The three gated reads answer 401 `Invalid Request` whenever the
//! requester does not follow the tweet's author, including when the tweet
//! does not exist at all.

use axum::extract::{Path, State};
use axum::Json;
use sqlx::SqlitePool;

use crate::error::ApiError;
use crate::middleware::AuthUser;
use crate::social::gate;

use super::db;
use super::types::{
    CreateTweetRequest, FeedItem, LikesResponse, RepliesResponse, TweetStats,
};

/// Handle GET /user/tweets/feed/
///
/// # Returns
///
/// Up to four of the newest tweets from users the requester follows, as
/// `[{"username", "tweet", "dateTime"}, ...]`. The requester's own tweets
/// only appear if they follow themselves.
pub async fn get_feed(
    State(pool): State<SqlitePool>,
    AuthUser(user): AuthUser,
) -> Result<Json<Vec<FeedItem>>, ApiError> {
    let feed = db::get_latest_feed(&pool, user.user_id).await?;
    Ok(Json(feed))
}

/// Handle GET /user/tweets/
///
/// Returns every tweet the requester has posted, newest first, each with
/// its like and reply counts. Not gated; the requester always sees their
/// own listing.
pub async fn get_own_tweets(
    State(pool): State<SqlitePool>,
    AuthUser(user): AuthUser,
) -> Result<Json<Vec<TweetStats>>, ApiError> {
    let tweets = db::get_tweets_for_user(&pool, user.user_id).await?;
    Ok(Json(tweets))
}

/// Handle GET /tweets/{tweet_id}/
///
/// One tweet with its counts, only for requesters who follow the author.
pub async fn get_tweet(
    State(pool): State<SqlitePool>,
    AuthUser(user): AuthUser,
    Path(tweet_id): Path<i64>,
) -> Result<Json<TweetStats>, ApiError> {
    if !gate::can_view_tweet(&pool, user.user_id, tweet_id).await? {
        tracing::warn!("Tweet {} read rejected for {}", tweet_id, user.username);
        return Err(ApiError::AuthorizationError);
    }

    let stats = db::get_tweet_stats(&pool, tweet_id)
        .await?
        .ok_or(ApiError::AuthorizationError)?;

    Ok(Json(stats))
}

/// Handle GET /tweets/{tweet_id}/likes/
pub async fn get_tweet_likes(
    State(pool): State<SqlitePool>,
    AuthUser(user): AuthUser,
    Path(tweet_id): Path<i64>,
) -> Result<Json<LikesResponse>, ApiError> {
    if !gate::can_view_tweet(&pool, user.user_id, tweet_id).await? {
        tracing::warn!("Tweet {} likes rejected for {}", tweet_id, user.username);
        return Err(ApiError::AuthorizationError);
    }

    let likes = db::get_likers_for_tweet(&pool, tweet_id).await?;
    Ok(Json(LikesResponse { likes }))
}

/// Handle GET /tweets/{tweet_id}/replies/
pub async fn get_tweet_replies(
    State(pool): State<SqlitePool>,
    AuthUser(user): AuthUser,
    Path(tweet_id): Path<i64>,
) -> Result<Json<RepliesResponse>, ApiError> {
    if !gate::can_view_tweet(&pool, user.user_id, tweet_id).await? {
        tracing::warn!("Tweet {} replies rejected for {}", tweet_id, user.username);
        return Err(ApiError::AuthorizationError);
    }

    let replies = db::get_replies_for_tweet(&pool, tweet_id).await?;
    Ok(Json(RepliesResponse { replies }))
}

/// Handle POST /user/tweets/
///
/// Stores the tweet under the requester's id, stamped with the current
/// server time.
pub async fn create_tweet(
    State(pool): State<SqlitePool>,
    AuthUser(user): AuthUser,
    Json(request): Json<CreateTweetRequest>,
) -> Result<&'static str, ApiError> {
    db::create_tweet(&pool, user.user_id, &request.tweet).await?;

    tracing::info!("Tweet created by {}", user.username);
    Ok("Created a Tweet")
}

/// Handle DELETE /tweets/{tweet_id}/
///
/// Owner-only. The owner check and the delete share one transaction, and a
/// tweet that does not exist answers the same 401 as one owned by someone
/// else.
pub async fn delete_tweet(
    State(pool): State<SqlitePool>,
    AuthUser(user): AuthUser,
    Path(tweet_id): Path<i64>,
) -> Result<&'static str, ApiError> {
    let mut tx = pool.begin().await?;

    let owner = db::get_tweet_owner(&mut *tx, tweet_id)
        .await?
        .ok_or(ApiError::AuthorizationError)?;

    if owner != user.user_id {
        tracing::warn!(
            "Delete rejected, tweet {} not owned by {}",
            tweet_id,
            user.username
        );
        return Err(ApiError::AuthorizationError);
    }

    db::delete_tweet(&mut *tx, tweet_id).await?;
    tx.commit().await?;

    tracing::info!("Tweet {} deleted by {}", tweet_id, user.username);
    Ok("Tweet Removed")
}
