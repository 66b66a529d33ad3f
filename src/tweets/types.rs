//! Wire types for the tweet endpoints
//!
//! Response field names follow the client contract: JSON keys are
//! camelCase (`dateTime`), and the likes/replies listings are wrapped in a
//! keyed object rather than returned as bare arrays.

use serde::{Deserialize, Serialize};

/// One feed entry: a tweet from a followed user
#[derive(Debug, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct FeedItem {
    /// Author's username
    pub username: String,
    /// Tweet text
    pub tweet: String,
    /// Creation time, `YYYY-MM-DD HH:MM:SS`
    pub date_time: String,
}

/// A tweet with its engagement counts
///
/// Used both for the single-tweet detail endpoint and for the
/// requester's own-tweets listing.
#[derive(Debug, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct TweetStats {
    /// Tweet text
    pub tweet: String,
    /// Number of likes
    pub likes: i64,
    /// Number of replies
    pub replies: i64,
    /// Creation time, `YYYY-MM-DD HH:MM:SS`
    pub date_time: String,
}

/// One reply with its author's display name
#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct ReplyItem {
    /// Display name of the replying user
    pub name: String,
    /// Reply text
    pub reply: String,
}

/// Response body for GET /tweets/{tweet_id}/likes/
#[derive(Debug, Serialize)]
pub struct LikesResponse {
    /// Usernames of everyone who liked the tweet
    pub likes: Vec<String>,
}

/// Response body for GET /tweets/{tweet_id}/replies/
#[derive(Debug, Serialize)]
pub struct RepliesResponse {
    /// Replies with their authors' display names
    pub replies: Vec<ReplyItem>,
}

/// Request body for POST /user/tweets/
#[derive(Debug, Deserialize)]
pub struct CreateTweetRequest {
    /// Tweet text
    pub tweet: String,
}
