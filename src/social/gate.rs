//! Follow-graph authorization gate
//!
//! Tweet-scoped reads (detail, likes, replies) are only allowed when the
//! requester follows the tweet's author. One query decides that: does a
//! follower edge exist from the requester to a user who owns the tweet?
//!
//! Two consequences of the predicate shape are part of the contract:
//!
//! - A tweet that does not exist fails the gate exactly like a tweet from
//!   an unfollowed author, so clients cannot probe which tweet ids exist.
//! - Authors fail the gate on their own tweets unless they follow
//!   themselves, since the edge requester -> author is what is checked.

use sqlx::SqlitePool;

/// Check whether `viewer_user_id` may read `tweet_id`
///
/// # Returns
///
/// * `Ok(true)` - The viewer follows the tweet's author
/// * `Ok(false)` - No such edge, or no such tweet
/// * `Err(sqlx::Error)` - Database error
pub async fn can_view_tweet(
    pool: &SqlitePool,
    viewer_user_id: i64,
    tweet_id: i64,
) -> Result<bool, sqlx::Error> {
    sqlx::query_scalar::<_, bool>(
        r#"
        SELECT EXISTS(
            SELECT 1
            FROM follower
            INNER JOIN tweet ON follower.following_user_id = tweet.user_id
            WHERE follower.follower_user_id = ? AND tweet.tweet_id = ?
        )
        "#,
    )
    .bind(viewer_user_id)
    .bind(tweet_id)
    .fetch_one(pool)
    .await
}
