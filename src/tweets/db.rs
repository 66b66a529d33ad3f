//! Database operations for tweets
//!
//! All tweet reads and writes live here as free functions over a pool or
//! connection. Engagement counts come from correlated subqueries against
//! the `like` and `reply` tables; nothing is denormalized.
//!
//! Listings order by `date_time` descending with `tweet_id` descending as
//! the tie-break, so tweets created within the same second still come back
//! newest first.

use chrono::Utc;
use sqlx::{SqliteConnection, SqlitePool};

use super::types::{FeedItem, ReplyItem, TweetStats};

/// Maximum number of tweets in the home feed
pub const FEED_LIMIT: i64 = 4;

/// Get the latest tweets from users the viewer follows
///
/// At most [`FEED_LIMIT`] rows, newest first.
pub async fn get_latest_feed(
    pool: &SqlitePool,
    user_id: i64,
) -> Result<Vec<FeedItem>, sqlx::Error> {
    sqlx::query_as::<_, FeedItem>(
        r#"
        SELECT user.username, tweet.tweet, tweet.date_time
        FROM follower
        INNER JOIN tweet ON tweet.user_id = follower.following_user_id
        INNER JOIN user ON user.user_id = tweet.user_id
        WHERE follower.follower_user_id = ?
        ORDER BY tweet.date_time DESC, tweet.tweet_id DESC
        LIMIT ?
        "#,
    )
    .bind(user_id)
    .bind(FEED_LIMIT)
    .fetch_all(pool)
    .await
}

/// Get all tweets by one user with their engagement counts, newest first
pub async fn get_tweets_for_user(
    pool: &SqlitePool,
    user_id: i64,
) -> Result<Vec<TweetStats>, sqlx::Error> {
    sqlx::query_as::<_, TweetStats>(
        r#"
        SELECT tweet,
               (SELECT COUNT(*) FROM like WHERE like.tweet_id = tweet.tweet_id) AS likes,
               (SELECT COUNT(*) FROM reply WHERE reply.tweet_id = tweet.tweet_id) AS replies,
               date_time
        FROM tweet
        WHERE user_id = ?
        ORDER BY date_time DESC, tweet_id DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}

/// Get one tweet with its engagement counts
pub async fn get_tweet_stats(
    pool: &SqlitePool,
    tweet_id: i64,
) -> Result<Option<TweetStats>, sqlx::Error> {
    sqlx::query_as::<_, TweetStats>(
        r#"
        SELECT tweet,
               (SELECT COUNT(*) FROM like WHERE like.tweet_id = tweet.tweet_id) AS likes,
               (SELECT COUNT(*) FROM reply WHERE reply.tweet_id = tweet.tweet_id) AS replies,
               date_time
        FROM tweet
        WHERE tweet_id = ?
        "#,
    )
    .bind(tweet_id)
    .fetch_optional(pool)
    .await
}

/// Get the usernames of everyone who liked a tweet
pub async fn get_likers_for_tweet(
    pool: &SqlitePool,
    tweet_id: i64,
) -> Result<Vec<String>, sqlx::Error> {
    sqlx::query_scalar::<_, String>(
        r#"
        SELECT username
        FROM like
        INNER JOIN user ON like.user_id = user.user_id
        WHERE like.tweet_id = ?
        "#,
    )
    .bind(tweet_id)
    .fetch_all(pool)
    .await
}

/// Get the replies to a tweet with their authors' display names
pub async fn get_replies_for_tweet(
    pool: &SqlitePool,
    tweet_id: i64,
) -> Result<Vec<ReplyItem>, sqlx::Error> {
    sqlx::query_as::<_, ReplyItem>(
        r#"
        SELECT name, reply
        FROM reply
        INNER JOIN user ON reply.user_id = user.user_id
        WHERE reply.tweet_id = ?
        "#,
    )
    .bind(tweet_id)
    .fetch_all(pool)
    .await
}

/// Insert a new tweet stamped with the current server time
pub async fn create_tweet(
    pool: &SqlitePool,
    user_id: i64,
    tweet: &str,
) -> Result<(), sqlx::Error> {
    let date_time = Utc::now().format("%Y-%m-%d %H:%M:%S").to_string();

    sqlx::query("INSERT INTO tweet (tweet, user_id, date_time) VALUES (?, ?, ?)")
        .bind(tweet)
        .bind(user_id)
        .bind(date_time)
        .execute(pool)
        .await?;

    Ok(())
}

/// Get the owning user id of a tweet, if the tweet exists
pub async fn get_tweet_owner(
    conn: &mut SqliteConnection,
    tweet_id: i64,
) -> Result<Option<i64>, sqlx::Error> {
    sqlx::query_scalar::<_, i64>("SELECT user_id FROM tweet WHERE tweet_id = ?")
        .bind(tweet_id)
        .fetch_optional(&mut *conn)
        .await
}

/// Delete a tweet row
///
/// Ownership is the caller's concern; pair this with [`get_tweet_owner`]
/// inside one transaction.
pub async fn delete_tweet(conn: &mut SqliteConnection, tweet_id: i64) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM tweet WHERE tweet_id = ?")
        .bind(tweet_id)
        .execute(&mut *conn)
        .await?;

    Ok(())
}
