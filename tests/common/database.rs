//! Database test fixtures
//!
//! Every test gets its own in-memory SQLite database carrying the
//! production schema plus seed helpers for follow edges, tweets, likes,
//! and replies.

use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

/// Production schema, one statement per entry
///
/// Likes and replies cascade when their tweet is deleted; foreign keys are
/// switched on per connection below.
const SCHEMA: &[&str] = &[
    r#"
    CREATE TABLE user (
        user_id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        username TEXT NOT NULL UNIQUE,
        password TEXT NOT NULL,
        gender TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE follower (
        follower_id INTEGER PRIMARY KEY AUTOINCREMENT,
        follower_user_id INTEGER NOT NULL REFERENCES user(user_id),
        following_user_id INTEGER NOT NULL REFERENCES user(user_id)
    )
    "#,
    r#"
    CREATE TABLE tweet (
        tweet_id INTEGER PRIMARY KEY AUTOINCREMENT,
        tweet TEXT NOT NULL,
        user_id INTEGER NOT NULL REFERENCES user(user_id),
        date_time TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE reply (
        reply_id INTEGER PRIMARY KEY AUTOINCREMENT,
        tweet_id INTEGER NOT NULL REFERENCES tweet(tweet_id) ON DELETE CASCADE,
        reply TEXT NOT NULL,
        user_id INTEGER NOT NULL REFERENCES user(user_id),
        date_time TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE like (
        like_id INTEGER PRIMARY KEY AUTOINCREMENT,
        tweet_id INTEGER NOT NULL REFERENCES tweet(tweet_id) ON DELETE CASCADE,
        user_id INTEGER NOT NULL REFERENCES user(user_id),
        date_time TEXT NOT NULL
    )
    "#,
];

/// Test database fixture
///
/// Holds a single-connection pool over `sqlite::memory:`. One connection
/// is the point: the in-memory database lives exactly as long as that
/// connection, and a second connection would see a different database.
pub struct TestDatabase {
    pool: SqlitePool,
}

impl TestDatabase {
    /// Create a fresh database with the production schema
    pub async fn new() -> Self {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await
            .expect("Failed to open in-memory database");

        sqlx::query("PRAGMA foreign_keys = ON")
            .execute(&pool)
            .await
            .expect("Failed to enable foreign keys");

        for statement in SCHEMA {
            sqlx::query(statement)
                .execute(&pool)
                .await
                .expect("Failed to create schema");
        }

        Self { pool }
    }

    /// Get the database pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

/// Insert a follow edge: `follower_user_id` follows `following_user_id`
pub async fn create_follow(pool: &SqlitePool, follower_user_id: i64, following_user_id: i64) {
    sqlx::query("INSERT INTO follower (follower_user_id, following_user_id) VALUES (?, ?)")
        .bind(follower_user_id)
        .bind(following_user_id)
        .execute(pool)
        .await
        .expect("Failed to insert follow edge");
}

/// Insert a tweet with a fixed timestamp, returning its id
pub async fn create_tweet_at(
    pool: &SqlitePool,
    user_id: i64,
    tweet: &str,
    date_time: &str,
) -> i64 {
    let result = sqlx::query("INSERT INTO tweet (tweet, user_id, date_time) VALUES (?, ?, ?)")
        .bind(tweet)
        .bind(user_id)
        .bind(date_time)
        .execute(pool)
        .await
        .expect("Failed to insert tweet");

    result.last_insert_rowid()
}

/// Insert a like on a tweet
pub async fn create_like(pool: &SqlitePool, tweet_id: i64, user_id: i64) {
    sqlx::query("INSERT INTO like (tweet_id, user_id, date_time) VALUES (?, ?, ?)")
        .bind(tweet_id)
        .bind(user_id)
        .bind("2024-01-01 00:00:00")
        .execute(pool)
        .await
        .expect("Failed to insert like");
}

/// Insert a reply to a tweet
pub async fn create_reply(pool: &SqlitePool, tweet_id: i64, user_id: i64, reply: &str) {
    sqlx::query("INSERT INTO reply (tweet_id, reply, user_id, date_time) VALUES (?, ?, ?, ?)")
        .bind(tweet_id)
        .bind(reply)
        .bind(user_id)
        .bind("2024-01-01 00:00:00")
        .execute(pool)
        .await
        .expect("Failed to insert reply");
}
