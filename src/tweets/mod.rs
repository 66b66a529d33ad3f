//! Tweets: feed, listings, engagement reads, create and delete
//!
//! ## Module Structure
//!
//! ```text
//! tweets/
//! ├── types.rs     - Wire types (FeedItem, TweetStats, ...)
//! ├── db.rs        - Queries and mutations over tweet/like/reply
//! └── handlers.rs  - HTTP handlers for the seven tweet endpoints
//! ```
//!
//! Likes and replies are read-only in this API: they can be listed and
//! counted, but rows only enter those tables outside the HTTP surface.

/// Wire types
pub mod types;

/// Database operations
pub mod db;

/// HTTP handlers
pub mod handlers;
