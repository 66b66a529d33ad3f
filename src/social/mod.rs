//! Follow graph and authorization
//!
//! ## Module Structure
//!
//! ```text
//! social/
//! ├── db.rs        - Follow-graph queries (following/follower names)
//! ├── gate.rs      - can_view_tweet authorization predicate
//! └── handlers.rs  - GET /user/following/ and GET /user/followers/
//! ```
//!
//! The follow graph does double duty: it feeds the social listings and it
//! is the authorization rule for every tweet-scoped read. The tweet
//! handlers call into `gate` before touching tweet data.

/// Follow-graph database operations
pub mod db;

/// Tweet visibility predicate
pub mod gate;

/// HTTP handlers for follow listings
pub mod handlers;

// Re-export the gate predicate for the tweet handlers
pub use gate::can_view_tweet;
