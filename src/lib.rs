//! Chirp - Minimal Social Network Backend
//!
//! Chirp is a small Twitter-style HTTP API over a single SQLite database:
//! accounts with bcrypt-hashed passwords, JWT bearer sessions, tweets, and
//! a follow graph that doubles as the authorization rule for reading other
//! people's tweets.
//!
//! # Module Structure
//!
//! ```text
//! src/
//! ├── auth/        - Accounts, password hashing, session tokens, register/login
//! ├── middleware/  - Bearer-token verification for protected routes
//! ├── social/      - Follow graph queries and the visibility gate
//! ├── tweets/      - Feed, listings, engagement reads, create/delete
//! ├── server/      - Configuration, shared state, startup assembly
//! ├── routes/      - Endpoint wiring
//! └── error/       - ApiError and response conversion
//! ```
//!
//! # Request Path
//!
//! 1. `routes` matches the path and method
//! 2. `middleware` authenticates protected requests and attaches the
//!    requester's identity to the request
//! 3. Handlers in `auth`, `social`, and `tweets` run their queries through
//!    the module-local `db` layers
//! 4. Failures bubble up as `ApiError` and render as plain-text responses
//!
//! # Usage
//!
//! ```rust,no_run
//! use chirp::server::{create_app, AppConfig};
//!
//! # async fn example() -> Result<(), sqlx::Error> {
//! let config = AppConfig::from_env();
//! let app = create_app(&config).await?;
//! // Serve `app` with axum
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! Every handler returns `Result<_, ApiError>`. The error variant fixes
//! the HTTP status and the plain-text body; internal faults log their
//! detail and answer with a generic 500.

/// Authentication and account management
pub mod auth;

/// Error types and response conversion
pub mod error;

/// Request middleware
pub mod middleware;

/// HTTP route wiring
pub mod routes;

/// Configuration, state, and startup
pub mod server;

/// Follow graph and authorization
pub mod social;

/// Tweet storage and endpoints
pub mod tweets;

// Re-export the types nearly every consumer touches
pub use error::ApiError;
pub use server::AppState;
