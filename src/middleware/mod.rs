//! Request middleware
//!
//! ## Module Structure
//!
//! ```text
//! middleware/
//! └── auth.rs  - Bearer-token verification and the AuthUser extractor
//! ```

/// Authentication middleware and extractor
pub mod auth;

// Re-export what handlers and the router wire up
pub use auth::{auth_middleware, AuthUser, AuthenticatedUser};
