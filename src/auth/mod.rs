//! Authentication and account management
//!
//! ## Module Structure
//!
//! ```text
//! auth/
//! ├── users.rs      - User model and credential-store queries
//! ├── passwords.rs  - bcrypt hashing and verification
//! ├── sessions.rs   - JWT creation and verification
//! └── handlers/     - register and login endpoints
//! ```
//!
//! ## Authentication Flow
//!
//! 1. `POST /register/` stores a user with a bcrypt password hash
//! 2. `POST /login/` checks the hash and issues a JWT carrying the username
//! 3. The middleware verifies the JWT on every protected request and
//!    resolves it to a live user row
//!
//! ## Security Notes
//!
//! - Plaintext passwords are never stored or logged
//! - Tokens are signed with the secret from `JWT_SECRET`
//! - Tokens do not expire; they die with the user row they name

/// User model and database operations
pub mod users;

/// Password hashing
pub mod passwords;

/// Session token handling
pub mod sessions;

/// HTTP handlers for registration and login
pub mod handlers;

// Re-export the pieces other modules reach for most
pub use sessions::JwtKeys;
pub use users::User;
