//! Authentication HTTP handlers
//!
//! ## Module Structure
//!
//! ```text
//! handlers/
//! ├── types.rs     - Request/response bodies
//! ├── register.rs  - POST /register/
//! └── login.rs     - POST /login/
//! ```

/// Request/response types
pub mod types;

/// Registration endpoint
pub mod register;

/// Login endpoint
pub mod login;

// Re-export handlers for route registration
pub use login::login;
pub use register::register;
