//! Error handling for the HTTP API
//!
//! ## Module Structure
//!
//! ```text
//! error/
//! ├── types.rs       - ApiError enum, status codes, response bodies
//! └── conversion.rs  - IntoResponse implementation
//! ```
//!
//! Handlers return `Result<_, ApiError>`. The variant fixes the status code
//! and the plain-text body; internal faults log their detail and answer with
//! a generic 500 body.

/// Error type definitions
pub mod types;

/// Axum response conversion
pub mod conversion;

// Re-export for convenient access
pub use types::ApiError;
