//! HTTP route wiring
//!
//! ## Module Structure
//!
//! ```text
//! routes/
//! ├── api_routes.rs  - Endpoint-to-handler declarations
//! └── router.rs      - Assembly with middleware and fallback
//! ```

/// Route declarations
pub mod api_routes;

/// Router assembly
pub mod router;

// Re-export the assembly entry point
pub use router::create_router;
