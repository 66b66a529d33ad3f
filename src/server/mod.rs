//! Server configuration, state, and startup
//!
//! ## Module Structure
//!
//! ```text
//! server/
//! ├── config.rs  - Environment configuration and database pool
//! ├── state.rs   - AppState and FromRef sub-state extraction
//! └── init.rs    - create_app: config -> ready router
//! ```

/// Environment configuration
pub mod config;

/// Shared application state
pub mod state;

/// Application assembly
pub mod init;

// Re-export the startup surface
pub use config::AppConfig;
pub use init::create_app;
pub use state::AppState;
