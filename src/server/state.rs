/**
 * Application State
 *
 * Shared state handed to every handler: the SQLite pool and the JWT key
 * material. Both are cheap to clone; the pool clones a handle, not
 * connections.
 *
 * # Sub-state Extraction
 *
 * `FromRef` implementations let handlers extract just the piece they use:
 * most take `State<SqlitePool>`, the login handler takes the whole
 * `State<AppState>` for the keys, and the middleware reads both.
 */

use axum::extract::FromRef;
use sqlx::SqlitePool;

use crate::auth::sessions::JwtKeys;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// SQLite connection pool
    pub db: SqlitePool,
    /// JWT signing and verification keys
    pub jwt: JwtKeys,
}

impl FromRef<AppState> for SqlitePool {
    fn from_ref(state: &AppState) -> Self {
        state.db.clone()
    }
}

impl FromRef<AppState> for JwtKeys {
    fn from_ref(state: &AppState) -> Self {
        state.jwt.clone()
    }
}
