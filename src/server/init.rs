/**
 * Application Initialization
 *
 * Builds the ready-to-serve router from configuration: opens the database
 * pool, derives the JWT keys, assembles the shared state, and hands it to
 * the route wiring.
 */

use axum::Router;

use crate::auth::sessions::JwtKeys;
use crate::routes::create_router;

use super::config::{connect_database, AppConfig};
use super::state::AppState;

/// Build the application router from configuration
///
/// # Errors
///
/// Returns the underlying `sqlx::Error` when the database cannot be
/// opened, which callers surface as a startup failure.
pub async fn create_app(config: &AppConfig) -> Result<Router, sqlx::Error> {
    let db = connect_database(&config.database_url).await?;
    tracing::info!("Database connected: {}", config.database_url);

    let state = AppState {
        db,
        jwt: JwtKeys::new(config.jwt_secret.as_bytes()),
    };

    Ok(create_router(state))
}
