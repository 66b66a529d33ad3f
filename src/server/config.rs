/**
 * Server Configuration
 *
 * Runtime settings sourced from environment variables, with development
 * defaults for everything. `main` loads a `.env` file first, so local runs
 * work from a checked-in file rather than shell exports.
 *
 * # Environment Variables
 *
 * | Variable       | Default                 | Purpose                  |
 * |----------------|-------------------------|--------------------------|
 * | `SERVER_PORT`  | `3000`                  | TCP port to listen on    |
 * | `DATABASE_URL` | `sqlite:chirp.db`       | SQLite database location |
 * | `JWT_SECRET`   | development fallback    | Token signing secret     |
 *
 * The `JWT_SECRET` fallback is for development only and logs a warning
 * when used; production deployments must set their own secret.
 */

use std::env;
use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqliteSynchronous};
use sqlx::SqlitePool;

/// Default TCP port
const DEFAULT_PORT: u16 = 3000;

/// Default SQLite database location
const DEFAULT_DATABASE_URL: &str = "sqlite:chirp.db";

/// Development-only token signing secret
const DEV_JWT_SECRET: &str = "insecure-development-secret";

/// Runtime configuration assembled from the environment
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// TCP port to listen on
    pub port: u16,
    /// SQLite connection string
    pub database_url: String,
    /// Token signing secret
    pub jwt_secret: String,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// Unset or unparseable values fall back to the development defaults.
    pub fn from_env() -> Self {
        let port = env::var("SERVER_PORT")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());

        let jwt_secret = match env::var("JWT_SECRET") {
            Ok(secret) if !secret.is_empty() => secret,
            _ => {
                tracing::warn!("JWT_SECRET not set, using the development fallback secret");
                DEV_JWT_SECRET.to_string()
            }
        };

        Self {
            port,
            database_url,
            jwt_secret,
        }
    }
}

/// Open the SQLite connection pool
///
/// Every pooled connection runs with WAL journaling, normal fsync, and
/// foreign keys enforced. The database file must already exist with its
/// schema in place; a missing file fails startup rather than silently
/// creating an empty store.
pub async fn connect_database(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .journal_mode(SqliteJournalMode::Wal)
        .synchronous(SqliteSynchronous::Normal)
        .foreign_keys(true);

    SqlitePool::connect_with(options).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_defaults_when_env_unset() {
        env::remove_var("SERVER_PORT");
        env::remove_var("DATABASE_URL");
        env::remove_var("JWT_SECRET");

        let config = AppConfig::from_env();
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.database_url, DEFAULT_DATABASE_URL);
        assert_eq!(config.jwt_secret, DEV_JWT_SECRET);
    }

    #[test]
    #[serial]
    fn test_env_overrides() {
        env::set_var("SERVER_PORT", "8085");
        env::set_var("DATABASE_URL", "sqlite:other.db");
        env::set_var("JWT_SECRET", "supersecret");

        let config = AppConfig::from_env();
        assert_eq!(config.port, 8085);
        assert_eq!(config.database_url, "sqlite:other.db");
        assert_eq!(config.jwt_secret, "supersecret");

        env::remove_var("SERVER_PORT");
        env::remove_var("DATABASE_URL");
        env::remove_var("JWT_SECRET");
    }

    #[test]
    #[serial]
    fn test_unparseable_port_falls_back() {
        env::set_var("SERVER_PORT", "not-a-port");

        let config = AppConfig::from_env();
        assert_eq!(config.port, DEFAULT_PORT);

        env::remove_var("SERVER_PORT");
    }

    #[tokio::test]
    #[serial]
    async fn test_connect_database_in_memory() {
        let pool = connect_database("sqlite::memory:")
            .await
            .expect("in-memory connect should succeed");

        let value: i64 = sqlx::query_scalar("SELECT 1")
            .fetch_one(&pool)
            .await
            .expect("trivial query should succeed");
        assert_eq!(value, 1);
    }
}
