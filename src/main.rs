/**
 * Server Entry Point
 *
 * Loads environment configuration, initializes logging, assembles the
 * application, and serves it. Startup failures (unreachable database,
 * unbindable port) log their cause and exit non-zero.
 */

use std::net::SocketAddr;

use tracing_subscriber::EnvFilter;

use chirp::server::{create_app, AppConfig};

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "debug".to_string());

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&env_filter))
        .init();

    let config = AppConfig::from_env();

    let app = match create_app(&config).await {
        Ok(app) => app,
        Err(err) => {
            tracing::error!("Failed to initialize application: {}", err);
            std::process::exit(1);
        }
    };

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(err) => {
            tracing::error!("Failed to bind {}: {}", addr, err);
            std::process::exit(1);
        }
    };

    tracing::info!("Listening on {}", addr);

    if let Err(err) = axum::serve(listener, app).await {
        tracing::error!("Server error: {}", err);
        std::process::exit(1);
    }
}
