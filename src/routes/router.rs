/**
 * Router Assembly
 *
 * Combines the public and protected route groups into one application
 * router. The authentication middleware is layered onto the protected
 * group only, so register and login stay reachable without a token.
 *
 * Unmatched paths get a plain-text 404 from the fallback; notably a
 * correct path without its trailing slash is an unmatched path.
 */

use axum::http::StatusCode;
use axum::{middleware, Router};

use crate::middleware::auth_middleware;
use crate::server::state::AppState;

use super::api_routes;

/// Build the application router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    let protected = api_routes::protected_routes().route_layer(
        middleware::from_fn_with_state(state.clone(), auth_middleware),
    );

    Router::new()
        .merge(api_routes::public_routes())
        .merge(protected)
        .fallback(fallback_handler)
        .with_state(state)
}

/// Answer unmatched paths
async fn fallback_handler() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "404 Not Found")
}
