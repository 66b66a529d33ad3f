/**
 * API Route Definitions
 *
 * Declares every endpoint and the handler behind it. Paths keep their
 * trailing slashes; that is the form the client contract uses, and axum
 * does not redirect between the two.
 *
 * # Public Endpoints
 *
 * | Method | Path        | Handler  |
 * |--------|-------------|----------|
 * | POST   | /register/  | register |
 * | POST   | /login/     | login    |
 *
 * # Protected Endpoints (bearer token required)
 *
 * | Method | Path                         | Handler           |
 * |--------|------------------------------|-------------------|
 * | GET    | /user/tweets/feed/           | get_feed          |
 * | GET    | /user/tweets/                | get_own_tweets    |
 * | POST   | /user/tweets/                | create_tweet      |
 * | GET    | /user/following/             | get_following     |
 * | GET    | /user/followers/             | get_followers     |
 * | GET    | /tweets/{tweet_id}/          | get_tweet         |
 * | DELETE | /tweets/{tweet_id}/          | delete_tweet      |
 * | GET    | /tweets/{tweet_id}/likes/    | get_tweet_likes   |
 * | GET    | /tweets/{tweet_id}/replies/  | get_tweet_replies |
 */

use axum::routing::{get, post};
use axum::Router;

use crate::auth::handlers as auth_handlers;
use crate::server::state::AppState;
use crate::social::handlers as social_handlers;
use crate::tweets::handlers as tweet_handlers;

/// Routes reachable without a token
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/register/", post(auth_handlers::register))
        .route("/login/", post(auth_handlers::login))
}

/// Routes behind the authentication middleware
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/user/tweets/feed/", get(tweet_handlers::get_feed))
        .route(
            "/user/tweets/",
            get(tweet_handlers::get_own_tweets).post(tweet_handlers::create_tweet),
        )
        .route("/user/following/", get(social_handlers::get_following))
        .route("/user/followers/", get(social_handlers::get_followers))
        .route(
            "/tweets/{tweet_id}/",
            get(tweet_handlers::get_tweet).delete(tweet_handlers::delete_tweet),
        )
        .route(
            "/tweets/{tweet_id}/likes/",
            get(tweet_handlers::get_tweet_likes),
        )
        .route(
            "/tweets/{tweet_id}/replies/",
            get(tweet_handlers::get_tweet_replies),
        )
}
