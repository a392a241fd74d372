pub mod config;
pub mod db;
pub mod error;
pub mod game;
pub mod models;
pub mod routes;

use axum::{Router, http::HeaderValue, routing::get};
use sqlx::sqlite::SqlitePool;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::AllowedOrigins;

/// Build the HTTP application around a connection pool
pub fn app(pool: SqlitePool, origins: &AllowedOrigins) -> Router {
    Router::new()
        .route("/", get(|| async { "Volleydle API is running" }))
        .route("/health", get(routes::health::health_check))

        // Game endpoints
        .route("/api/player-of-the-day", get(routes::players::get_player_of_the_day))
        .route("/api/players", get(routes::players::get_players))
        .route("/api/guess", get(routes::guess::guess_player))

        .layer(cors_layer(origins))
        .layer(TraceLayer::new_for_http())
        .with_state(pool)
}

fn cors_layer(origins: &AllowedOrigins) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    match origins {
        AllowedOrigins::Any => layer.allow_origin(Any),
        AllowedOrigins::List(list) => {
            let values: Vec<HeaderValue> = list
                .iter()
                .filter_map(|origin| HeaderValue::from_str(origin).ok())
                .collect();
            layer.allow_origin(values)
        }
    }
}
