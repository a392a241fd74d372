use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use volleydle_api::{config::Config, db};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing/logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Volleydle API...");

    dotenvy::dotenv().ok();

    let config = Config::from_env()?;

    // Create database connection pool
    let options = SqliteConnectOptions::from_str(&config.database_url)?.create_if_missing(true);
    let pool = SqlitePool::connect_with(options).await?;
    db::init_schema(&pool).await?;

    tracing::info!("Database connection established.");

    let addr = config.addr();
    let app = volleydle_api::app(pool, &config.cors_origins);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
