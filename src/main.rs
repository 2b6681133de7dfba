use anyhow::Result;
use axum::{routing::get, Router};
use dotenvy::dotenv;
use migration::MigratorTrait;
use sea_orm::Database;
use tower_http::{compression::CompressionLayer, trace::TraceLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use venue_directory::{config::Config, handlers, state::AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "venue_directory=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Venue Directory...");

    let config = Config::from_env()?;
    tracing::info!("Configuration loaded");

    let db = Database::connect(&config.database_url).await?;
    tracing::info!("Connected to database");

    if config.run_migrations {
        migration::Migrator::up(&db, None).await?;
        tracing::info!("Database migrations completed");
    }

    let addr = config.bind_address();
    let state = AppState::new(db, config);
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health::health_check))
        .merge(handlers::html_routes())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
