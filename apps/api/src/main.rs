use axum_helpers::server::{create_app, create_router, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use domain_todos::{handlers, PgTodoRepository, TodoService};
use tracing::info;

mod config;
mod openapi;
mod ready;

use config::Config;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output (before any fallible operations)
    install_color_eyre();

    // Load configuration from environment variables
    let config = Config::from_env()?;

    // Initialize tracing with ErrorLayer for span trace capture
    init_tracing(&config.environment);

    // Connect to PostgreSQL with the default retry policy
    let db = database::postgres::connect_with_retry(&config.database.url, None)
        .await
        .map_err(|e| eyre::eyre!("PostgreSQL connection failed: {}", e))?;

    database::postgres::run_migrations::<migration::Migrator>(&db, &config.app.name)
        .await
        .map_err(|e| eyre::eyre!("Migration failed: {}", e))?;

    let repository = PgTodoRepository::new(db.clone());
    let service = TodoService::new(repository);
    let api_routes = handlers::router(service);

    // create_router adds docs/middleware to our composed routes
    // - /health: liveness check with app name/version
    // - /ready: readiness check that pings the database
    let app = create_router::<openapi::ApiDoc>(api_routes)
        .merge(health_router(config.app.clone()))
        .merge(ready::ready_router(db.clone()));

    info!("Starting {} v{}", config.app.name, config.app.version);

    create_app(app, &config.server)
        .await
        .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Shutting down: closing database connection");
    db.close().await?;

    Ok(())
}
