//! Mirror Mind HTTP server.

use std::error::Error;
use std::sync::Arc;

use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::EnvFilter;

use mirror_mind::adapters::http::{app_router, AppState, RouterConfig};
use mirror_mind::adapters::{
    InMemoryUserRepository, JwtConfig, JwtSessionValidator, PostgresUserRepository,
};
use mirror_mind::config::{AppConfig, DatabaseConfig};
use mirror_mind::ports::{SessionValidator, UserRepository};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::load()?;
    init_tracing(&config);
    config.validate()?;

    let users: Arc<dyn UserRepository> = match &config.database {
        Some(database) => Arc::new(PostgresUserRepository::new(connect(database).await?)),
        None => {
            tracing::warn!("No database configured, users are kept in memory");
            Arc::new(InMemoryUserRepository::new())
        }
    };
    let validator: Arc<dyn SessionValidator> =
        Arc::new(JwtSessionValidator::new(JwtConfig::from(&config.auth)));

    let router_config = RouterConfig {
        cors_origins: config.server.cors_origins_list(),
        request_timeout: config.server.request_timeout(),
    };
    let app = app_router(AppState::new(users, validator), &router_config);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, environment = ?config.server.environment, "Mirror Mind listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    if config.is_production() {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

async fn connect(database: &DatabaseConfig) -> Result<sqlx::PgPool, Box<dyn Error>> {
    let pool = PgPoolOptions::new()
        .min_connections(database.min_connections)
        .max_connections(database.max_connections)
        .acquire_timeout(database.acquire_timeout())
        .connect(&database.url)
        .await?;

    if database.run_migrations {
        sqlx::migrate!("./migrations").run(&pool).await?;
        tracing::info!("Database migrations applied");
    }

    Ok(pool)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}
