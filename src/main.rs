//! SIMRENDA service binary.
//!
//! Loads configuration, connects the PostgreSQL pool, and serves the
//! planning API.

use std::sync::Arc;
use std::time::Duration;

use http::{HeaderValue, Method};
use sqlx::postgres::PgPoolOptions;
use tower::ServiceBuilder;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use simrenda::adapters::http::api_router;
use simrenda::adapters::notify::TracingNotifier;
use simrenda::adapters::postgres::PostgresPlanningStore;
use simrenda::application::PlanningService;
use simrenda::config::AppConfig;
use simrenda::ports::Notifier;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.server.log_level.clone())),
        )
        .init();

    let pool = PgPoolOptions::new()
        .min_connections(config.database.min_connections)
        .max_connections(config.database.max_connections)
        .acquire_timeout(config.database.acquire_timeout())
        .idle_timeout(config.database.idle_timeout())
        .connect(&config.database.url)
        .await?;

    if config.database.run_migrations {
        tracing::info!("running migrations");
        sqlx::migrate!("./migrations").run(&pool).await?;
    }

    let store = Arc::new(PostgresPlanningStore::new(pool));
    let service = Arc::new(PlanningService::new(store));
    let notifier: Arc<dyn Notifier> = Arc::new(TracingNotifier::new());

    let app = api_router(service, notifier).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(cors_layer(&config))
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.server.request_timeout_secs,
            ))),
    );

    let addr = config.server.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, environment = ?config.server.environment, "simrenda listening");
    axum::serve(listener, app).await?;

    Ok(())
}

/// Allows the configured origins, or any origin when none are configured
/// (development default).
fn cors_layer(config: &AppConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .server
        .cors_origins_list()
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::DELETE])
        .allow_headers(Any);

    if origins.is_empty() {
        layer.allow_origin(Any)
    } else {
        layer.allow_origin(AllowOrigin::list(origins))
    }
}
