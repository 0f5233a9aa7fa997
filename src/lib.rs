pub mod config;
pub mod db;
pub mod error;
pub mod routes;
pub mod telemetry;
pub mod validation;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::db::NameStore;
use crate::db::repository::PgNameStore;

/// Shared handler state: the injected store, nothing else.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn NameStore>,
}

pub async fn run(config: config::Config) -> anyhow::Result<()> {
    telemetry::init_tracing(&config.rust_log);

    let pool = db::init_pool(&config).await?;
    let state = AppState {
        store: Arc::new(PgNameStore::new(pool)),
    };

    // The front-end is served from another origin, hence the open CORS layer
    let app = Router::new()
        .merge(routes::router(state))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
