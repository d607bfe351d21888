mod auth;
mod config;
mod db;
mod errors;
mod models;
mod routes;
mod state;
mod store;
mod submissions;
mod vault;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::auth::service::AuthService;
use crate::config::Config;
use crate::db::create_pool;
use crate::routes::build_router;
use crate::state::AppState;
use crate::store::credentials::PgCredentialStore;
use crate::store::postings::PgPostingStore;
use crate::store::resumes::PgResumeStore;
use crate::submissions::SubmissionLog;
use crate::vault::ResumeVault;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Workbridge API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize PostgreSQL and wire each service to its store
    let db = create_pool(&config.database_url).await?;

    let state = AppState {
        auth: AuthService::new(Arc::new(PgCredentialStore::new(db.clone()))),
        vault: ResumeVault::new(Arc::new(PgResumeStore::new(db.clone()))),
        submissions: SubmissionLog::new(Arc::new(PgPostingStore::new(db))),
        config: config.clone(),
    };

    // Blanket CORS, matching the service this replaces
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
