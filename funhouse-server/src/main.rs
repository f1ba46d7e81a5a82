//! funhouse-server — kids' party marketing site and CRM
//!
//! Long-running service that:
//! - Serves the public marketing API (services, portfolio, team, contact)
//! - Provides the staff CRM API under /crm (JWT authenticated)
//! - Sends contact-inquiry notifications over SES (best-effort)

mod api;
mod auth;
mod config;
mod db;
mod domain;
mod email;
mod error;
mod state;
mod util;

use config::Config;
use state::AppState;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    // Load .env file
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "funhouse_server=info,tower_http=info".into()),
        )
        .init();

    let config = Config::from_env()?;

    tracing::info!("Starting funhouse-server (env: {})", config.environment);

    // Initialize application state (pool + migrations + notifier)
    let state = AppState::new(&config).await?;

    // Seed the bootstrap admin account on first run
    let hashed = auth::hash_password(&config.admin_password)
        .map_err(|e| format!("Admin password hashing failed: {e}"))?;
    db::staff::ensure_admin(&state.pool, &config.admin_username, &hashed).await?;

    let app = api::create_router(state);

    let http_addr = format!("0.0.0.0:{}", config.http_port);
    let listener = tokio::net::TcpListener::bind(&http_addr).await?;
    tracing::info!("funhouse-server HTTP listening on {http_addr}");

    axum::serve(listener, app).await?;

    Ok(())
}
