//! HTTP entry point for the Credit Pre-evaluation Engine.
//!
//! Binds the API router on `HOST`:`PORT` (defaulting to 0.0.0.0:8000) and
//! loads policy overrides from the file named by `POLICY_PATH` when set.

use std::env;

use tracing::info;
use tracing_subscriber::EnvFilter;

use credit_engine::api::{create_router, AppState};
use credit_engine::config::PolicyConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .init();

    let policy = match env::var("POLICY_PATH") {
        Ok(path) => {
            info!(path = %path, "Loading policy overrides");
            PolicyConfig::load(&path)?
        }
        Err(_) => PolicyConfig::default(),
    };

    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = env::var("PORT").unwrap_or_else(|_| "8000".to_string());
    let addr = format!("{}:{}", host, port);

    let router = create_router(AppState::new(policy));
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(addr = %addr, "Credit Pre-evaluation Engine listening");

    axum::serve(listener, router).await?;
    Ok(())
}
