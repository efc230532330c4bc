mod analysis;
mod config;
mod errors;
mod extraction;
mod routes;
mod state;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::analysis::catalog::SectionCatalog;
use crate::config::Config;
use crate::extraction::DocumentExtractor;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting ATS checker v{}", env!("CARGO_PKG_VERSION"));

    tokio::fs::create_dir_all(&config.upload_dir)
        .await
        .with_context(|| {
            format!(
                "Failed to create upload directory '{}'",
                config.upload_dir.display()
            )
        })?;
    info!(
        "Upload staging dir: {} (limit {} bytes)",
        config.upload_dir.display(),
        config.max_upload_bytes
    );

    let catalog = Arc::new(SectionCatalog::standard());
    let section_names: Vec<&str> = catalog.sections().map(|s| s.as_str()).collect();
    info!(
        "Section catalog loaded ({} sections: {})",
        catalog.len(),
        section_names.join(", ")
    );

    let state = AppState {
        config: config.clone(),
        catalog,
        extractor: Arc::new(DocumentExtractor::new(config.upload_dir.clone())),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
