//! Transcription Relay - Main Entry Point
//!
//! Relays chunked audio uploads to a transcription API and transcripts to a
//! summarization API.

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use transcription_relay::{build_router, AppState, OpenAiClient, RelayConfig};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    let json_logs = std::env::var("LOG_FORMAT")
        .map(|format| format.eq_ignore_ascii_case("json"))
        .unwrap_or(false);
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "transcription_relay=info,tower_http=debug".into()),
        ))
        .with((!json_logs).then(|| tracing_subscriber::fmt::layer()))
        .with(json_logs.then(|| tracing_subscriber::fmt::layer().json()))
        .init();

    // Load configuration
    let config = RelayConfig::from_env()?;

    info!("Starting Transcription Relay v{}", env!("CARGO_PKG_VERSION"));
    info!(
        api_url = %config.api_base_url(),
        transcription_model = %config.transcription_model,
        summary_model = %config.summary_model,
        timeout_secs = config.upstream_timeout_secs,
        "Upstream API configured"
    );

    // Initialize components
    let api = OpenAiClient::new(&config)?;
    let port = config.port;

    let state = Arc::new(AppState {
        api: Arc::new(api),
        config,
    });

    let app = build_router(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
