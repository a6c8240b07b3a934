//! Shared helpers for tests.

use axum::Router;

use crate::types::RelayConfig;

/// Serve `router` on an ephemeral local port and return its base URL.
pub(crate) async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

/// Configuration pointing at `base_url` with default model settings.
pub(crate) fn test_config(base_url: &str) -> RelayConfig {
    RelayConfig {
        port: 0,
        open_ai_api_url: base_url.to_string(),
        open_ai_api_key: "sk-test".to_string(),
        transcription_model: crate::DEFAULT_TRANSCRIPTION_MODEL.to_string(),
        transcription_language: crate::DEFAULT_TRANSCRIPTION_LANGUAGE.to_string(),
        summary_model: crate::DEFAULT_SUMMARY_MODEL.to_string(),
        summary_max_tokens: crate::DEFAULT_SUMMARY_MAX_TOKENS,
        summary_temperature: crate::DEFAULT_SUMMARY_TEMPERATURE,
        upstream_timeout_secs: 5,
        max_upload_bytes: crate::DEFAULT_MAX_UPLOAD_BYTES,
    }
}
