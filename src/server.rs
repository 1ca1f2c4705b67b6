//! HTTP surface of the translation server.
//!
//! `TranslationServer` is built once at process start and owns everything the
//! routes need; handlers receive it through axum state.

use crate::config::Config;
use crate::error::TranslationError;
use crate::store::TranslationStore;
use anyhow::{Context, Result};
use axum::{
    extract::{Path, State},
    http::{header, HeaderValue, Method},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};

/// Cache directive sent with every successful bundle response.
pub const CACHE_CONTROL_VALUE: &str = "public, max-age=3600";

/// Shared state handed to every handler.
#[derive(Debug)]
pub struct AppState {
    pub store: TranslationStore,
}

/// The translation server: configuration plus the bundle store.
pub struct TranslationServer {
    config: Config,
    state: Arc<AppState>,
}

impl TranslationServer {
    pub fn new(config: Config) -> Self {
        let state = Arc::new(AppState {
            store: TranslationStore::new(config.translations_dir.clone()),
        });
        Self { config, state }
    }

    /// Build the router with CORS and request tracing applied.
    pub fn router(&self) -> Result<Router> {
        let origin = HeaderValue::from_str(&self.config.allowed_origin)
            .with_context(|| format!("Invalid ALLOWED_ORIGIN: {}", self.config.allowed_origin))?;

        let cors = CorsLayer::new()
            .allow_origin(origin)
            .allow_methods([Method::GET]);

        Ok(Router::new()
            .route("/translations/:lang", get(get_translations))
            .route("/health", get(health_check))
            .layer(cors)
            .layer(TraceLayer::new_for_http())
            .with_state(Arc::clone(&self.state)))
    }

    /// Bind the configured port on all interfaces and serve until Ctrl-C.
    pub async fn serve(self) -> Result<()> {
        let addr = format!("0.0.0.0:{}", self.config.port);
        let listener = TcpListener::bind(&addr)
            .await
            .with_context(|| format!("Failed to bind {}", addr))?;
        self.serve_on(listener).await
    }

    /// Serve on an already bound listener until Ctrl-C.
    pub async fn serve_on(self, listener: TcpListener) -> Result<()> {
        let router = self.router()?;
        let local_addr = listener.local_addr()?;

        info!("Server listening at http://{}", local_addr);
        info!(
            "Serving translations from {} (allowed origin: {})",
            self.state.store.base_dir().display(),
            self.config.allowed_origin
        );

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("Server error")?;

        info!("Server stopped");
        Ok(())
    }
}

/// GET /translations/:lang
async fn get_translations(
    State(state): State<Arc<AppState>>,
    Path(lang): Path<String>,
) -> Result<impl IntoResponse, TranslationError> {
    let bundle = state.store.load(&lang).await?;

    Ok((
        [(header::CACHE_CONTROL, HeaderValue::from_static(CACHE_CONTROL_VALUE))],
        Json(bundle),
    ))
}

/// GET /health
async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
