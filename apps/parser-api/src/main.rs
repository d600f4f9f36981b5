//! PDF parser service.
//!
//! Accepts uploaded PDFs and returns extracted text, tables, and a
//! coarse document-type classification as structured JSON:
//!
//! - `GET /health` - liveness probe
//! - `POST /parse-pdf` - single document (multipart field `file`)
//! - `POST /parse-multiple` - batch (multipart field `files`)

use anyhow::Result;
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

mod error;
mod handlers;
mod models;
mod scratch;

/// Uploads above this size are rejected before they reach a handler.
const MAX_UPLOAD_BYTES: usize = 50 * 1024 * 1024;

fn app() -> Router {
    // Cross-origin requests are universally permitted
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(handlers::health))
        .route("/parse-pdf", post(handlers::parse_pdf))
        .route("/parse-multiple", post(handlers::parse_multiple))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("parser_api=info".parse()?)
                .add_directive("tower_http=debug".parse()?),
        )
        .init();

    // Port is resolved once at startup and fixed afterward
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(5001);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!("Starting pdf-parser on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app()).await?;

    Ok(())
}
