use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::services::{ServeDir, ServeFile};

use super::{convert, handlers, intake};
use crate::state::AppState;

/// Slack added to the body limit to cover multipart framing overhead.
const MULTIPART_OVERHEAD_BYTES: usize = 1024 * 1024;

pub fn create_router(state: Arc<AppState>) -> Router {
    // Dashboard static files path (configurable via env)
    let dashboard_dir =
        std::env::var("DASHBOARD_DIR").unwrap_or_else(|_| "dashboard/dist".to_string());

    // The resolver enforces the upload ceiling as policy; the transport
    // limit only has to be high enough not to preempt it.
    let body_limit =
        state.config().intake.max_upload_bytes as usize + MULTIPART_OVERHEAD_BYTES;

    // API routes
    let api_routes = Router::new()
        // Health, config, metrics
        .route("/health", get(handlers::health))
        .route("/config", get(handlers::get_config))
        .route("/metrics", get(handlers::get_metrics))
        // Intake and format discovery
        .route("/formats", get(intake::list_formats))
        .route("/inspect", post(intake::inspect))
        // Conversion
        .route("/convert", post(convert::convert))
        .route("/history", get(convert::history))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state);

    // Serve dashboard with SPA fallback
    let index_path = format!("{}/index.html", dashboard_dir);
    let serve_dir = ServeDir::new(&dashboard_dir).fallback(ServeFile::new(&index_path));

    Router::new()
        .nest("/api/v1", api_routes)
        .fallback_service(serve_dir)
}
