//! Axum router configuration with middleware.
//!
//! All routes are under `/api/v1/`.
//! Middleware: CORS, tracing.
//!
//! A static web front-end can be served from the directory named by
//! `ROSTER_WEB_DIR`. API routes take priority; unknown paths fall through to
//! its `index.html`. If the variable is unset or the directory does not
//! exist, only the API is served.

use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::http::handlers;
use crate::state::AppState;

/// Environment variable naming the static web UI directory.
pub const WEB_DIR_ENV: &str = "ROSTER_WEB_DIR";

/// Build the complete API router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        .route(
            "/contractors",
            get(handlers::contractor::list_contractors).post(handlers::contractor::create_contractor),
        )
        .route("/contractors/export", get(handlers::contractor::export_contractors))
        .route(
            "/contractors/{id}",
            get(handlers::contractor::get_contractor)
                .put(handlers::contractor::update_contractor)
                .delete(handlers::contractor::delete_contractor),
        )
        .route("/stats", get(handlers::stats::get_stats));

    let mut router = Router::new()
        .nest("/api/v1", api_routes)
        .route("/health", get(health_check))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    if let Ok(web_dir) = std::env::var(WEB_DIR_ENV) {
        if std::path::Path::new(&web_dir).exists() {
            let index_path = format!("{web_dir}/index.html");
            let serve_dir = ServeDir::new(&web_dir).fallback(ServeFile::new(index_path));
            router = router.fallback_service(serve_dir);
            tracing::info!(path = %web_dir, "static web UI serving enabled");
        } else {
            tracing::warn!(path = %web_dir, "{WEB_DIR_ENV} does not exist, serving API only");
        }
    }

    router
}

/// GET /health - Simple health check endpoint.
async fn health_check() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
