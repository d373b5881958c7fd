//! REST API module using Axum
//!
//! Provides HTTP endpoints for the triage dashboard. JSON only; the
//! dashboard front-end is deployed separately and talks to `/api/v1`.

pub mod envelope;
pub mod handlers;
mod routes;

pub use handlers::DashboardState;

use axum::http::{header, Method};
use axum::response::Response;
use axum::Router;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Build a CORS layer that is restrictive by default (same-origin only).
///
/// Set `PARAGON_CORS_ORIGINS` to a comma-separated list of allowed origins
/// for development (e.g., `http://localhost:3000` for the Next.js dev
/// server).
fn build_cors_layer() -> CorsLayer {
    match std::env::var("PARAGON_CORS_ORIGINS") {
        Ok(origins) => {
            let allowed: Vec<_> = origins
                .split(',')
                .filter_map(|o| o.trim().parse().ok())
                .collect();
            tracing::info!(origins = %origins, "CORS: allowing configured origins");
            CorsLayer::new()
                .allow_origin(allowed)
                .allow_methods([Method::GET, Method::POST])
                .allow_headers([header::CONTENT_TYPE])
        }
        Err(_) => {
            // No cross-origin allowed
            CorsLayer::new()
                .allow_methods([Method::GET, Method::POST])
                .allow_headers([header::CONTENT_TYPE])
        }
    }
}

/// Unmatched paths get the same envelope as other errors.
async fn not_found() -> Response {
    envelope::ApiErrorResponse::not_found("no such endpoint")
}

/// Create the complete application router.
pub fn create_app(state: DashboardState) -> Router {
    let cors = build_cors_layer();

    Router::new()
        .nest("/api/v1", routes::api_routes(state.clone()))
        // Legacy health endpoint at /health
        .merge(routes::legacy_routes(state))
        .fallback(not_found)
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors)
}
