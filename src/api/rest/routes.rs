//! # Routes
//!
//! Router assembly.

use crate::api::rest::handlers::{self, AppState};
use axum::Router;
use axum::routing::{get, post};
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Builds the application router with request tracing and permissive CORS.
pub fn create_router(state: AppState) -> Router {
    let api = Router::new()
        .route("/health", get(handlers::health))
        .route(
            "/{provider}/articles-with-last-ek",
            get(handlers::articles_with_last_ek),
        )
        .route(
            "/{provider}/categories/invalidate",
            post(handlers::invalidate_categories),
        );

    Router::new()
        .nest("/api", api)
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
}
