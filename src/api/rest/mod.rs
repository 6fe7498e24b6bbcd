//! # REST API
//!
//! HTTP endpoints using axum.
//!
//! # Endpoints
//!
//! - `GET /api/{provider}/articles-with-last-ek` - Enriched article list
//! - `POST /api/{provider}/categories/invalidate` - Drop the category cache
//! - `GET /api/health` - Health check endpoint
//!
//! `{provider}` must match the configured provider (default `weclapp`);
//! anything else is answered with `404`.
//!
//! # Usage
//!
//! ```ignore
//! use article_ek_proxy::api::rest::{create_router, AppState};
//!
//! let router = create_router(AppState::new(service));
//!
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await?;
//! axum::serve(listener, router).await?;
//! ```

pub mod handlers;
pub mod routes;

pub use handlers::{ApiError, AppState, ArticlesResponse, ErrorResponse, HealthResponse};
pub use routes::create_router;
