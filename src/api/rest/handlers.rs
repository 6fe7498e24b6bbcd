//! # REST Handlers
//!
//! Request handlers, response bodies and the API error type.
//!
//! Every failure is answered with the same JSON shape:
//!
//! ```json
//! { "success": false, "message": "...", "error": "...", "providerResponse": null }
//! ```

use crate::application::error::ApplicationError;
use crate::application::services::ArticleEnrichmentService;
use crate::domain::entities::EnrichedArticle;
use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use thiserror::Error;
use tracing::{error, info, warn};

/// Shared state of all handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Enrichment service for the configured provider.
    pub service: Arc<ArticleEnrichmentService>,
}

impl AppState {
    /// Creates the state around a service.
    #[must_use]
    pub fn new(service: ArticleEnrichmentService) -> Self {
        Self {
            service: Arc::new(service),
        }
    }

    fn provider(&self) -> &str {
        self.service.provider()
    }

    fn ensure_provider(&self, requested: &str) -> Result<(), ApiError> {
        if requested == self.provider() {
            Ok(())
        } else {
            Err(ApiError::UnknownProvider {
                requested: requested.to_string(),
            })
        }
    }
}

/// Body of a successful article list.
#[derive(Debug, Clone, Serialize)]
pub struct ArticlesResponse {
    /// Always true.
    pub success: bool,
    /// Number of items.
    pub count: usize,
    /// Enriched articles in upstream order.
    pub items: Vec<EnrichedArticle>,
}

/// Body of every error answer.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Always false.
    pub success: bool,
    /// Human readable summary.
    pub message: String,
    /// Underlying error.
    pub error: String,
    /// Payload returned by the ERP, if any.
    #[serde(rename = "providerResponse")]
    pub provider_response: Option<Value>,
}

/// Body of the health endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// `ok` while the process serves requests.
    pub status: &'static str,
    /// Configured provider.
    pub provider: String,
}

/// Errors returned by handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Path names a provider other than the configured one.
    #[error("provider `{requested}` is not configured")]
    UnknownProvider {
        /// Provider from the path.
        requested: String,
    },

    /// The article list could not be produced.
    #[error(transparent)]
    Application(#[from] ApplicationError),
}

impl ApiError {
    /// Returns the HTTP status for this error.
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::UnknownProvider { .. } => StatusCode::NOT_FOUND,
            Self::Application(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn message(&self) -> String {
        match self {
            Self::UnknownProvider { requested } => format!("Unknown provider '{}'", requested),
            Self::Application(_) => "Failed to load articles from the ERP".to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let provider_response = match &self {
            Self::Application(e) => e.provider_response().cloned(),
            Self::UnknownProvider { .. } => None,
        };
        let body = ErrorResponse {
            success: false,
            message: self.message(),
            error: self.to_string(),
            provider_response,
        };
        (self.status_code(), Json(body)).into_response()
    }
}

/// `GET /api/health`
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        provider: state.provider().to_string(),
    })
}

/// `GET /api/{provider}/articles-with-last-ek`
///
/// # Errors
///
/// `404` for an unknown provider, `500` if the article list cannot be
/// fetched.
pub async fn articles_with_last_ek(
    State(state): State<AppState>,
    Path(provider): Path<String>,
) -> Result<Json<ArticlesResponse>, ApiError> {
    state.ensure_provider(&provider)?;
    info!(provider = %provider, "Article list requested");

    match state.service.enrich_all().await {
        Ok(outcome) => Ok(Json(ArticlesResponse {
            success: true,
            count: outcome.count(),
            items: outcome.items,
        })),
        Err(e) => {
            error!(
                provider = %provider,
                error = %e,
                provider_response = ?e.provider_response(),
                "Article list request failed"
            );
            Err(e.into())
        }
    }
}

/// `POST /api/{provider}/categories/invalidate`
///
/// # Errors
///
/// `404` for an unknown provider.
pub async fn invalidate_categories(
    State(state): State<AppState>,
    Path(provider): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.ensure_provider(&provider)?;
    state.service.invalidate_categories().await;
    warn!(provider = %provider, "Category cache invalidated by request");
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::infrastructure::upstream::UpstreamError;
    use serde_json::json;

    #[test]
    fn unknown_provider_is_not_found() {
        let err = ApiError::UnknownProvider {
            requested: "sap".to_string(),
        };
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert!(err.to_string().contains("sap"));
    }

    #[test]
    fn upstream_error_is_internal() {
        let err: ApiError = ApplicationError::from(UpstreamError::timeout("slow")).into();
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn error_response_uses_camel_case_provider_response() {
        let body = ErrorResponse {
            success: false,
            message: "m".to_string(),
            error: "e".to_string(),
            provider_response: None,
        };
        assert_eq!(
            serde_json::to_value(body).unwrap(),
            json!({"success": false, "message": "m", "error": "e", "providerResponse": null})
        );
    }
}
