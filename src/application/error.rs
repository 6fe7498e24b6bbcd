//! # Application Errors
//!
//! Error types for the application layer.
//!
//! # Error Hierarchy
//!
//! ```text
//! ApplicationError
//! └── Upstream(UpstreamError)   - ERP call failed (list level)
//! ```
//!
//! # Examples
//!
//! ```
//! use article_ek_proxy::application::error::ApplicationError;
//! use article_ek_proxy::infrastructure::upstream::UpstreamError;
//!
//! let err: ApplicationError = UpstreamError::timeout("Request timed out after 30000ms").into();
//! assert!(err.is_upstream());
//! assert!(err.provider_response().is_none());
//! ```

use crate::infrastructure::upstream::UpstreamError;
use serde_json::Value;
use thiserror::Error;

/// Error raised by application services.
#[derive(Debug, Clone, Error)]
pub enum ApplicationError {
    /// An upstream call that the request depends on failed.
    #[error(transparent)]
    Upstream(#[from] UpstreamError),
}

impl ApplicationError {
    /// Returns true if the error came from the ERP.
    #[must_use]
    pub fn is_upstream(&self) -> bool {
        matches!(self, Self::Upstream(_))
    }

    /// Returns the payload the ERP answered with, if any.
    #[must_use]
    pub fn provider_response(&self) -> Option<&Value> {
        match self {
            Self::Upstream(e) => e.provider_response(),
        }
    }
}

/// Result type for application operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn upstream_error_is_transparent() {
        let err: ApplicationError = UpstreamError::connection("refused").into();
        assert_eq!(err.to_string(), "upstream connection error: refused");
    }

    #[test]
    fn provider_response_passthrough() {
        let body = json!({"error": "forbidden"});
        let err: ApplicationError = UpstreamError::authentication("denied", Some(body.clone())).into();
        assert_eq!(err.provider_response(), Some(&body));
    }

    #[test]
    fn transport_error_has_no_provider_response() {
        let err: ApplicationError = UpstreamError::timeout("after 30000ms").into();
        assert!(err.is_upstream());
        assert!(err.provider_response().is_none());
    }
}
