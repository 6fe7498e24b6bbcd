//! # Upstream Errors
//!
//! Error types for calls to the ERP REST API.
//!
//! Errors raised from an HTTP error status keep the body the ERP sent back
//! so that the REST layer can echo it to the caller as `providerResponse`.
//!
//! # Examples
//!
//! ```
//! use article_ek_proxy::infrastructure::upstream::error::UpstreamError;
//!
//! let error = UpstreamError::timeout("Request timed out after 30000ms");
//! assert!(error.provider_response().is_none());
//!
//! let body = serde_json::json!({"error": "invalid token"});
//! let error = UpstreamError::authentication("Invalid API token", Some(body.clone()));
//! assert_eq!(error.provider_response(), Some(&body));
//! ```

use serde_json::Value;
use thiserror::Error;

/// Error type for upstream ERP calls.
#[derive(Debug, Clone, Error)]
pub enum UpstreamError {
    /// Request timed out.
    #[error("upstream timeout: {message}")]
    Timeout {
        /// Error message.
        message: String,
    },

    /// Network or connection error.
    #[error("upstream connection error: {message}")]
    Connection {
        /// Error message.
        message: String,
    },

    /// Authentication or authorization failure (401/403).
    #[error("upstream authentication error: {message}")]
    Authentication {
        /// Error message.
        message: String,
        /// Body returned by the ERP.
        provider_response: Option<Value>,
    },

    /// Rate limit exceeded (429).
    #[error("upstream rate limit exceeded: {message}")]
    RateLimited {
        /// Error message.
        message: String,
        /// Body returned by the ERP.
        provider_response: Option<Value>,
    },

    /// The ERP rejected the request (400).
    #[error("upstream invalid request: {message}")]
    InvalidRequest {
        /// Error message.
        message: String,
        /// Body returned by the ERP.
        provider_response: Option<Value>,
    },

    /// Endpoint or record not found (404).
    #[error("upstream resource not found: {message}")]
    NotFound {
        /// Error message.
        message: String,
        /// Body returned by the ERP.
        provider_response: Option<Value>,
    },

    /// Any other non-2xx status.
    #[error("upstream HTTP error ({status}): {message}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Error message.
        message: String,
        /// Body returned by the ERP.
        provider_response: Option<Value>,
    },

    /// Response body could not be decoded.
    #[error("upstream protocol error: {message}")]
    ProtocolError {
        /// Error message.
        message: String,
    },

    /// Local failure, e.g. while building the client.
    #[error("upstream client error: {message}")]
    InternalError {
        /// Error message.
        message: String,
    },
}

impl UpstreamError {
    /// Creates a timeout error.
    #[must_use]
    pub fn timeout(message: impl Into<String>) -> Self {
        Self::Timeout {
            message: message.into(),
        }
    }

    /// Creates a connection error.
    #[must_use]
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Creates an authentication error.
    #[must_use]
    pub fn authentication(message: impl Into<String>, provider_response: Option<Value>) -> Self {
        Self::Authentication {
            message: message.into(),
            provider_response,
        }
    }

    /// Creates a rate limited error.
    #[must_use]
    pub fn rate_limited(message: impl Into<String>, provider_response: Option<Value>) -> Self {
        Self::RateLimited {
            message: message.into(),
            provider_response,
        }
    }

    /// Creates an invalid request error.
    #[must_use]
    pub fn invalid_request(message: impl Into<String>, provider_response: Option<Value>) -> Self {
        Self::InvalidRequest {
            message: message.into(),
            provider_response,
        }
    }

    /// Creates a not found error.
    #[must_use]
    pub fn not_found(message: impl Into<String>, provider_response: Option<Value>) -> Self {
        Self::NotFound {
            message: message.into(),
            provider_response,
        }
    }

    /// Creates an error for an unclassified HTTP status.
    #[must_use]
    pub fn status(status: u16, message: impl Into<String>, provider_response: Option<Value>) -> Self {
        Self::Status {
            status,
            message: message.into(),
            provider_response,
        }
    }

    /// Creates a protocol error.
    #[must_use]
    pub fn protocol_error(message: impl Into<String>) -> Self {
        Self::ProtocolError {
            message: message.into(),
        }
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::InternalError {
            message: message.into(),
        }
    }

    /// Returns the body the ERP answered with, if the error came from an
    /// HTTP error status.
    #[must_use]
    pub fn provider_response(&self) -> Option<&Value> {
        match self {
            Self::Authentication {
                provider_response, ..
            }
            | Self::RateLimited {
                provider_response, ..
            }
            | Self::InvalidRequest {
                provider_response, ..
            }
            | Self::NotFound {
                provider_response, ..
            }
            | Self::Status {
                provider_response, ..
            } => provider_response.as_ref(),
            _ => None,
        }
    }
}

/// Result type for upstream operations.
pub type UpstreamResult<T> = Result<T, UpstreamError>;
