/*
[INPUT]:  Error sources (HTTP transport, API responses, serialization)
[OUTPUT]: Structured error types with context and classification helpers
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use thiserror::Error;

use crate::types::ApiErrorDetail;

/// Main error type for the Coinbase adapter
#[derive(Error, Debug)]
pub enum CoinbaseError {
    /// Network/DNS/TLS failure before a usable response was obtained
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned a non-2xx response
    #[error("API error ({status}) {method} {url}: {errors:?}")]
    Api {
        status: u16,
        method: String,
        url: String,
        errors: Vec<ApiErrorDetail>,
    },

    /// Request payload could not be encoded to JSON
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Response body could not be decoded into the expected shape
    #[error("Failed to decode {context}: {source}")]
    Decode {
        context: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Credential or signature contained bytes not representable in a header
    #[error("Invalid header value: {0}")]
    Header(#[from] reqwest::header::InvalidHeaderValue),

    /// Raw response body could not be written into the caller's sink
    #[error("Failed to write response body to sink: {0}")]
    Io(#[from] std::io::Error),

    /// System clock error
    #[error("System clock error: time went backwards")]
    SystemClock,

    /// Credential lookup from the environment failed
    #[error("Environment variable not set: {0}")]
    EnvVarNotSet(&'static str),
}

impl CoinbaseError {
    /// HTTP status code, for API errors
    pub fn status(&self) -> Option<u16> {
        match self {
            CoinbaseError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Check if the error is retryable
    pub fn is_retryable(&self) -> bool {
        match self {
            CoinbaseError::Http(_) => true,
            CoinbaseError::Api { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }

    /// Check if error indicates authentication failure
    pub fn is_auth_error(&self) -> bool {
        matches!(
            self,
            CoinbaseError::Api {
                status: 401 | 403,
                ..
            }
        )
    }
}

/// Result type alias for Coinbase operations
pub type Result<T> = std::result::Result<T, CoinbaseError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn api_error(status: u16) -> CoinbaseError {
        CoinbaseError::Api {
            status,
            method: "GET".to_string(),
            url: "https://api.coinbase.com/v2/accounts".to_string(),
            errors: vec![ApiErrorDetail {
                id: "authentication_error".to_string(),
                message: "invalid signature".to_string(),
                url: None,
            }],
        }
    }

    #[test]
    fn test_api_error_carries_status() {
        let err = api_error(401);
        assert_eq!(err.status(), Some(401));
        assert!(err.is_auth_error());
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_server_errors_are_retryable() {
        assert!(api_error(503).is_retryable());
        assert!(api_error(429).is_retryable());
        assert!(!api_error(404).is_retryable());
    }

    #[test]
    fn test_api_error_display_includes_method_and_url() {
        let rendered = api_error(401).to_string();
        assert!(rendered.contains("401"));
        assert!(rendered.contains("GET"));
        assert!(rendered.contains("/v2/accounts"));
        assert!(rendered.contains("invalid signature"));
    }
}
