//! Error types for REST API operations

use crate::transport::TransportError;

/// Errors that can occur during REST API operations
#[derive(Debug, thiserror::Error)]
pub enum RestError {
    /// A caller supplied value failed a local precondition.
    /// Nothing was sent.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The transport failed to deliver the request or read the response
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    /// The response was not JSON, or lacked the expected payload
    #[error("Malformed response (HTTP {status}): {reason}")]
    MalformedResponse {
        /// HTTP status of the response
        status: u16,
        /// What was wrong with the body
        reason: String,
    },

    /// The API rejected the credential
    #[error("Authentication failed (HTTP {status}): {message}")]
    Authentication {
        /// HTTP status of the response
        status: u16,
        /// Error message from the API, if it sent one
        message: String,
    },
}

impl RestError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    pub(crate) fn malformed(status: u16, reason: impl Into<String>) -> Self {
        Self::MalformedResponse {
            status,
            reason: reason.into(),
        }
    }

    /// Check if this error was raised before any network activity
    pub fn is_local(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }

    /// Check if this error indicates a rejected credential
    pub fn is_auth_error(&self) -> bool {
        matches!(self, Self::Authentication { .. })
    }

    /// HTTP status of the response that caused this error, if one was received
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::MalformedResponse { status, .. } | Self::Authentication { status, .. } => {
                Some(*status)
            }
            Self::InvalidArgument(_) | Self::Transport(_) => None,
        }
    }
}

/// Result type for REST operations
pub type RestResult<T> = Result<T, RestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RestError::malformed(502, "expected value at line 1 column 1");
        assert_eq!(
            err.to_string(),
            "Malformed response (HTTP 502): expected value at line 1 column 1"
        );
        assert_eq!(err.status(), Some(502));
    }

    #[test]
    fn test_error_classification() {
        assert!(RestError::invalid("empty uuid").is_local());

        let auth = RestError::Authentication {
            status: 401,
            message: "Unauthenticated.".to_string(),
        };
        assert!(auth.is_auth_error());
        assert!(!auth.is_local());

        let transport = RestError::from(TransportError::ConnectionFailed("refused".into()));
        assert!(transport.status().is_none());
    }
}
