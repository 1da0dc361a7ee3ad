//! API error types with HTTP status code mapping

use serde::Deserialize;

/// Error codes for failed task-source requests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Token missing, expired or revoked (401)
    Unauthorized,
    /// Token lacks access to the resource (403)
    Forbidden,
    /// Resource does not exist (404)
    NotFound,
    /// Too many requests (429)
    RateLimited,
    /// Any other non-success status
    Http(u16),
    /// Request never produced a response (DNS, TLS, timeout, ...)
    Transport,
    /// Response body did not match the expected shape
    Decode,
}

impl ErrorCode {
    /// Map an HTTP status to an error code
    #[must_use]
    pub const fn from_status(status: u16) -> Self {
        match status {
            401 => Self::Unauthorized,
            403 => Self::Forbidden,
            404 => Self::NotFound,
            429 => Self::RateLimited,
            other => Self::Http(other),
        }
    }

    /// Get the HTTP status code for this error, if it came from a response
    #[must_use]
    pub const fn status_code(self) -> Option<u16> {
        match self {
            Self::Unauthorized => Some(401),
            Self::Forbidden => Some(403),
            Self::NotFound => Some(404),
            Self::RateLimited => Some(429),
            Self::Http(status) => Some(status),
            Self::Transport | Self::Decode => None,
        }
    }

    /// Get the error code string
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unauthorized => "UNAUTHORIZED",
            Self::Forbidden => "FORBIDDEN",
            Self::NotFound => "NOT_FOUND",
            Self::RateLimited => "RATE_LIMITED",
            Self::Http(_) => "HTTP_ERROR",
            Self::Transport => "TRANSPORT_ERROR",
            Self::Decode => "DECODE_ERROR",
        }
    }
}

/// Failed request to the task source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
}

impl ApiError {
    /// Create an error with an explicit code
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Create an error from a non-success HTTP response
    #[must_use]
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        Self::new(ErrorCode::from_status(status), message)
    }

    /// Create a not found error
    #[must_use]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::NotFound, message)
    }

    /// Create a transport error
    #[must_use]
    pub fn transport(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Transport, message)
    }

    /// Create a decode error
    #[must_use]
    pub fn decode(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Decode, message)
    }

    /// Whether the service rejected the id or the credential
    #[must_use]
    pub const fn is_not_found_or_permission(&self) -> bool {
        matches!(
            self.code,
            ErrorCode::NotFound | ErrorCode::Forbidden | ErrorCode::Unauthorized
        )
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.code.status_code() {
            Some(status) => write!(f, "{} ({status}): {}", self.code.as_str(), self.message),
            None => write!(f, "{}: {}", self.code.as_str(), self.message),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::decode(err.to_string())
        } else if let Some(status) = err.status() {
            Self::from_status(status.as_u16(), err.to_string())
        } else {
            Self::transport(err.to_string())
        }
    }
}

/// Error body returned by the service: `{"errors": [{"message": ...}]}`
#[derive(Debug, Default, Deserialize)]
pub struct ErrorBody {
    /// Individual error entries
    #[serde(default)]
    pub errors: Vec<ErrorEntry>,
}

/// One entry of an [`ErrorBody`]
#[derive(Debug, Deserialize)]
pub struct ErrorEntry {
    /// Error message
    #[serde(default)]
    pub message: String,
}

impl ErrorBody {
    /// Join all messages, or `None` when the body carried none
    #[must_use]
    pub fn joined(&self) -> Option<String> {
        let messages: Vec<&str> = self
            .errors
            .iter()
            .map(|e| e.message.as_str())
            .filter(|m| !m.is_empty())
            .collect();
        (!messages.is_empty()).then(|| messages.join("; "))
    }
}
