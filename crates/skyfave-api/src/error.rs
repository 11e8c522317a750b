//! API client error types.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("API unavailable: {0}")]
    Unavailable(String),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Missing request parameter: {0}")]
    MissingParameter(String),

    #[error("Invalid request parameter: {0}")]
    InvalidParameter(String),

    #[error("Invalid request URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("No result for the given query")]
    NoResult,
}

impl ApiError {
    /// Whether this error is retryable (transport-level failures only;
    /// retrying is the caller's policy, the client never retries itself).
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Unavailable(_))
    }

    /// Whether this error indicates a bug in the calling code rather than
    /// a provider or network condition.
    pub fn is_caller_error(&self) -> bool {
        matches!(self, Self::MissingParameter(_) | Self::InvalidParameter(_))
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        Self::Unavailable(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_retryable() {
        assert!(ApiError::Unavailable("timeout".into()).is_retryable());
        assert!(!ApiError::MalformedResponse("bad json".into()).is_retryable());
        assert!(!ApiError::NoResult.is_retryable());
    }

    #[test]
    fn test_is_caller_error() {
        assert!(ApiError::MissingParameter("q".into()).is_caller_error());
        assert!(ApiError::InvalidParameter("empty name".into()).is_caller_error());
        assert!(!ApiError::Unavailable("down".into()).is_caller_error());
    }
}
