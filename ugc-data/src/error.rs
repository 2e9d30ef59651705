//! Error types

use std::fmt;

/// Ways the one-shot data load can fail.
///
/// Every variant is treated the same by the app: logged and swallowed,
/// leaving the chart empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// The request never produced a response (offline, CORS, aborted).
    Network(String),
    /// The server answered with a non-success status code.
    Status(u16),
    /// The response body could not be read as text.
    Body(String),
    /// The body was not a JSON object of date keys to counts.
    Parse(String),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Network(msg) => write!(f, "Network error: {}", msg),
            LoadError::Status(code) => write!(f, "Unexpected HTTP status: {}", code),
            LoadError::Body(msg) => write!(f, "Failed to read response body: {}", msg),
            LoadError::Parse(msg) => write!(f, "Failed to parse response: {}", msg),
        }
    }
}

impl std::error::Error for LoadError {}

impl From<serde_json::Error> for LoadError {
    fn from(value: serde_json::Error) -> Self {
        LoadError::Parse(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::LoadError;

    #[test]
    fn test_display() {
        assert_eq!(LoadError::Status(503).to_string(), "Unexpected HTTP status: 503");
        assert_eq!(
            LoadError::Network("offline".to_string()).to_string(),
            "Network error: offline"
        );
    }

    #[test]
    fn test_from_serde_error() {
        let err: LoadError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert!(matches!(err, LoadError::Parse(_)));
    }
}
