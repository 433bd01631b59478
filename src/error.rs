use std::fmt;

/// Custom error type for Foreman inventory operations
#[derive(Debug)]
pub enum ForemanError {
    /// HTTP request failed
    Http(reqwest::Error),
    /// API returned an error response
    Api { status: u16, message: String },
    /// Foreman API could not be reached at startup
    Unreachable(String),
    /// Settings file missing values or unreadable
    Config(String),
    /// JSON parsing error
    Json(String),
}

impl fmt::Display for ForemanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ForemanError::Http(e) => write!(f, "HTTP request failed: {}", e),
            ForemanError::Api { status, message } => {
                write!(f, "API error (status {}): {}", status, message)
            }
            ForemanError::Unreachable(msg) => {
                write!(f, "It looks like Foreman's API is unreachable: {}", msg)
            }
            ForemanError::Config(msg) => write!(f, "Configuration error: {}", msg),
            ForemanError::Json(msg) => write!(f, "JSON error: {}", msg),
        }
    }
}

impl std::error::Error for ForemanError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ForemanError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ForemanError {
    fn from(err: reqwest::Error) -> Self {
        ForemanError::Http(err)
    }
}

impl From<serde_json::Error> for ForemanError {
    fn from(err: serde_json::Error) -> Self {
        ForemanError::Json(err.to_string())
    }
}

/// Result type alias for Foreman operations
pub type Result<T> = std::result::Result<T, ForemanError>;
