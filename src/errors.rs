use std::fmt;

/// Main error type for the aperture-notify client
#[derive(Debug)]
pub enum NotifyError {
    // Network and HTTP client errors
    NetworkTimeout,
    NetworkConnection(String),
    HttpClient(String),
    InvalidUrl(String),

    // Remote service errors
    ServerError { status: u16, message: String },
    MalformedResponse(String),

    // Serialization and parsing errors
    JsonParsing(String),
    JsonSerialization(String),

    // Configuration and setup errors
    ConfigurationError(String),
    MissingEnvironmentVariable(String),
}

impl fmt::Display for NotifyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotifyError::NetworkTimeout => write!(f, "Network request timed out"),
            NotifyError::NetworkConnection(msg) => write!(f, "Network connection error: {}", msg),
            NotifyError::HttpClient(msg) => write!(f, "HTTP client error: {}", msg),
            NotifyError::InvalidUrl(msg) => write!(f, "Invalid URL: {}", msg),

            NotifyError::ServerError { status, message } => {
                write!(f, "Server returned {}: {}", status, message)
            }
            NotifyError::MalformedResponse(msg) => write!(f, "Malformed response: {}", msg),

            NotifyError::JsonParsing(msg) => write!(f, "JSON parsing error: {}", msg),
            NotifyError::JsonSerialization(msg) => write!(f, "JSON serialization error: {}", msg),

            NotifyError::ConfigurationError(msg) => write!(f, "Configuration error: {}", msg),
            NotifyError::MissingEnvironmentVariable(var) => {
                write!(f, "Missing environment variable: {}", var)
            }
        }
    }
}

impl std::error::Error for NotifyError {}

// Convenience type alias for Results
pub type NotifyResult<T> = Result<T, NotifyError>;

// Conversion implementations for common error types
impl From<reqwest::Error> for NotifyError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            NotifyError::NetworkTimeout
        } else if err.is_connect() {
            NotifyError::NetworkConnection(err.to_string())
        } else if err.is_decode() {
            NotifyError::MalformedResponse(err.to_string())
        } else {
            NotifyError::HttpClient(err.to_string())
        }
    }
}

impl From<serde_json::Error> for NotifyError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_syntax() || err.is_data() {
            NotifyError::JsonParsing(err.to_string())
        } else {
            NotifyError::JsonSerialization(err.to_string())
        }
    }
}

// Helper functions for creating common errors
impl NotifyError {
    pub fn server_error(status: u16, message: impl Into<String>) -> Self {
        NotifyError::ServerError {
            status,
            message: message.into(),
        }
    }

    pub fn malformed(msg: impl Into<String>) -> Self {
        NotifyError::MalformedResponse(msg.into())
    }

    pub fn configuration(msg: impl Into<String>) -> Self {
        NotifyError::ConfigurationError(msg.into())
    }
}
