/// Failure of a single round-trip to the trivia backend
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// Network, DNS or timeout failure before a response arrived
    #[error("{0}")]
    Transport(String),
    /// Non-2xx response; `message` is the body's `error` field when it had one
    #[error("HTTP error! status: {status}")]
    Status { status: u16, message: Option<String> },
    /// 2xx response whose body carried an `error` field
    #[error("{0}")]
    Backend(String),
    /// 2xx response whose body did not match the expected shape
    #[error("invalid response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// Message supplied by the backend itself, if any
    pub fn backend_message(&self) -> Option<&str> {
        match self {
            ApiError::Backend(message) => Some(message),
            ApiError::Status { message, .. } => message.as_deref(),
            ApiError::Transport(_) | ApiError::Decode(_) => None,
        }
    }

    /// User-facing text for a failed `action` ("fetch image", "submit guess").
    pub fn describe(&self, action: &str) -> String {
        match self.backend_message() {
            Some(message) => format!("Error: {}", message),
            None => format!("Failed to {}: {}", action, self),
        }
    }
}
