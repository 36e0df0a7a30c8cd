use thiserror::Error;

/// Errors from talking to the roadmap backend.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ApiError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server returned HTTP {status}{}", suffix(.message))]
    Status { status: u16, message: Option<String> },
    #[error("invalid JSON response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("request worker stopped before replying")]
    Disconnected,
}

fn suffix(message: &Option<String>) -> String {
    message
        .as_deref()
        .map(|m| format!(": {m}"))
        .unwrap_or_default()
}

impl ApiError {
    /// The server's own message when it sent one, otherwise the error text.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Status {
                message: Some(message),
                ..
            } => message.clone(),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_message_prefers_server_text() {
        let err = ApiError::Status {
            status: 401,
            message: Some("Invalid credentials".into()),
        };
        assert_eq!(err.user_message(), "Invalid credentials");
        assert_eq!(err.to_string(), "server returned HTTP 401: Invalid credentials");
    }

    #[test]
    fn user_message_falls_back_to_display() {
        let err = ApiError::Status {
            status: 500,
            message: None,
        };
        assert_eq!(err.user_message(), "server returned HTTP 500");
        assert_eq!(
            ApiError::Disconnected.user_message(),
            "request worker stopped before replying"
        );
    }
}
