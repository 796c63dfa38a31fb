//! Errors from the jobs service and their user-facing messages.

use shared_types::ErrorResponse;

/// The synchronizer operation an error belongs to. Decides which
/// fallback text the user sees when the service gives us nothing better.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Load,
    Create,
    Update,
    Delete,
}

impl Operation {
    pub fn fallback_message(&self) -> &'static str {
        match self {
            Operation::Load => "Failed to load jobs",
            Operation::Create => "Failed to create job",
            Operation::Update => "Failed to update job",
            Operation::Delete => "Failed to delete job",
        }
    }

    fn status_prefix(&self) -> &'static str {
        match self {
            Operation::Load | Operation::Create => "Request",
            Operation::Update => "Update",
            Operation::Delete => "Delete",
        }
    }
}

/// Errors from the jobs REST API layer.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// No response was received (connection refused, DNS, TLS, ...).
    #[error("HTTP request failed: {0}")]
    Transport(String),

    /// The service answered with a non-2xx status code.
    #[error("jobs service error ({status}): {body}")]
    Status {
        status: u16,
        /// Raw response body, possibly empty.
        body: String,
    },

    /// The response arrived but its body was not the expected JSON.
    #[error("failed to decode response: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ApiError::Decode(e.to_string())
        } else {
            ApiError::Transport(e.to_string())
        }
    }
}

impl ApiError {
    /// Normalise into the single line shown to the user.
    ///
    /// A message from the response body wins, then one synthesised from the
    /// status code, then the operation's generic fallback.
    pub fn user_message(&self, operation: Operation) -> String {
        match self {
            ApiError::Status { status, body } => body_message(body).unwrap_or_else(|| {
                format!("{} failed with status {}", operation.status_prefix(), status)
            }),
            ApiError::Transport(_) | ApiError::Decode(_) => {
                operation.fallback_message().to_string()
            }
        }
    }
}

fn body_message(body: &str) -> Option<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }

    // {"error": "..."} or {"message": "..."}; anything else is shown verbatim
    if let Ok(response) = serde_json::from_str::<ErrorResponse>(trimmed) {
        if !response.error.trim().is_empty() {
            return Some(response.error.trim().to_string());
        }
    }
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(trimmed) {
        if let Some(message) = value.get("message").and_then(|v| v.as_str()) {
            if !message.trim().is_empty() {
                return Some(message.trim().to_string());
            }
        }
    }

    Some(trimmed.to_string())
}
