use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{service} unavailable: {reason}")]
    Upstream { service: String, reason: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Invalid config value for {field}: {value} ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing configuration: {field}")]
    MissingConfig { field: String },
}

impl ApiError {
    pub fn upstream(service: impl Into<String>, reason: impl std::fmt::Display) -> Self {
        ApiError::Upstream {
            service: service.into(),
            reason: reason.to_string(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::Validation {
            message: message.into(),
        }
    }

    /// True when the failure came from an external collaborator rather than
    /// from the request itself. Handlers map these to 503 or a fallback path.
    pub fn is_upstream(&self) -> bool {
        matches!(self, ApiError::Upstream { .. } | ApiError::Http(_))
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upstream_errors_are_flagged() {
        let err = ApiError::upstream("ml-service", "connection refused");
        assert!(err.is_upstream());
        assert_eq!(err.to_string(), "ml-service unavailable: connection refused");
    }

    #[test]
    fn validation_errors_are_not_upstream() {
        let err = ApiError::validation("message is required");
        assert!(!err.is_upstream());
    }
}
