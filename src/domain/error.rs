use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    /// A required request field was absent or empty. Carries the client-facing message.
    #[error("{0}")]
    MissingField(String),

    /// The `type` selector did not name a known template. Carries the client-facing message.
    #[error("{0}")]
    InvalidType(String),

    #[error("Upstream error: {0}")]
    Upstream(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The request body could not be read as a JSON value with fields.
    #[error("Malformed request body: {0}")]
    MalformedBody(String),
}

impl DomainError {
    pub fn missing_field(msg: impl Into<String>) -> Self {
        Self::MissingField(msg.into())
    }

    pub fn invalid_type(msg: impl Into<String>) -> Self {
        Self::InvalidType(msg.into())
    }

    pub fn upstream(msg: impl Into<String>) -> Self {
        Self::Upstream(msg.into())
    }

    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn malformed_body(msg: impl Into<String>) -> Self {
        Self::MalformedBody(msg.into())
    }

    /// Errors caused by the request itself rather than by the backend.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::MissingField(_) | Self::InvalidType(_) | Self::InvalidInput(_)
        )
    }

    pub fn is_upstream(&self) -> bool {
        matches!(self, Self::Upstream(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_display_their_message_verbatim() {
        let err = DomainError::missing_field("Type and content are required");
        assert_eq!(err.to_string(), "Type and content are required");
        assert!(err.is_validation());

        let err = DomainError::invalid_type("Invalid text processing type");
        assert_eq!(err.to_string(), "Invalid text processing type");
        assert!(err.is_validation());
    }

    #[test]
    fn malformed_body_is_not_a_validation_error() {
        let err = DomainError::malformed_body("expected value at line 1 column 1");
        assert!(!err.is_validation());
        assert!(!err.is_upstream());
    }

    #[test]
    fn upstream_errors_are_not_validation_errors() {
        let err = DomainError::upstream("connection refused");
        assert!(err.is_upstream());
        assert!(!err.is_validation());
    }
}
