//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Session has no questions")]
    EmptySession,

    #[error("Invalid session transition: {0}")]
    InvalidTransition(String),

    #[error("Invalid question: {0}")]
    InvalidQuestion(String),
}

impl DomainError {
    /// Check if this error rejects a state-machine advance
    pub fn is_invalid_transition(&self) -> bool {
        matches!(self, DomainError::InvalidTransition(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_session_display() {
        let error = DomainError::EmptySession;
        assert_eq!(error.to_string(), "Session has no questions");
    }

    #[test]
    fn test_invalid_transition_check() {
        assert!(DomainError::InvalidTransition("done".to_string()).is_invalid_transition());
        assert!(!DomainError::EmptySession.is_invalid_transition());
        assert!(!DomainError::InvalidQuestion("test".to_string()).is_invalid_transition());
    }
}
