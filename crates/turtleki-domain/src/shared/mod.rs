use serde::{Deserialize, Serialize};

pub mod date;

/// Error codes for structured error handling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    // Preconditions (1xxx)
    NotSeeded = 1001,

    // Validation (2xxx)
    ValidationError = 2001,
    InvalidInput = 2002,

    // Data & Persistence (3xxx)
    RepositoryError = 3001,
    DataIntegrityError = 3002,
    SerializationError = 3003,

    // Infrastructure (4xxx)
    InfrastructureError = 4001,
}

impl ErrorCode {
    /// Get error code as integer
    pub fn code(&self) -> u16 {
        *self as u16
    }

    /// Get error severity
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            ErrorCode::ValidationError | ErrorCode::InvalidInput => ErrorSeverity::Info,

            ErrorCode::RepositoryError | ErrorCode::SerializationError => ErrorSeverity::Warning,

            ErrorCode::NotSeeded
            | ErrorCode::DataIntegrityError
            | ErrorCode::InfrastructureError => ErrorSeverity::Error,
        }
    }

    /// Check if error is recoverable by the caller
    pub fn is_recoverable(&self) -> bool {
        matches!(self, ErrorCode::ValidationError | ErrorCode::InvalidInput)
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
    Critical,
}

#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("State not seeded: {0}")]
    NotSeeded(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Repository error: {0}")]
    Repository(String),

    #[error("Data integrity error: {0}")]
    DataIntegrity(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Infrastructure error: {0}")]
    Infrastructure(String),
}

impl DomainError {
    /// Get error code
    pub fn code(&self) -> ErrorCode {
        match self {
            DomainError::NotSeeded(_) => ErrorCode::NotSeeded,
            DomainError::Validation(_) => ErrorCode::ValidationError,
            DomainError::InvalidInput(_) => ErrorCode::InvalidInput,
            DomainError::Repository(_) => ErrorCode::RepositoryError,
            DomainError::DataIntegrity(_) => ErrorCode::DataIntegrityError,
            DomainError::Serialization(_) => ErrorCode::SerializationError,
            DomainError::Infrastructure(_) => ErrorCode::InfrastructureError,
        }
    }

    /// Get error message
    pub fn message(&self) -> &str {
        match self {
            DomainError::NotSeeded(msg)
            | DomainError::Validation(msg)
            | DomainError::InvalidInput(msg)
            | DomainError::Repository(msg)
            | DomainError::DataIntegrity(msg)
            | DomainError::Serialization(msg)
            | DomainError::Infrastructure(msg) => msg,
        }
    }

    /// Get error severity
    pub fn severity(&self) -> ErrorSeverity {
        self.code().severity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_codes_map_to_severity() {
        let err = DomainError::NotSeeded("player state missing".to_string());
        assert_eq!(err.code(), ErrorCode::NotSeeded);
        assert_eq!(err.severity(), ErrorSeverity::Error);
        assert!(!err.code().is_recoverable());
    }

    #[test]
    fn invalid_input_is_recoverable() {
        let err = DomainError::InvalidInput("malformed payload".to_string());
        assert!(err.code().is_recoverable());
        assert_eq!(err.severity(), ErrorSeverity::Info);
        assert_eq!(err.message(), "malformed payload");
    }
}
