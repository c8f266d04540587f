use thiserror::Error;

/// Error type returned by service functions.
///
/// Every variant carries caller-facing messages; none of them is raised as a
/// panic.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// The request broke one or more validation rules.
    #[error("{}", .0.join(" "))]
    Validation(Vec<String>),
    /// A business rule rejected the request, e.g. a duplicate product code.
    #[error("{0}")]
    Conflict(String),
    /// A referenced resource does not exist.
    #[error("{0}")]
    NotFound(String),
    /// The store failed unexpectedly.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ServiceError {
    /// The messages describing this failure.
    pub fn messages(&self) -> Vec<String> {
        match self {
            ServiceError::Validation(messages) => messages.clone(),
            other => vec![other.to_string()],
        }
    }
}

/// Convenient alias for results returned from service functions.
pub type ServiceResult<T> = Result<T, ServiceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_messages_join_with_a_space() {
        let err = ServiceError::Validation(vec!["First.".into(), "Second.".into()]);
        assert_eq!(err.to_string(), "First. Second.");
        assert_eq!(err.messages().len(), 2);
    }

    #[test]
    fn internal_errors_carry_the_store_text() {
        let err = ServiceError::Internal("disk I/O error".into());
        assert_eq!(err.messages(), vec!["Internal error: disk I/O error".to_string()]);
    }
}
