/// Domain-level failures detected before or around a storage operation.
///
/// Every variant carries the client-facing message. The HTTP layer maps each
/// variant to a status code via [`CoreError::kind`] and to a stable
/// machine-readable code via [`CoreError::code`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    /// The request body was absent or an empty object.
    #[error("{0}")]
    EmptyBody(String),

    /// A required body field was absent or falsy.
    #[error("{0}")]
    MissingFields(String),

    /// An identifier failed the ID-shape check.
    #[error("{0}")]
    InvalidId(String),

    /// A field had the wrong type or an out-of-range value.
    #[error("{0}")]
    Validation(String),

    /// A required query parameter was absent.
    #[error("{0}")]
    MissingQuery(String),

    /// A query parameter had a value outside its allowed set.
    #[error("{0}")]
    InvalidQuery(String),

    /// A value that must be unique is already taken.
    #[error("{0}")]
    DuplicateName(String),

    /// A related record that may exist only once is already present.
    #[error("{0}")]
    AlreadyExists(String),

    /// No record exists for the given identifier or reference.
    #[error("{0}")]
    NotFound(String),

    /// Programming or invariant error. The message is never sent to clients.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Coarse classification used to pick an HTTP status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed or missing input (400).
    Validation,
    /// Application-level uniqueness or pre-existing relation (400).
    Conflict,
    /// Missing record (404).
    NotFound,
    /// Unexpected failure (500).
    Internal,
}

impl CoreError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyBody(_)
            | Self::MissingFields(_)
            | Self::InvalidId(_)
            | Self::Validation(_)
            | Self::MissingQuery(_)
            | Self::InvalidQuery(_) => ErrorKind::Validation,
            Self::DuplicateName(_) | Self::AlreadyExists(_) => ErrorKind::Conflict,
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::Internal(_) => ErrorKind::Internal,
        }
    }

    /// Stable error code reported to clients as `errorCode`.
    pub fn code(&self) -> &'static str {
        match self {
            Self::EmptyBody(_) => "EMPTY_BODY",
            Self::MissingFields(_) => "MISSING_FIELDS",
            Self::InvalidId(_) => "INVALID_ID",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::MissingQuery(_) => "MISSING_QUERY",
            Self::InvalidQuery(_) => "INVALID_QUERY",
            Self::DuplicateName(_) => "DUPLICATE_NAME",
            Self::AlreadyExists(_) => "ALREADY_EXISTS",
            Self::NotFound(_) => "NOT_FOUND",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_the_bare_message() {
        let err = CoreError::NotFound("Project not found".into());
        assert_eq!(err.to_string(), "Project not found");
    }

    #[test]
    fn conflicts_are_classified_separately_from_validation() {
        assert_eq!(
            CoreError::DuplicateName("x".into()).kind(),
            ErrorKind::Conflict
        );
        assert_eq!(
            CoreError::AlreadyExists("x".into()).kind(),
            ErrorKind::Conflict
        );
        assert_eq!(CoreError::InvalidId("x".into()).kind(), ErrorKind::Validation);
    }

    #[test]
    fn codes_are_screaming_snake_case() {
        assert_eq!(CoreError::EmptyBody(String::new()).code(), "EMPTY_BODY");
        assert_eq!(CoreError::InvalidQuery(String::new()).code(), "INVALID_QUERY");
    }
}
