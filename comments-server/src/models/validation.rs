//! Validation error types

use std::fmt;

/// Validation error for domain models and request parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Comment name is empty
    NameRequired,

    /// Comment name exceeds maximum length (in characters)
    NameTooLong { max: usize },

    /// Comment content is empty
    ContentRequired,

    /// Required request parameter is absent
    MissingParam { field: &'static str },

    /// Request parameter doesn't satisfy its constraint
    InvalidParam { field: &'static str, reason: &'static str },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NameRequired => write!(f, "name cannot be empty"),
            Self::NameTooLong { max } => {
                write!(f, "name exceeds maximum length of {} characters", max)
            }
            Self::ContentRequired => write!(f, "content cannot be empty"),
            Self::MissingParam { field } => write!(f, "missing parameter {}", field),
            Self::InvalidParam { field, reason } => write!(f, "{} {}", field, reason),
        }
    }
}

impl std::error::Error for ValidationError {}
