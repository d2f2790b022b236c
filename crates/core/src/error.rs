//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// The update engine is total and never produces one of these. They only arise
/// at the edges where items are described from outside data (category tags,
/// item records).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. malformed input).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A category tag did not name any known category.
    #[error("unknown category: {0}")]
    UnknownCategory(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn unknown_category(tag: impl Into<String>) -> Self {
        Self::UnknownCategory(tag.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_include_detail() {
        assert_eq!(
            DomainError::validation("name cannot be empty").to_string(),
            "validation failed: name cannot be empty"
        );
        assert_eq!(
            DomainError::unknown_category("perishable").to_string(),
            "unknown category: perishable"
        );
    }
}
