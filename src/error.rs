use thiserror::Error;

/// Failure taxonomy for collection mutations. Every variant is recovered at
/// the point of the user action and surfaced as a message; none are fatal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AdminError {
    /// Required field missing or value out of range.
    #[error("{field}: {message}")]
    Validation { field: String, message: String },

    /// Delete or deactivate attempted on a default or self-referential record.
    #[error("{reason}")]
    Protected { id: String, reason: String },

    /// Operation by an id absent from the collection.
    #[error("record '{id}' not found")]
    NotFound { id: String },
}

impl AdminError {
    pub fn validation(field: &str, message: &str) -> Self {
        AdminError::Validation {
            field: field.to_string(),
            message: message.to_string(),
        }
    }

    pub fn protected(id: &str, reason: &str) -> Self {
        AdminError::Protected {
            id: id.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn not_found(id: &str) -> Self {
        AdminError::NotFound { id: id.to_string() }
    }

    pub fn is_protected(&self) -> bool {
        matches!(self, AdminError::Protected { .. })
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, AdminError::NotFound { .. })
    }
}
