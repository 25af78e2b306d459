//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// All variants here are deterministic, expected business failures the request
/// layer renders back to the actor. Infrastructure failures belong elsewhere
/// (see `hireflow-service`).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A lifecycle event was requested from a status it is not legal in, or
    /// the status moved concurrently before the write landed.
    #[error("transition '{event}' is not allowed from status '{status}'")]
    InvalidTransition { event: String, status: String },

    /// Publish was requested but required content fields are blank.
    #[error("not publishable, missing fields: {}", missing.join(", "))]
    NotPublishable { missing: Vec<String> },

    /// A value failed validation (e.g. malformed or blank input).
    #[error("validation failed: {0}")]
    Validation(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// The record does not exist — or belongs to another tenant. The two are
    /// deliberately indistinguishable so existence never leaks across tenants.
    #[error("not found")]
    NotFound,

    /// The actor lacks permission for this action on an in-tenant record.
    #[error("unauthorized")]
    Unauthorized,

    /// Template deletion refused: the template has been used too many times.
    #[error("template used {usage_count} times, deletion limit is {limit}")]
    UsageGuard { usage_count: u64, limit: u64 },
}

impl DomainError {
    pub fn invalid_transition(
        event: impl core::fmt::Display,
        status: impl core::fmt::Display,
    ) -> Self {
        Self::InvalidTransition {
            event: event.to_string(),
            status: status.to_string(),
        }
    }

    pub fn not_publishable(missing: Vec<String>) -> Self {
        Self::NotPublishable { missing }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }

    pub fn unauthorized() -> Self {
        Self::Unauthorized
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_transition_names_event_and_status() {
        let err = DomainError::invalid_transition("close", "draft");
        assert_eq!(
            err.to_string(),
            "transition 'close' is not allowed from status 'draft'"
        );
    }

    #[test]
    fn not_publishable_lists_missing_fields() {
        let err =
            DomainError::not_publishable(vec!["title".to_string(), "description".to_string()]);
        assert_eq!(
            err.to_string(),
            "not publishable, missing fields: title, description"
        );
    }
}
