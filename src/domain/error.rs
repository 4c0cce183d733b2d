//! Domain errors

use thiserror::Error;

/// Domain-level error types.
///
/// Everything except `Storage` is an expected, user-triggerable outcome and
/// maps to a 4xx response at the HTTP layer.
#[derive(Debug, Clone, Error)]
pub enum DomainError {
    #[error("Invalid interval: {0}")]
    InvalidInterval(String),

    #[error("Start time is in the past")]
    PastStartTime,

    #[error("Slot {slot_id} is already booked for the requested time")]
    SlotUnavailable { slot_id: i32 },

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Not found: {entity} with {field}={value}")]
    NotFound {
        entity: &'static str,
        field: &'static str,
        value: String,
    },

    #[error("Validation: {0}")]
    Validation(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
