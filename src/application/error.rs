//! Application-level errors

use thiserror::Error;

/// Failures while executing a parsed command or loading settings.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApplicationError {
    #[error("equipment with serial number {0} already exists")]
    DuplicateSerialNumber(String),

    #[error("no equipment with serial number {0}")]
    EquipmentNotFound(String),

    #[error("invalid cost `{value}`: {reason}")]
    InvalidCost { value: String, reason: String },

    #[error("config error: {message}")]
    Config { message: String },
}

/// Result type for application layer operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
