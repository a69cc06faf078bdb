//! CLI-level errors (wraps application errors)

use thiserror::Error;

use crate::application::ApplicationError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Application(#[from] ApplicationError),

    #[error("read input: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Usage(String),

    #[error("{failed} of {total} lines failed")]
    Batch { failed: usize, total: usize },
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Usage(_) => crate::exitcode::USAGE,
            CliError::Batch { .. } => crate::exitcode::DATAERR,
            CliError::Io(_) => crate::exitcode::IOERR,
            CliError::Application(e) => match e {
                ApplicationError::Config { .. } => crate::exitcode::CONFIG,
                ApplicationError::DuplicateSerialNumber(_)
                | ApplicationError::EquipmentNotFound(_)
                | ApplicationError::InvalidCost { .. } => crate::exitcode::DATAERR,
            },
        }
    }
}
