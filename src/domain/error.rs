//! Domain-level errors (no external dependencies)

use thiserror::Error;

use crate::domain::entities::CommandWord;
use crate::domain::messages::ErrorKind;

/// Extraction-stage failures.
///
/// These never leave the dispatcher: [`crate::parser::CommandParser::parse_command`]
/// turns each of them into an incorrect command carrying a usage message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Could not find space delimiter between command and arguments!")]
    DelimiterMissing,

    #[error("{} command values are incomplete or missing!", .0.label())]
    ArityMismatch(CommandWord),

    #[error("No parameters found!")]
    NoParametersFound,
}

impl ParseError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ParseError::DelimiterMissing => ErrorKind::DelimiterMissing,
            ParseError::ArityMismatch(_) => ErrorKind::ArityMismatch,
            ParseError::NoParametersFound => ErrorKind::NoParametersFound,
        }
    }
}

/// Result type for extraction operations.
pub type ParseResult<T> = Result<T, ParseError>;
