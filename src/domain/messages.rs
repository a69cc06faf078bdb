//! User-facing message table
//!
//! Every message the dispatcher can hand back inside an incorrect command lives
//! here, keyed by [`ErrorKind`], so it can be checked without driving the parser.

use std::fmt;

pub const MESSAGE_MISSING_DELIMITER: &str =
    "Please split your command into arguments with each argument separated by spaces!";
pub const MESSAGE_INCORRECT_FORMAT: &str = "Incorrect Command format!";
pub const MESSAGE_SERIAL_REQUIRED: &str = "Serial Number is required to update an item!";
pub const MESSAGE_VALUES_INCOMPLETE: &str = "Command values are incomplete or missing!";
pub const MESSAGE_NO_PARAMETERS: &str = "No parameters found!";
pub const MESSAGE_UNRECOGNIZED_TAG: &str = "Unrecognised Tag";

pub const ADD_DESCRIPTION: &str = ": Adds a piece of equipment to the inventory.\n\
    Parameters: n/ITEM_NAME sn/SERIAL_NUMBER t/TYPE c/COST pf/PURCHASED_FROM pd/PURCHASED_DATE\n\
    Example: add n/Speaker B sn/S1404115ASF t/SPEAKER c/1000 pf/Loud Technologies pd/2022-02-23";
pub const CHECK_DESCRIPTION: &str = ": Shows all equipment with the given name.\n\
    Parameters: n/ITEM_NAME\n\
    Example: check n/Speaker B";
pub const DELETE_DESCRIPTION: &str = ": Deletes the equipment with the given serial number.\n\
    Parameters: s/SERIAL_NUMBER\n\
    Example: delete s/S1404115ASF";
pub const UPDATE_DESCRIPTION: &str = ": Changes the given fields of the equipment with the given serial number.\n\
    Parameters: sn/SERIAL_NUMBER [n/ITEM_NAME] [t/TYPE] [c/COST] [pf/PURCHASED_FROM] [pd/PURCHASED_DATE]\n\
    Example: update sn/S1404115ASF n/Speaker C c/2000";
pub const LIST_DESCRIPTION: &str = ": Lists all equipment, or only the equipment of one type.\n\
    Parameters: [TYPE]\n\
    Example: list SPEAKER";

/// Every way a line can fail to become a usable command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// No whitespace between the command word and its arguments.
    DelimiterMissing,
    /// Fixed-arity argument text does not match the required tag sequence.
    ArityMismatch,
    /// Variable-arity argument text contains no tag at all.
    NoParametersFound,
    /// Update without a serial number.
    MissingRequiredField,
    UnknownCommandWord,
    /// Update tag outside the known set; reported, never fatal.
    UnrecognizedTag,
}

impl ErrorKind {
    pub const ALL: [ErrorKind; 6] = [
        ErrorKind::DelimiterMissing,
        ErrorKind::ArityMismatch,
        ErrorKind::NoParametersFound,
        ErrorKind::MissingRequiredField,
        ErrorKind::UnknownCommandWord,
        ErrorKind::UnrecognizedTag,
    ];

    pub fn message(self) -> &'static str {
        match self {
            ErrorKind::DelimiterMissing => MESSAGE_MISSING_DELIMITER,
            ErrorKind::ArityMismatch => MESSAGE_VALUES_INCOMPLETE,
            ErrorKind::NoParametersFound => MESSAGE_NO_PARAMETERS,
            ErrorKind::MissingRequiredField => MESSAGE_SERIAL_REQUIRED,
            ErrorKind::UnknownCommandWord => MESSAGE_INCORRECT_FORMAT,
            ErrorKind::UnrecognizedTag => MESSAGE_UNRECOGNIZED_TAG,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_every_kind_has_a_distinct_message() {
        let messages: HashSet<&str> = ErrorKind::ALL.iter().map(|k| k.message()).collect();
        assert_eq!(messages.len(), ErrorKind::ALL.len());
        assert!(messages.iter().all(|m| !m.is_empty()));
    }

    #[test]
    fn test_descriptions_start_with_separator() {
        for description in [
            ADD_DESCRIPTION,
            CHECK_DESCRIPTION,
            DELETE_DESCRIPTION,
            UPDATE_DESCRIPTION,
            LIST_DESCRIPTION,
        ] {
            assert!(description.starts_with(": "), "{description}");
        }
    }
}
