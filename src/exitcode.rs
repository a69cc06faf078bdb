//! Standard exit codes (BSD sysexits.h compatible)

/// Command line usage error, including a line that does not parse
pub const USAGE: i32 = 64;

/// Data format error: a parsed command the inventory rejected
pub const DATAERR: i32 = 65;

/// Input/output error
pub const IOERR: i32 = 74;

/// Configuration error
pub const CONFIG: i32 = 78;
