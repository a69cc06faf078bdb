//! Tokenizer, tag extractor and command builder for a tag-delimited command
//! language:
//!
//! ```text
//! add n/Speaker B sn/S1404115ASF t/SPEAKER c/1000 pf/Loud Technologies pd/2022-02-23
//! update sn/S1404115ASF c/2000 n/Speaker C
//! ```
//!
//! [`CommandParser::parse_command`] turns one line into a [`Command`]; it never
//! fails, malformed input becomes [`Command::Incorrect`] with a usage message.

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod parser;
pub mod util;

pub use domain::{Command, CommandWord, ErrorKind, ParseError, Tag, UpdateBuilder};
pub use parser::{build_update, extract_arguments, CommandParser};
