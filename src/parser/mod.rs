//! Parser: splits a line into a command word and arguments, extracts tagged
//! values and builds a [`Command`].
//!
//! Control flow for one line:
//!
//! ```text
//! raw line -> split_command_term -> (word, arguments)
//!          -> dispatch on word   -> prepare_add | prepare_view | prepare_delete
//!                                 | extract_arguments + build_update
//!          -> Command
//! ```
//!
//! Every extraction failure is converted into [`Command::Incorrect`] here; callers
//! of [`CommandParser::parse_command`] always get a command back.

mod fixed;
mod scanner;
mod tokenizer;

use regex::Regex;
use tracing::{debug, instrument};

use crate::domain::{
    AddCommand, CheckCommand, Command, CommandWord, DeleteCommand, ErrorKind, ListCommand,
    UpdateBuilder, CHECK_MARKER, DELETE_MARKER,
};

pub use scanner::{extract_arguments, tag_marker_offsets};

/// Compiled patterns for the anchored matches.
///
/// Holds no per-call state; one instance can parse any number of lines, from
/// any number of threads.
#[derive(Debug, Clone)]
pub struct CommandParser {
    basic_regex: Regex,
    add_regex: Regex,
    view_regex: Regex,
    delete_regex: Regex,
}

impl Default for CommandParser {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandParser {
    pub fn new() -> Self {
        Self {
            basic_regex: Regex::new(tokenizer::BASIC_COMMAND_FORMAT)
                .expect("basic command pattern compiles"),
            add_regex: Regex::new(fixed::ADD_COMMAND_FORMAT).expect("add pattern compiles"),
            view_regex: Regex::new(&fixed::single_value_format(CHECK_MARKER, "item_name"))
                .expect("view pattern compiles"),
            delete_regex: Regex::new(&fixed::single_value_format(DELETE_MARKER, "serial_number"))
                .expect("delete pattern compiles"),
        }
    }

    /// Parse one line of user input.
    #[instrument(level = "trace", skip(self))]
    pub fn parse_command(&self, user_input: &str) -> Command {
        if user_input.trim() == CommandWord::List.as_str() {
            return Command::List(ListCommand {
                equipment_type: None,
            });
        }

        let (word, arguments) = match self.split_command_term(user_input) {
            Ok(parts) => parts,
            Err(e) => {
                debug!(error = %e, "no command word");
                return Command::incorrect(e.kind().message());
            }
        };

        let Some(command_word) = CommandWord::from_word(word) else {
            debug!(word, "unknown command word");
            return Command::incorrect(ErrorKind::UnknownCommandWord.message());
        };

        let parsed = match command_word {
            CommandWord::Add => self
                .prepare_add(arguments)
                .map(|args| Command::Add(AddCommand::from_args(args))),
            CommandWord::Check => self
                .prepare_view(arguments)
                .map(|item_name| Command::Check(CheckCommand { item_name })),
            CommandWord::Delete => self
                .prepare_delete(arguments)
                .map(|serial_number| Command::Delete(DeleteCommand { serial_number })),
            CommandWord::Update => extract_arguments(arguments).map(|tokens| build_update(&tokens)),
            CommandWord::List => Ok(Command::List(ListCommand {
                equipment_type: Some(arguments.trim().to_string()),
            })),
        };

        parsed.unwrap_or_else(|e| {
            debug!(error = %e, %command_word, "arguments rejected");
            Command::incorrect(command_word.usage())
        })
    }
}

/// Build an update command from raw `tag/value` tokens.
///
/// Later tokens overwrite earlier ones with the same tag. Unknown tags are
/// reported on the result and skipped. Without a serial number the result is
/// an incorrect command.
pub fn build_update<S: AsRef<str>>(tokens: &[S]) -> Command {
    let mut builder = UpdateBuilder::new();
    for token in tokens {
        builder.apply_token(token.as_ref());
    }
    builder.finish()
}
