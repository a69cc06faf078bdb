//! Command word / argument split.

use tracing::instrument;

use crate::domain::{ParseError, ParseResult};
use crate::parser::CommandParser;

/// Command word, at least one whitespace character, then the arguments.
pub(crate) const BASIC_COMMAND_FORMAT: &str = r"(?s)^(?P<command_word>\S+)\s+(?P<arguments>.+)$";

impl CommandParser {
    /// Split a line into its command word and argument text.
    ///
    /// The line is trimmed first and must match as a whole: a command word, a
    /// whitespace gap, then at least one more character.
    ///
    /// # Errors
    /// [`ParseError::DelimiterMissing`] for a single word, or when command word
    /// and arguments run together.
    #[instrument(level = "trace", skip(self))]
    pub fn split_command_term<'a>(&self, user_input: &'a str) -> ParseResult<(&'a str, &'a str)> {
        let caps = self
            .basic_regex
            .captures(user_input.trim())
            .ok_or(ParseError::DelimiterMissing)?;
        match (caps.name("command_word"), caps.name("arguments")) {
            (Some(word), Some(arguments)) => Ok((word.as_str(), arguments.as_str())),
            _ => Err(ParseError::DelimiterMissing),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("add n/x", ("add", "n/x"))]
    #[case("  list   SPEAKER  ", ("list", "SPEAKER"))]
    #[case("update\tsn/A  n/B", ("update", "sn/A  n/B"))]
    fn test_split(#[case] input: &str, #[case] expected: (&str, &str)) {
        assert_eq!(CommandParser::new().split_command_term(input), Ok(expected));
    }

    #[rstest]
    #[case("addfoo")]
    #[case("add")]
    #[case("   ")]
    #[case("")]
    fn test_split_rejects(#[case] input: &str) {
        assert_eq!(
            CommandParser::new().split_command_term(input),
            Err(ParseError::DelimiterMissing)
        );
    }
}
