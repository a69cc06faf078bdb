//! Fixed-arity extraction for `add`, `check` and `delete`.

use regex::Captures;
use tracing::{debug, instrument};

use crate::domain::{CommandWord, ParseError, ParseResult, Tag, ADD_ARITY};
use crate::parser::scanner::tag_marker_offsets;
use crate::parser::CommandParser;

pub(crate) const ADD_COMMAND_FORMAT: &str = concat!(
    r"(?s)^n/(?P<item_name>.+?)\s+",
    r"sn/(?P<serial_number>.+?)\s+",
    r"t/(?P<equipment_type>.+?)\s+",
    r"c/(?P<cost>.+?)\s+",
    r"pf/(?P<purchased_from>.+?)\s+",
    r"pd/(?P<purchased_date>.+)$",
);

/// Anchored `<marker>/<value>` pattern for the single-value commands.
pub(crate) fn single_value_format(marker: &str, group: &str) -> String {
    format!(r"(?s)^{marker}/(?P<{group}>.+)$")
}

/// Trimmed value of capture group `index`, rejecting blank values.
fn clean_value(caps: &Captures<'_>, index: usize, command_word: CommandWord) -> ParseResult<String> {
    let value = caps
        .get(index)
        .map(|m| m.as_str().trim())
        .ok_or(ParseError::ArityMismatch(command_word))?;
    if value.is_empty() {
        debug!(index, "blank value");
        return Err(ParseError::ArityMismatch(command_word));
    }
    Ok(value.to_string())
}

/// First known tag name that appears as a marker inside `value`, past its start.
///
/// Unknown names (`w/`, `ab/`) are ordinary text in a fixed-arity value.
fn stray_tag(value: &str) -> Option<&str> {
    tag_marker_offsets(value)
        .into_iter()
        .filter(|&offset| offset > 0)
        .filter_map(|offset| value[offset..].split_once('/').map(|(name, _)| name))
        .find(|name| Tag::from_marker(name).is_some())
}

impl CommandParser {
    /// Values of an `add` command, in the order
    /// name, serial number, type, cost, purchased-from, purchased-date.
    ///
    /// All six tags must be present, in exactly that order, and no other known
    /// tag may follow. Values are kept as raw strings.
    ///
    /// # Errors
    /// [`ParseError::ArityMismatch`] when the text does not have that shape.
    #[instrument(level = "trace", skip(self))]
    pub fn prepare_add(&self, arguments: &str) -> ParseResult<[String; ADD_ARITY]> {
        let caps = self
            .add_regex
            .captures(arguments.trim())
            .ok_or(ParseError::ArityMismatch(CommandWord::Add))?;
        // group 0 is the whole match
        if caps.len() - 1 != ADD_ARITY {
            return Err(ParseError::ArityMismatch(CommandWord::Add));
        }
        let values = (1..=ADD_ARITY)
            .map(|i| clean_value(&caps, i, CommandWord::Add))
            .collect::<ParseResult<Vec<String>>>()?;
        if let Some(tag) = values.iter().find_map(|value| stray_tag(value)) {
            debug!(tag, "extra or out-of-order tag inside add value");
            return Err(ParseError::ArityMismatch(CommandWord::Add));
        }
        values
            .try_into()
            .map_err(|_| ParseError::ArityMismatch(CommandWord::Add))
    }

    /// Item name of a `check` command (`n/<name>`).
    #[instrument(level = "trace", skip(self))]
    pub fn prepare_view(&self, arguments: &str) -> ParseResult<String> {
        let caps = self
            .view_regex
            .captures(arguments.trim())
            .ok_or(ParseError::ArityMismatch(CommandWord::Check))?;
        clean_value(&caps, 1, CommandWord::Check)
    }

    /// Serial number of a `delete` command (`s/<serial>`).
    #[instrument(level = "trace", skip(self))]
    pub fn prepare_delete(&self, arguments: &str) -> ParseResult<String> {
        let caps = self
            .delete_regex
            .captures(arguments.trim())
            .ok_or(ParseError::ArityMismatch(CommandWord::Delete))?;
        clean_value(&caps, 1, CommandWord::Delete)
    }
}
