//! Tag scanner for variable-arity argument text.
//!
//! Values may contain whitespace, so tokens cannot be found by splitting. The
//! scanner first locates every tag marker, then cuts the text between
//! consecutive markers:
//!
//! ```text
//! t/SPEAKER n/Studio Monitor sn/XYZ
//! ^         ^                ^
//! 0         10               27      marker offsets
//! [t/SPEAKER] [n/Studio Monitor] [sn/XYZ]
//! ```
//!
//! A marker is a run of ASCII lowercase letters followed by `/`, at the start of
//! the text or right after whitespace. Unknown tag names are still markers; the
//! update builder decides what to do with them.

use itertools::Itertools;
use tracing::{debug, instrument};

use crate::domain::{ParseError, ParseResult};

/// Byte offsets of all tag markers in `text`, in ascending order.
pub fn tag_marker_offsets(text: &str) -> Vec<usize> {
    let bytes = text.as_bytes();
    let mut offsets = Vec::new();
    let mut at_word_start = true;
    for (i, c) in text.char_indices() {
        if at_word_start && c.is_ascii_lowercase() && marker_name_len(&bytes[i..]).is_some() {
            offsets.push(i);
        }
        at_word_start = c.is_whitespace();
    }
    offsets
}

/// Length of the tag name when `rest` starts with `name/`.
fn marker_name_len(rest: &[u8]) -> Option<usize> {
    let len = rest.iter().take_while(|b| b.is_ascii_lowercase()).count();
    (len > 0 && rest.get(len) == Some(&b'/')).then_some(len)
}

/// Split update arguments into raw `tag/value` tokens, left to right.
///
/// Each token runs from its marker up to the whitespace before the next marker;
/// the last one runs to the end of the trimmed text. Text before the first
/// marker is dropped.
///
/// # Errors
/// [`ParseError::NoParametersFound`] when the text holds no marker at all.
#[instrument(level = "trace")]
pub fn extract_arguments(arguments: &str) -> ParseResult<Vec<&str>> {
    let text = arguments.trim();
    let offsets = tag_marker_offsets(text);
    let Some(&first) = offsets.first() else {
        return Err(ParseError::NoParametersFound);
    };
    if first > 0 {
        debug!(skipped = &text[..first], "text before first tag dropped");
    }

    let tokens: Vec<&str> = offsets
        .into_iter()
        .chain(std::iter::once(text.len()))
        .tuple_windows()
        .map(|(start, end)| text[start..end].trim_end())
        .collect();
    debug!(?tokens, "extracted");
    Ok(tokens)
}
