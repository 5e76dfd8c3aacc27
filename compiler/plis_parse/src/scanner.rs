//! Bracket scanner.

use crate::SyntaxError;

/// Find the end of the bracketed span that opens at index 0.
///
/// Returns the exclusive end, so `&text[..end]` is the whole span including
/// both brackets. Opens and closes are counted from the start; the scan stops
/// the first time the two counts are equal, which can only happen once the
/// matching `)` has been counted.
///
/// Brackets are counted wherever they appear, including inside what later
/// becomes literal text.
pub fn find_matching_close(text: &str) -> Result<usize, SyntaxError> {
    let bytes = text.as_bytes();
    if bytes.first() != Some(&b'(') {
        return Err(SyntaxError::MissingOpenBracket);
    }

    let mut opens = 0usize;
    let mut closes = 0usize;
    for pos in memchr::memchr2_iter(b'(', b')', bytes) {
        if bytes[pos] == b'(' {
            opens += 1;
        } else {
            closes += 1;
        }
        if opens == closes {
            return Ok(pos + 1);
        }
    }

    Err(SyntaxError::UnbalancedBrackets { opens, closes })
}
