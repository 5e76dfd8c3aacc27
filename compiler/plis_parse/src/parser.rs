//! Recursive parser over borrowed spans of the input line.

use plis_ir::Node;
use plis_stack::ensure_sufficient_stack;
use tracing::{debug, trace};

use crate::{find_matching_close, SyntaxError};

/// Default limit on list nesting.
pub const DEFAULT_MAX_DEPTH: usize = 10_000;

/// Parse one expression with the default configuration.
pub fn parse(text: &str) -> Result<Node, SyntaxError> {
    Parser::new().parse(text)
}

/// Parser configuration.
///
/// The parser itself is stateless between calls; the same value can parse
/// any number of lines.
#[derive(Clone, Copy, Debug)]
pub struct Parser {
    max_depth: usize,
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

impl Parser {
    pub fn new() -> Self {
        Parser {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Reject input whose lists nest deeper than `max_depth`.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Parse the first balanced span of `text` into a `List` node.
    ///
    /// `text` must start with `(`. Trailing text after the span is ignored.
    #[tracing::instrument(level = "trace", skip_all, fields(len = text.len()))]
    pub fn parse(&self, text: &str) -> Result<Node, SyntaxError> {
        let (tree, end) = self.parse_list(text, 1)?;
        if end < text.len() {
            debug!(ignored = &text[end..], "ignoring text after expression");
        }
        Ok(tree)
    }

    /// Parse the span starting at `text[0]`, returning the list and the
    /// span's exclusive end.
    fn parse_list(&self, text: &str, depth: usize) -> Result<(Node, usize), SyntaxError> {
        if depth > self.max_depth {
            return Err(SyntaxError::NestingTooDeep {
                limit: self.max_depth,
            });
        }

        let end = find_matching_close(text)?;
        // Both brackets are single ASCII bytes, so these are char boundaries.
        let body = &text[1..end - 1];

        let mut children = Vec::new();
        let mut cursor = 0;
        while cursor < body.len() {
            let rest = &body[cursor..];
            if rest.starts_with('(') {
                let (child, len) = ensure_sufficient_stack(|| self.parse_list(rest, depth + 1))?;
                children.push(child);
                cursor += len;
            } else {
                // The literal runs to the first space or `)`, whichever comes
                // first, so `1(sum 2)` yields the literal `1(sum`. No
                // delimiter at all means it runs to the end of the body.
                let delim = memchr::memchr2(b' ', b')', rest.as_bytes()).unwrap_or(rest.len());
                if delim > 0 {
                    let text = &rest[..delim];
                    trace!(literal = text, "literal");
                    children.push(Node::literal(text));
                }
                cursor += delim + 1;
            }
        }

        Ok((Node::List(children), end))
    }
}
