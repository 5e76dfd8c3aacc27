//! Syntax errors.
//!
//! A syntax error rejects the whole line: no partial tree is ever handed to
//! the evaluator.

/// Why a line could not be parsed.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SyntaxError {
    /// The input ran out before every `(` found its `)`.
    #[error("unbalanced brackets: {opens} `(` but only {closes} `)`")]
    UnbalancedBrackets { opens: usize, closes: usize },
    /// The expression does not start with `(`.
    #[error("expected `(` at the start of the expression")]
    MissingOpenBracket,
    /// Lists nest deeper than the parser's configured limit.
    #[error("lists nested deeper than the limit of {limit}")]
    NestingTooDeep { limit: usize },
}
