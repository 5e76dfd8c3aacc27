//! Evaluation errors.

/// Result of evaluating one node.
pub type EvalResult = Result<i64, EvalError>;

/// Why a call could not produce a value.
///
/// The `Display` text is what the REPL prints on the diagnostic channel.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EvalError {
    /// The head literal names no registered builtin.
    #[error("Unknown builtin '{0}'")]
    UnknownBuiltin(String),
    /// The head of a call is itself a list.
    #[error("Unable to handle that type of list")]
    UnsupportedCallTarget,
    /// Checked arithmetic in a builtin overflowed `i64`.
    #[error("integer overflow in {operation}")]
    IntegerOverflow { operation: &'static str },
    /// Calls nested deeper than the interpreter's limit.
    #[error("maximum call depth exceeded (limit: {limit})")]
    RecursionLimit { limit: usize },
}
