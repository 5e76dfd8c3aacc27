#![deny(clippy::arithmetic_side_effects)]
//! Plis Eval - the evaluator for parsed plis lines.
//!
//! # Evaluation
//!
//! - A literal evaluates to its integer value ([`coerce_literal`]); text that
//!   is not a number evaluates to 0.
//! - `()` evaluates to 0.
//! - `(name args...)` looks `name` up in the [`BuiltinRegistry`] and hands it
//!   the argument nodes unevaluated. Builtins evaluate their arguments
//!   themselves, left to right.
//!
//! # Errors
//!
//! A failing call does not abort the line. The error is reported through
//! the print handler's diagnostic channel, recorded in [`EvalOutput`], and
//! the call evaluates to [`ERROR_SENTINEL`] so the enclosing expression
//! still produces a number.

mod builtins;
mod errors;
mod interpreter;
mod literal;
mod print_handler;

pub use builtins::{say, sum, BuiltinFn, BuiltinRegistry, DEFAULT_BUILTINS};
pub use errors::{EvalError, EvalResult};
pub use interpreter::{EvalOutput, Interpreter, InterpreterBuilder, DEFAULT_MAX_DEPTH, ERROR_SENTINEL};
pub use literal::coerce_literal;
pub use print_handler::{
    buffer_handler, silent_handler, stdout_handler, BufferPrintHandler, PrintHandlerImpl,
    SharedPrintHandler, StdoutPrintHandler,
};
