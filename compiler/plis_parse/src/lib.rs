//! Plis Parse - turns one line of text into a syntax tree.
//!
//! # Grammar
//!
//! There is no separate lexer. A line is a single bracketed span:
//!
//! ```text
//! expr    := '(' item* ')'
//! item    := expr | literal
//! literal := any run of bytes up to the next ' ' or ')'
//! ```
//!
//! Every `(` and `)` is structural; there is no quoting or escaping. Anything
//! after the first balanced span is ignored.
//!
//! # Pipeline
//!
//! [`find_matching_close`] locates the end of a span by counting brackets,
//! and [`Parser`] splits the span body into literals and nested lists,
//! calling the scanner again for every nested `(`.

mod error;
mod parser;
mod scanner;

pub use error::SyntaxError;
pub use parser::{parse, Parser, DEFAULT_MAX_DEPTH};
pub use scanner::find_matching_close;

#[cfg(test)]
mod tests;
