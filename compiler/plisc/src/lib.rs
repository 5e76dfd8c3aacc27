//! Plis REPL - the line-oriented front end.
//!
//! ```text
//! line ──► trim / skip empty / `q` quits
//!   │
//!   ▼
//! plis_parse::Parser ──► Node ──► plis_eval::Interpreter ──► "Result: n"
//!   │
//!   └── SyntaxError ──► "Syntax error"
//! ```
//!
//! Each line is parsed and evaluated on its own; nothing carries over from
//! one line to the next.

mod config;
mod session;
pub mod tracing_setup;

pub use config::{CliAction, ConfigError, ReplConfig, DEFAULT_PROMPT};
pub use session::{LineOutcome, Session};
pub use tracing_setup::init_tracing;
