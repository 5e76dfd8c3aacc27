//! Plis IR - the syntax tree shared by the parser and the evaluator.
//!
//! A parsed line is a single [`Node`]: either a raw `Literal` token or a
//! `List` of child nodes mirroring one `(...)` span of the input. The tree
//! is built by `plis_parse`, read by `plis_eval`, and dropped when the line
//! is done.
//!
//! # Ownership
//!
//! A list owns its children outright. There is no sharing and no arena, so a
//! tree is released on every exit path simply by going out of scope. `Drop`
//! is iterative so a pathologically deep tree cannot overflow the stack while
//! being freed.

mod dump;
mod node;

pub use dump::AstDump;
pub use node::Node;
