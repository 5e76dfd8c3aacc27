//! Structural dump of a syntax tree.

use std::fmt;

use plis_stack::ensure_sufficient_stack;

use crate::Node;

/// Displays a tree with its node kinds spelled out:
/// `List['sum', '1', List['sum', '2', '3']]`.
///
/// Unlike `Node`'s `Display`, literals are quoted, so token boundaries stay
/// visible even when a literal swallowed a bracket or a tab.
#[derive(Clone, Copy)]
pub struct AstDump<'a> {
    node: &'a Node,
}

impl<'a> AstDump<'a> {
    pub fn new(node: &'a Node) -> Self {
        AstDump { node }
    }
}

impl fmt::Display for AstDump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.node {
            Node::Literal(text) => write!(f, "'{text}'"),
            Node::List(children) => ensure_sufficient_stack(|| {
                f.write_str("List[")?;
                for (i, child) in children.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", AstDump::new(child))?;
                }
                f.write_str("]")
            }),
        }
    }
}
