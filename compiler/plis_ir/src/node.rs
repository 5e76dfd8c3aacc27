//! Syntax tree node.

use std::fmt;

use plis_stack::ensure_sufficient_stack;

use crate::AstDump;

/// One node of a parsed line.
///
/// Literal text is never empty: the parser drops zero-length spans between
/// delimiters instead of materializing them, and [`Node::literal`] asserts
/// it in debug builds.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Node {
    /// Raw token text, interpreted as an integer only at evaluation time.
    Literal(String),
    /// Children of one bracketed span, in source order. Possibly empty.
    List(Vec<Node>),
}

impl Node {
    /// Create a literal node.
    pub fn literal(text: impl Into<String>) -> Self {
        let text = text.into();
        debug_assert!(!text.is_empty(), "empty literal");
        Node::Literal(text)
    }

    /// Create a list node.
    pub fn list(children: impl IntoIterator<Item = Node>) -> Self {
        Node::List(children.into_iter().collect())
    }

    /// Create an empty list node, `()`.
    pub fn empty_list() -> Self {
        Node::List(Vec::new())
    }

    #[inline]
    pub fn is_literal(&self) -> bool {
        matches!(self, Node::Literal(_))
    }

    /// The literal text, or `None` for a list.
    #[inline]
    pub fn as_literal(&self) -> Option<&str> {
        match self {
            Node::Literal(text) => Some(text),
            Node::List(_) => None,
        }
    }

    /// The children of a list. A literal has none.
    #[inline]
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Literal(_) => &[],
            Node::List(children) => children,
        }
    }

    /// List nesting depth: a literal is 0, `()` is 1, `(a (b))` is 2.
    pub fn depth(&self) -> usize {
        let mut max = 0;
        let mut pending = vec![(self, 0usize)];
        while let Some((node, above)) = pending.pop() {
            if let Node::List(children) = node {
                let here = above + 1;
                max = max.max(here);
                pending.extend(children.iter().map(|child| (child, here)));
            }
        }
        max
    }

    /// Total number of nodes, this one included.
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        let mut pending = vec![self];
        while let Some(node) = pending.pop() {
            count += 1;
            pending.extend(node.children());
        }
        count
    }

    /// Debug rendering of the tree structure, e.g. `List['sum', '1']`.
    pub fn dump(&self) -> AstDump<'_> {
        AstDump::new(self)
    }
}

/// Renders the canonical source form: `(sum 1 (sum 2 3))`.
///
/// Children are separated by exactly one space, so the output re-parses to
/// an equal tree whenever no literal contains a space or a bracket.
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Literal(text) => f.write_str(text),
            Node::List(children) => ensure_sufficient_stack(|| {
                f.write_str("(")?;
                for (i, child) in children.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    fmt::Display::fmt(child, f)?;
                }
                f.write_str(")")
            }),
        }
    }
}

impl Drop for Node {
    fn drop(&mut self) {
        let Node::List(children) = self else {
            return;
        };
        if children.iter().all(Node::is_literal) {
            return;
        }
        // Flatten grandchildren into a work list so each node is freed with
        // an empty child vector and the default drop never recurses.
        let mut pending = std::mem::take(children);
        while let Some(mut node) = pending.pop() {
            if let Node::List(grandchildren) = &mut node {
                pending.append(grandchildren);
            }
        }
    }
}

#[cfg(test)]
mod tests;
