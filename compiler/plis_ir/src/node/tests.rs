use super::*;
use pretty_assertions::assert_eq;

fn sample() -> Node {
    // (sum 1 (sum 2 3) ())
    Node::list([
        Node::literal("sum"),
        Node::literal("1"),
        Node::list([Node::literal("sum"), Node::literal("2"), Node::literal("3")]),
        Node::empty_list(),
    ])
}

#[test]
fn accessors() {
    let tree = sample();
    assert!(!tree.is_literal());
    assert_eq!(tree.as_literal(), None);
    assert_eq!(tree.children().len(), 4);
    assert_eq!(tree.children()[0].as_literal(), Some("sum"));
    assert!(tree.children()[0].children().is_empty());
}

#[test]
#[cfg(debug_assertions)]
#[should_panic(expected = "empty literal")]
fn empty_literal_is_rejected() {
    let _ = Node::literal("");
}

#[test]
fn depth_counts_list_levels() {
    assert_eq!(Node::literal("7").depth(), 0);
    assert_eq!(Node::empty_list().depth(), 1);
    assert_eq!(sample().depth(), 2);
}

#[test]
fn node_count_includes_root() {
    assert_eq!(Node::literal("7").node_count(), 1);
    assert_eq!(sample().node_count(), 9);
}

#[test]
fn display_is_canonical_source() {
    assert_eq!(sample().to_string(), "(sum 1 (sum 2 3) ())");
    assert_eq!(Node::literal("abc").to_string(), "abc");
    assert_eq!(Node::empty_list().to_string(), "()");
}

#[test]
fn dump_quotes_literals() {
    assert_eq!(
        sample().dump().to_string(),
        "List['sum', '1', List['sum', '2', '3'], List[]]"
    );
}

#[test]
fn clone_is_deep_and_equal() {
    let tree = sample();
    let copy = tree.clone();
    drop(tree);
    assert_eq!(copy, sample());
}

#[test]
fn deep_tree_drops_without_overflow() {
    let mut tree = Node::empty_list();
    for _ in 0..200_000 {
        tree = Node::list([tree]);
    }
    assert_eq!(tree.depth(), 200_001);
    drop(tree);
}
