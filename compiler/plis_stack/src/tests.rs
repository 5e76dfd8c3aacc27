use super::*;

/// Builds `depth` nested boxes by recursion and measures them the same way.
fn nest(depth: usize) -> Option<Box<Nested>> {
    ensure_sufficient_stack(|| {
        if depth == 0 {
            None
        } else {
            Some(Box::new(Nested(nest(depth - 1))))
        }
    })
}

struct Nested(Option<Box<Nested>>);

fn measure(node: Option<&Nested>) -> usize {
    ensure_sufficient_stack(|| match node {
        None => 0,
        Some(Nested(inner)) => measure(inner.as_deref()) + 1,
    })
}

#[test]
fn shallow_recursion_runs_inline() {
    assert_eq!(measure(nest(10).as_deref()), 10);
}

#[test]
fn deep_recursion_grows_the_stack() {
    // Well past what a default 8MB main-thread stack survives unaided.
    let tree = nest(100_000);
    assert_eq!(measure(tree.as_deref()), 100_000);

    // Dropping a 100k-deep Box chain recursively would overflow too.
    let mut cursor = tree;
    while let Some(node) = cursor {
        cursor = node.0;
    }
}

#[test]
fn passes_results_through() {
    let result: Result<i64, &str> = ensure_sufficient_stack(|| Ok(6));
    assert_eq!(result, Ok(6));
}
