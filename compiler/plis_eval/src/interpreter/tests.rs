#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use crate::{buffer_handler, silent_handler};
use plis_parse::parse;
use pretty_assertions::assert_eq;

/// Evaluate `source` with a capturing handler.
/// Returns the outcome, the output channel, and the diagnostic channel.
fn run(source: &str) -> (EvalOutput, String, String) {
    let handler = buffer_handler();
    let mut interp = Interpreter::builder().print_handler(handler.clone()).build();
    let tree = parse(source).expect("test source should parse");
    let out = interp.evaluate(&tree);
    (out, handler.get_output(), handler.get_diagnostics())
}

fn value_of(source: &str) -> i64 {
    run(source).0.value
}

#[test]
fn literals_coerce() {
    let mut interp = Interpreter::builder().print_handler(silent_handler()).build();
    assert_eq!(interp.try_eval(&Node::literal("42")), Ok(42));
    assert_eq!(interp.try_eval(&Node::literal("abc")), Ok(0));
}

#[test]
fn flat_sum() {
    assert_eq!(value_of("(sum 1 2 3)"), 6);
}

#[test]
fn nested_sum() {
    assert_eq!(value_of("(sum (sum 1 1) 2)"), 4);
    assert_eq!(value_of("(sum (sum (sum 1 2) 3) (sum 4))"), 10);
}

#[test]
fn empty_list_is_zero() {
    let (out, output, diagnostics) = run("()");
    assert_eq!(out.value, 0);
    assert!(out.is_clean());
    assert_eq!(output, "");
    assert_eq!(diagnostics, "");
}

#[test]
fn empty_list_as_argument_is_zero() {
    assert_eq!(value_of("(sum () 5)"), 5);
}

#[test]
fn say_prints_then_yields_zero() {
    let (out, output, _) = run("(say 1 2)");
    assert_eq!(out.value, 0);
    assert_eq!(output, "1\n2\n");
}

#[test]
fn say_inside_sum_prints_in_evaluation_order() {
    let (out, output, _) = run("(sum (say 1) (say 2 3) 4)");
    assert_eq!(out.value, 4);
    assert_eq!(output, "1\n2\n3\n");
}

#[test]
fn unknown_builtin_reports_and_yields_sentinel() {
    let (out, output, diagnostics) = run("(nope 1)");
    assert_eq!(out.value, ERROR_SENTINEL);
    assert_eq!(out.errors, vec![EvalError::UnknownBuiltin("nope".into())]);
    assert_eq!(output, "");
    assert_eq!(diagnostics, "Unknown builtin 'nope'\n");
}

#[test]
fn unknown_builtin_does_not_evaluate_arguments() {
    let (_, output, _) = run("(nope (say 1))");
    assert_eq!(output, "");
}

#[test]
fn failures_inside_sum_degrade_to_sentinel() {
    let (out, _, diagnostics) = run("(sum 10 (nope) (bad 2) 3)");
    assert_eq!(out.value, 11);
    assert_eq!(
        out.errors,
        vec![
            EvalError::UnknownBuiltin("nope".into()),
            EvalError::UnknownBuiltin("bad".into()),
        ]
    );
    assert_eq!(diagnostics, "Unknown builtin 'nope'\nUnknown builtin 'bad'\n");
}

#[test]
fn list_in_call_position_is_unsupported() {
    let (out, _, diagnostics) = run("((sum 1) 2)");
    assert_eq!(out.value, ERROR_SENTINEL);
    assert_eq!(out.errors, vec![EvalError::UnsupportedCallTarget]);
    assert_eq!(diagnostics, "Unable to handle that type of list\n");
}

#[test]
fn try_eval_returns_the_nodes_own_error() {
    let mut interp = Interpreter::builder().print_handler(silent_handler()).build();
    let tree = parse("(nope)").unwrap();
    assert_eq!(
        interp.try_eval(&tree),
        Err(EvalError::UnknownBuiltin("nope".into()))
    );
}

#[test]
fn errors_do_not_leak_between_lines() {
    let handler = buffer_handler();
    let mut interp = Interpreter::builder().print_handler(handler).build();
    let bad = interp.evaluate(&parse("(nope)").unwrap());
    assert_eq!(bad.errors.len(), 1);
    let good = interp.evaluate(&parse("(sum 1)").unwrap());
    assert_eq!(good, EvalOutput { value: 1, errors: Vec::new() });
}

#[test]
fn call_depth_limit() {
    let handler = buffer_handler();
    let mut interp = Interpreter::builder()
        .print_handler(handler.clone())
        .max_depth(2)
        .build();
    assert_eq!(interp.max_depth(), 2);

    let ok = interp.evaluate(&parse("(sum (sum 1))").unwrap());
    assert_eq!(ok.value, 1);

    let deep = interp.evaluate(&parse("(sum 5 (sum (sum 1)))").unwrap());
    assert_eq!(deep.value, 4);
    assert_eq!(deep.errors, vec![EvalError::RecursionLimit { limit: 2 }]);
}

#[test]
fn deep_nesting_evaluates_without_overflow() {
    let depth = 5_000;
    let source = format!("{}1{}", "(sum ".repeat(depth), ")".repeat(depth));
    assert_eq!(value_of(&source), 1);
}

#[test]
fn custom_builtin_through_builder() {
    fn double(interp: &mut Interpreter, args: &[Node]) -> EvalResult {
        let total = crate::sum(interp, args)?;
        total
            .checked_mul(2)
            .ok_or(EvalError::IntegerOverflow { operation: "double" })
    }

    let mut interp = Interpreter::builder()
        .print_handler(silent_handler())
        .builtin("double", double)
        .build();
    assert!(interp.registry().contains("double"));
    let out = interp.evaluate(&parse("(double 1 (sum 2 3))").unwrap());
    assert_eq!(out.value, 12);
}
