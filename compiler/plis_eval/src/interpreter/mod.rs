//! Tree-walking interpreter.

mod builder;

use plis_ir::Node;
use plis_stack::ensure_sufficient_stack;
use tracing::{debug, trace};

use crate::{coerce_literal, BuiltinRegistry, EvalError, EvalResult, SharedPrintHandler};

pub use builder::InterpreterBuilder;

/// Value a failed call evaluates to, so the enclosing call can carry on.
pub const ERROR_SENTINEL: i64 = -1;

/// Default limit on nested builtin calls.
pub const DEFAULT_MAX_DEPTH: usize = 10_000;

/// Outcome of evaluating one line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvalOutput {
    /// The line's value. [`ERROR_SENTINEL`] if the outermost call failed.
    pub value: i64,
    /// Every error reported while evaluating the line, in order.
    pub errors: Vec<EvalError>,
}

impl EvalOutput {
    /// Whether the line evaluated without reporting any error.
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Evaluates syntax trees against a builtin registry.
///
/// Holds no bindings between lines; the only per-line state is the current
/// call depth and the errors reported so far, both reset by [`evaluate`].
///
/// [`evaluate`]: Interpreter::evaluate
pub struct Interpreter {
    registry: BuiltinRegistry,
    print_handler: SharedPrintHandler,
    max_depth: usize,
    depth: usize,
    errors: Vec<EvalError>,
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

impl Interpreter {
    /// An interpreter with the default builtins, printing to stdout.
    pub fn new() -> Self {
        InterpreterBuilder::new().build()
    }

    pub fn builder() -> InterpreterBuilder {
        InterpreterBuilder::new()
    }

    #[inline]
    pub fn print_handler(&self) -> &SharedPrintHandler {
        &self.print_handler
    }

    #[inline]
    pub fn registry(&self) -> &BuiltinRegistry {
        &self.registry
    }

    #[inline]
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Evaluate a whole line.
    #[tracing::instrument(level = "trace", skip_all)]
    pub fn evaluate(&mut self, node: &Node) -> EvalOutput {
        self.depth = 0;
        self.errors.clear();
        let value = self.eval(node);
        EvalOutput {
            value,
            errors: std::mem::take(&mut self.errors),
        }
    }

    /// Evaluate a node, reporting a failed call and substituting
    /// [`ERROR_SENTINEL`] for it.
    ///
    /// This is what builtins use on their arguments.
    pub fn eval(&mut self, node: &Node) -> i64 {
        match self.try_eval(node) {
            Ok(value) => value,
            Err(err) => {
                self.report(err);
                ERROR_SENTINEL
            }
        }
    }

    /// Evaluate a node, returning the error of the node itself instead of
    /// reporting it. Errors inside its arguments are still reported.
    pub fn try_eval(&mut self, node: &Node) -> EvalResult {
        match node {
            Node::Literal(text) => Ok(coerce_literal(text)),
            Node::List(items) => self.eval_call(items),
        }
    }

    fn eval_call(&mut self, items: &[Node]) -> EvalResult {
        let Some((head, args)) = items.split_first() else {
            return Ok(0);
        };
        let Node::Literal(name) = head else {
            return Err(EvalError::UnsupportedCallTarget);
        };
        let Some(builtin) = self.registry.get(name) else {
            return Err(EvalError::UnknownBuiltin(name.clone()));
        };
        if self.depth >= self.max_depth {
            return Err(EvalError::RecursionLimit {
                limit: self.max_depth,
            });
        }

        trace!(builtin = name.as_str(), args = args.len(), depth = self.depth, "call");
        self.depth = self.depth.saturating_add(1);
        let result = ensure_sufficient_stack(|| builtin(self, args));
        self.depth = self.depth.saturating_sub(1);
        result
    }

    fn report(&mut self, err: EvalError) {
        debug!(%err, "call failed");
        self.print_handler.eprintln(&err.to_string());
        self.errors.push(err);
    }
}

#[cfg(test)]
mod tests;
