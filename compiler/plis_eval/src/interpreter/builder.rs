//! `InterpreterBuilder` for configuring an [`Interpreter`].

use super::{Interpreter, DEFAULT_MAX_DEPTH};
use crate::{stdout_handler, BuiltinFn, BuiltinRegistry, SharedPrintHandler};

/// Builder for [`Interpreter`].
///
/// Defaults: [`BuiltinRegistry::with_defaults`], stdout printing, and
/// [`DEFAULT_MAX_DEPTH`] nested calls.
pub struct InterpreterBuilder {
    registry: BuiltinRegistry,
    print_handler: Option<SharedPrintHandler>,
    max_depth: usize,
}

impl Default for InterpreterBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl InterpreterBuilder {
    pub fn new() -> Self {
        Self {
            registry: BuiltinRegistry::with_defaults(),
            print_handler: None,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Replace the whole registry.
    #[must_use]
    pub fn registry(mut self, registry: BuiltinRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Add or replace a single builtin.
    #[must_use]
    pub fn builtin(mut self, name: &'static str, op: BuiltinFn) -> Self {
        self.registry.register(name, op);
        self
    }

    /// Where `say` output and diagnostics go.
    #[must_use]
    pub fn print_handler(mut self, handler: SharedPrintHandler) -> Self {
        self.print_handler = Some(handler);
        self
    }

    /// Limit on nested builtin calls.
    #[must_use]
    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn build(self) -> Interpreter {
        Interpreter {
            registry: self.registry,
            print_handler: self.print_handler.unwrap_or_else(stdout_handler),
            max_depth: self.max_depth,
            depth: 0,
            errors: Vec::new(),
        }
    }
}
