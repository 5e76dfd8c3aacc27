//! Builtin registry and the default builtins.
//!
//! A builtin receives its argument nodes unevaluated and decides itself
//! when to evaluate them, through the interpreter it is handed. Adding a
//! builtin is one function plus one table entry.

use plis_ir::Node;
use rustc_hash::FxHashMap;

use crate::{EvalError, EvalResult, Interpreter};

/// Signature shared by every builtin.
pub type BuiltinFn = fn(&mut Interpreter, &[Node]) -> EvalResult;

/// Builtins every interpreter starts with.
pub const DEFAULT_BUILTINS: &[(&str, BuiltinFn)] = &[("sum", sum), ("say", say)];

/// Name to builtin lookup.
#[derive(Clone, Debug)]
pub struct BuiltinRegistry {
    entries: FxHashMap<&'static str, BuiltinFn>,
}

impl BuiltinRegistry {
    /// A registry with no builtins at all.
    pub fn empty() -> Self {
        BuiltinRegistry {
            entries: FxHashMap::default(),
        }
    }

    /// A registry holding [`DEFAULT_BUILTINS`].
    pub fn with_defaults() -> Self {
        BuiltinRegistry {
            entries: DEFAULT_BUILTINS.iter().copied().collect(),
        }
    }

    /// Add or replace a builtin, returning the one it replaced.
    pub fn register(&mut self, name: &'static str, op: BuiltinFn) -> Option<BuiltinFn> {
        self.entries.insert(name, op)
    }

    #[inline]
    pub fn get(&self, name: &str) -> Option<BuiltinFn> {
        self.entries.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.entries.keys().copied().collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for BuiltinRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// `(sum a b ...)`: evaluates the arguments left to right and adds them up.
/// No arguments is 0.
///
/// Every argument is evaluated even after the total has overflowed.
pub fn sum(interp: &mut Interpreter, args: &[Node]) -> EvalResult {
    let mut total = Some(0i64);
    for arg in args {
        let value = interp.eval(arg);
        total = total.and_then(|t| t.checked_add(value));
    }
    total.ok_or(EvalError::IntegerOverflow { operation: "sum" })
}

/// `(say a b ...)`: evaluates the arguments left to right and prints each
/// value on its own line as soon as it is known. Always 0.
pub fn say(interp: &mut Interpreter, args: &[Node]) -> EvalResult {
    for arg in args {
        let value = interp.eval(arg);
        interp.print_handler().println(&value.to_string());
    }
    Ok(0)
}
