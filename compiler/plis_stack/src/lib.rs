//! Stack growth for recursion over deeply nested expressions.
//!
//! Both the parser and the evaluator recurse once per bracket level, so a
//! single input line like `((((...))))` decides how deep the native stack
//! goes. Recursive calls are wrapped in [`ensure_sufficient_stack`], which
//! switches to a freshly allocated segment when the current one runs low.
//!
//! The explicit depth limits in `plis_parse` and `plis_eval` still apply;
//! this crate only keeps the process from overflowing before they trigger.
//!
//! # Platform Support
//!
//! - **Native targets**: `stacker::maybe_grow`.
//! - **WASM targets**: plain call.

/// Minimum stack space to keep available (100KB red zone).
#[cfg(not(target_arch = "wasm32"))]
const RED_ZONE: usize = 100 * 1024;

/// Stack space to allocate when growing (1MB).
#[cfg(not(target_arch = "wasm32"))]
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Run `f`, growing the stack first if less than the red zone remains.
///
/// ```text
/// fn eval_list(&mut self, items: &[Node]) -> EvalResult {
///     ensure_sufficient_stack(|| builtin(self, args))
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM version - just call directly (WASM has its own stack management).
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

#[cfg(test)]
mod tests;
