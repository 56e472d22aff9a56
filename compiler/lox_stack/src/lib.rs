//! Stack safety for the recursive phases of the interpreter.
//!
//! Two separate concerns live here:
//!
//! - [`ensure_sufficient_stack`] grows the native stack on demand so that
//!   deeply nested source (long `a + b + c ...` chains, nested blocks) can be
//!   parsed and evaluated without crashing the host.
//! - [`CallDepth`] counts active Lox calls so unbounded user recursion ends
//!   in a reportable fault instead of exhausting memory.

use thiserror::Error;

/// Grow the stack when less than this much remains.
const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated stack segment.
const SEGMENT_SIZE: usize = 2 * 1024 * 1024;

/// Default ceiling on nested Lox calls.
pub const DEFAULT_MAX_CALL_DEPTH: usize = 8192;

/// Run `f`, first growing the stack if it is close to exhausted.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

/// WASM manages its own stack.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

/// Raised when a call would exceed the configured depth.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("call depth limit of {limit} exceeded")]
pub struct DepthExceeded {
    pub limit: usize,
}

/// Counter of active calls with a fixed ceiling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CallDepth {
    current: usize,
    limit: usize,
}

impl CallDepth {
    pub fn new(limit: usize) -> Self {
        CallDepth { current: 0, limit }
    }

    /// Record entry into a call. Fails without changing the count when the
    /// limit is already reached.
    pub fn enter(&mut self) -> Result<(), DepthExceeded> {
        if self.current >= self.limit {
            return Err(DepthExceeded { limit: self.limit });
        }
        self.current += 1;
        Ok(())
    }

    /// Record exit from a call entered with [`CallDepth::enter`].
    pub fn exit(&mut self) {
        debug_assert!(self.current > 0, "CallDepth::exit without matching enter");
        self.current = self.current.saturating_sub(1);
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn limit(&self) -> usize {
        self.limit
    }
}

impl Default for CallDepth {
    fn default() -> Self {
        CallDepth::new(DEFAULT_MAX_CALL_DEPTH)
    }
}
