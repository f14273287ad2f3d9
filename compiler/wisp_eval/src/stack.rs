//! Guard against stack exhaustion in recursive evaluation.
//!
//! Node chains have no depth limit, so a hostile or generated scope can
//! nest arbitrarily deep. Recursion sites wrap themselves in
//! [`ensure_sufficient_stack`], which grows the stack on demand through
//! the `stacker` crate instead of overflowing.

/// Remaining stack below this triggers a grow (100KB).
#[cfg(not(target_arch = "wasm32"))]
const RED_ZONE: usize = 100 * 1024;

/// Size of each new stack segment (1MB).
#[cfg(not(target_arch = "wasm32"))]
const STACK_SEGMENT: usize = 1024 * 1024;

/// Run `f`, growing the stack first if the red zone is breached.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_SEGMENT, f)
}

/// On WASM there is no stacker support; the runtime manages its own
/// stack, so just call through.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
