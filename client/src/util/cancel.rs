//! Cooperative cancellation for page-scoped async loads.
//!
//! SYSTEM CONTEXT
//! ==============
//! A page creates one token per load, hands a clone to the spawned task and
//! cancels it from `on_cleanup`. The task checks the token after every await
//! and drops late results instead of writing to disposed signals.

#[cfg(test)]
#[path = "cancel_test.rs"]
mod cancel_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Shared flag flipped once when the owning view is torn down.
#[derive(Clone, Debug, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark every clone of this token as cancelled. Idempotent.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }

    /// Pass `value` through only while the token is live.
    pub fn keep<T>(&self, value: T) -> Option<T> {
        (!self.is_cancelled()).then_some(value)
    }
}
