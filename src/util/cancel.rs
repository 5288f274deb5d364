//! Cancellation tokens for in-flight fetches.
//!
//! DESIGN
//! ======
//! A view that unmounts while a fetch is pending must not apply the result
//! to state nobody renders anymore. Every spawned fetch holds a token tied
//! to the spawning component's lifetime and checks it before writing.

#[cfg(test)]
#[path = "cancel_test.rs"]
mod cancel_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::on_cleanup;

/// A shared cancellation flag. Clones observe the same flag.
#[derive(Clone, Debug, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the token cancelled. Irreversible.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}

/// A token that cancels when the current reactive scope is disposed.
///
/// Call from a component body so in-flight fetches spawned there discard
/// their results after unmount.
pub fn scoped_token() -> CancelToken {
    let token = CancelToken::new();
    let on_dispose = token.clone();
    on_cleanup(move || on_dispose.cancel());
    token
}
