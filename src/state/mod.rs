//! Shared context state provided from the app shell.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each module here is provided once as an `RwSignal` context by `App` and
//! consumed by the views that need it. There is no other shared mutable
//! store; page-local state stays inside its page.

pub mod auth;
pub mod setup;
pub mod toasts;
