//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Identity is issued by an external provider; subjects arrive with a
//! `provider|id` prefix that the backend keys records without. Route
//! components should also apply identical unauthenticated redirect behavior.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::AuthState;

/// Normalize a provider subject to the bare identifier the backend keys on.
///
/// `"auth0|abc123"` becomes `"abc123"`; a subject without a prefix passes
/// through unchanged.
pub fn subject_id(sub: &str) -> &str {
    sub.rsplit_once('|').map_or(sub, |(_, id)| id)
}

/// Redirect to the landing page whenever auth has loaded and no user is
/// present.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let navigate = navigate.clone();
    Effect::new(move || {
        let state = auth.get();
        if !state.loading && state.user.is_none() {
            navigate("/", NavigateOptions::default());
        }
    });
}
