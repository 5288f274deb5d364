//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and user-aware components to coordinate redirects
//! and identity-dependent rendering. The session user is resolved once by
//! the app shell; everything else only reads.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::User;
use crate::util::auth::subject_id;

/// Authentication state tracking the current user and loading status.
///
/// `loading` starts `true` and flips once the session lookup settles, so
/// guards can distinguish "not signed in" from "not resolved yet".
#[derive(Clone, Debug, PartialEq)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { user: None, loading: true }
    }
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Normalized subject id of the signed-in user, if any.
    pub fn subject(&self) -> Option<&str> {
        self.user.as_ref().map(|u| subject_id(&u.sub))
    }
}
