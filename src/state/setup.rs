//! Cross-page state for the role-selection → profile-creation flow.
//!
//! DESIGN
//! ======
//! The chosen role and the validated preference payload travel between
//! `/selecciona-rol` and `/crear-perfil` through this context instead of
//! query parameters, so refreshing mid-flow degrades to the defaults
//! rather than a broken URL contract.

use crate::net::types::{PreferencePayload, Role};

/// In-progress profile setup data.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProfileSetupState {
    /// Role picked on the selection screen, if any.
    pub role: Option<Role>,
    /// Validated preferences handed back by the form, if completed.
    pub preferences: Option<PreferencePayload>,
}
