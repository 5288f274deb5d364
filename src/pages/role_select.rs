//! Role-selection screen.
//!
//! SYSTEM CONTEXT
//! ==============
//! Entry point of the profile-creation flow: the user picks tenant or
//! landlord, the choice is written to the backend, and the outcome is
//! surfaced as a toast. Each option tracks its own in-flight flag;
//! mutual exclusion between the two requests is not enforced.

#[cfg(test)]
#[path = "role_select_test.rs"]
mod role_select_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::navbar::Navbar;
use crate::state::auth::AuthState;
use crate::state::setup::ProfileSetupState;
use crate::state::toasts::{Toast, ToastsState};

#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;

use crate::net::types::Role;
#[cfg(feature = "hydrate")]
use crate::util::cancel::scoped_token;

/// A selectable role option card.
struct RoleOption {
    role: Role,
    description: &'static str,
}

const ROLE_OPTIONS: [RoleOption; 2] = [
    RoleOption {
        role: Role::Tenant,
        description: "Busco propiedades para alquilar y gestionar mi contrato de arrendamiento.",
    },
    RoleOption {
        role: Role::Landlord,
        description: "Tengo propiedades para alquilar y quiero gestionarlas eficientemente.",
    },
];

/// Independent in-flight flags, one per option.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct RoleAssignFlags {
    tenant: bool,
    landlord: bool,
}

impl RoleAssignFlags {
    pub(crate) fn set(&mut self, role: Role, assigning: bool) {
        match role {
            Role::Tenant => self.tenant = assigning,
            Role::Landlord => self.landlord = assigning,
        }
    }

    pub(crate) fn is_assigning(self, role: Role) -> bool {
        match role {
            Role::Tenant => self.tenant,
            Role::Landlord => self.landlord,
        }
    }
}

pub(crate) fn assignment_success_toast(role: Role) -> Toast {
    Toast::new(
        "Rol asignado con éxito",
        format!("Has sido registrado como {}.", role.title()),
    )
}

pub(crate) fn assignment_failure_toast() -> Toast {
    Toast::destructive(
        "Error al asignar el rol",
        "Por favor, inténtalo de nuevo más tarde.",
    )
}

/// Role-selection page: two option cards, each requesting assignment for
/// its role and reporting the outcome as a toast.
#[component]
pub fn RoleSelectPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastsState>>();
    let setup = expect_context::<RwSignal<ProfileSetupState>>();
    let navigate = use_navigate();

    let selected = RwSignal::new(None::<Role>);
    let flags = RwSignal::new(RoleAssignFlags::default());

    #[cfg(feature = "hydrate")]
    let token = scoped_token();
    #[cfg(not(feature = "hydrate"))]
    let _ = (auth, toasts, setup, &navigate);

    let on_select = move |role: Role| {
        selected.set(Some(role));
        flags.update(|f| f.set(role, true));

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            let token = token.clone();
            let user_id = auth
                .get_untracked()
                .subject()
                .map_or_else(|| "current-user-id".to_owned(), ToOwned::to_owned);
            leptos::task::spawn_local(async move {
                let outcome = crate::net::api::assign_role(&user_id, role).await;
                if token.is_cancelled() {
                    return;
                }
                flags.update(|f| f.set(role, false));
                match outcome {
                    Ok(()) => {
                        crate::components::toaster::show_toast(toasts, assignment_success_toast(role));
                        setup.update(|s| s.role = Some(role));
                        navigate("/crear-perfil", NavigateOptions::default());
                    }
                    Err(e) => {
                        log::error!("role assignment failed: {e}");
                        crate::components::toaster::show_toast(toasts, assignment_failure_toast());
                    }
                }
            });
        }
    };

    view! {
        <div class="role-select-page">
            <Navbar/>
            <div class="role-select-page__backdrop">
                <h1 class="role-select-page__title">"Selecciona tu Rol"</h1>
                <div class="role-select-page__grid">
                    {ROLE_OPTIONS
                        .iter()
                        .map(|option| {
                            let role = option.role;
                            let description = option.description;
                            let on_select = on_select.clone();
                            view! {
                                <div
                                    class="role-card"
                                    class:role-card--selected={move || selected.get() == Some(role)}
                                >
                                    <div class="role-card__body">
                                        <h2 class="role-card__title">{role.title()}</h2>
                                        <p class="role-card__description">{description}</p>
                                    </div>
                                    <div class="role-card__footer">
                                        <button
                                            class="btn btn--primary role-card__select"
                                            disabled=move || flags.get().is_assigning(role)
                                            on:click=move |_| on_select(role)
                                        >
                                            {move || {
                                                if flags.get().is_assigning(role) {
                                                    "Asignando...".to_owned()
                                                } else {
                                                    format!("Seleccionar como {}", role.title())
                                                }
                                            }}
                                        </button>
                                    </div>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </div>
    }
}
