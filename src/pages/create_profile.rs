//! Profile-creation flow hosting the preference form.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reached from role selection. The active role and any previously
//! validated payload come from the shared setup context, so backing out
//! and returning keeps the entered values.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::navbar::Navbar;
use crate::components::preferences_form::PreferencesForm;
use crate::net::types::{PreferencePayload, Role};
use crate::state::setup::ProfileSetupState;

/// Dashboard route to offer once the form completes.
fn dashboard_route(role: Role) -> &'static str {
    match role {
        Role::Tenant => "/inquilino-dashboard/buscador-propiedades",
        Role::Landlord => "/arrendatario-dashboard/propiedades",
    }
}

/// Profile-creation page: preference form plus a completion panel.
#[component]
pub fn CreateProfilePage() -> impl IntoView {
    let setup = expect_context::<RwSignal<ProfileSetupState>>();
    let navigate = use_navigate();

    // Reaching this page directly (no prior selection) defaults to tenant.
    let role = setup.get_untracked().role.unwrap_or(Role::Tenant);
    let initial = setup.get_untracked().preferences;
    let done = RwSignal::new(false);

    let on_back = Callback::new(move |()| {
        navigate("/selecciona-rol", NavigateOptions::default());
    });
    let on_next = Callback::new(move |payload: PreferencePayload| {
        setup.update(|s| s.preferences = Some(payload));
        done.set(true);
    });

    view! {
        <div class="create-profile-page">
            <Navbar/>
            <div class="create-profile-page__body">
                <Show
                    when=move || done.get()
                    fallback=move || {
                        view! {
                            <PreferencesForm
                                role=role
                                initial=initial.clone()
                                on_next=on_next
                                on_back=on_back
                            />
                        }
                    }
                >
                    <div class="create-profile-page__done">
                        <h2 class="create-profile-page__done-title">"¡Tu perfil está listo!"</h2>
                        <p class="create-profile-page__done-text">
                            "Guardamos tus preferencias. Ya puedes empezar a usar la plataforma."
                        </p>
                        <a class="btn btn--primary" href={dashboard_route(role)}>
                            "Ir al panel"
                        </a>
                    </div>
                </Show>
            </div>
        </div>
    }
}
