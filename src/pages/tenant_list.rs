//! Landlord view of tenant summaries.

#[cfg(test)]
#[path = "tenant_list_test.rs"]
mod tenant_list_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::navbar::Navbar;
use crate::components::tenant_card::TenantCard;
use crate::net::types::TenantSummary;
use crate::state::auth::AuthState;
use crate::util::auth::install_unauth_redirect;
use crate::util::cancel::scoped_token;

/// Case-insensitive full-name filter; a blank query keeps the full list.
pub(crate) fn filter_tenants(tenants: &[TenantSummary], query: &str) -> Vec<TenantSummary> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return tenants.to_vec();
    }
    tenants
        .iter()
        .filter(|t| format!("{} {}", t.name, t.last_name).to_lowercase().contains(&query))
        .cloned()
        .collect()
}

/// Tenant grid for the landlord dashboard with a name search box.
#[component]
pub fn TenantListPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let tenants = RwSignal::new(None::<Vec<TenantSummary>>);
    let query = RwSignal::new(String::new());

    install_unauth_redirect(auth, navigate.clone());

    let token = scoped_token();
    #[cfg(feature = "hydrate")]
    {
        let token = token.clone();
        leptos::task::spawn_local(async move {
            let items = match crate::net::api::fetch_tenants().await {
                Ok(items) => items,
                Err(e) => {
                    log::error!("error al obtener inquilinos: {e}");
                    Vec::new()
                }
            };
            if token.is_cancelled() {
                return;
            }
            tenants.set(Some(items));
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = &token;
        tenants.set(Some(Vec::new()));
    }

    view! {
        <div class="tenants-page">
            <Navbar/>
            <div class="tenants-page__body">
                <div class="tenants-page__header">
                    <a class="btn" href="/arrendatario-dashboard/propiedades">
                        "Volver a propiedades"
                    </a>
                    <h1 class="tenants-page__title">"Inquilinos"</h1>
                </div>
                <input
                    class="tenants-page__query"
                    type="search"
                    placeholder="Buscar por nombre..."
                    prop:value=move || query.get()
                    on:input=move |ev| query.set(event_target_value(&ev))
                />
                <Show
                    when=move || tenants.get().is_some()
                    fallback=move || view! { <div class="spinner" aria-label="Cargando"></div> }
                >
                    <Show
                        when=move || !tenants.get().unwrap_or_default().is_empty()
                        fallback=move || {
                            view! {
                                <p class="tenants-page__empty">
                                    "Aún no tienes inquilinos registrados."
                                </p>
                            }
                        }
                    >
                        <div class="tenants-page__grid">
                            {move || {
                                filter_tenants(&tenants.get().unwrap_or_default(), &query.get())
                                    .into_iter()
                                    .map(|tenant| view! { <TenantCard tenant=tenant/> })
                                    .collect::<Vec<_>>()
                            }}
                        </div>
                    </Show>
                </Show>
            </div>
        </div>
    }
}
