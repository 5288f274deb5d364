//! Open-property browser.
//!
//! SYSTEM CONTEXT
//! ==============
//! Serves both dashboards: tenants browse it as the property search and
//! landlords as their listing overview. One fetch on mount, a client-side
//! address filter, and a detail dialog opened per card.

#[cfg(test)]
#[path = "property_search_test.rs"]
mod property_search_test;

use leptos::prelude::*;

use crate::components::navbar::Navbar;
use crate::components::open_property_card::{OpenPropertyCard, count_label};
use crate::net::types::Property;
use crate::util::cancel::scoped_token;

/// Case-insensitive address filter; a blank query keeps the full list.
pub(crate) fn filter_properties(properties: &[Property], query: &str) -> Vec<Property> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return properties.to_vec();
    }
    properties
        .iter()
        .filter(|p| p.address.to_lowercase().contains(&query))
        .cloned()
        .collect()
}

/// Property grid with an address search box.
#[component]
pub fn PropertySearchPage() -> impl IntoView {
    // `None` renders the loading spinner until the fetch settles.
    let properties = RwSignal::new(None::<Vec<Property>>);
    let query = RwSignal::new(String::new());
    let selected = RwSignal::new(None::<Property>);

    let token = scoped_token();
    #[cfg(feature = "hydrate")]
    {
        let token = token.clone();
        leptos::task::spawn_local(async move {
            let items = match crate::net::api::fetch_open_properties().await {
                Ok(items) => items,
                Err(e) => {
                    log::error!("error al obtener propiedades: {e}");
                    Vec::new()
                }
            };
            if token.is_cancelled() {
                return;
            }
            properties.set(Some(items));
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = &token;
        properties.set(Some(Vec::new()));
    }

    let on_open = Callback::new(move |id: String| {
        let property = properties
            .get_untracked()
            .unwrap_or_default()
            .into_iter()
            .find(|p| p.id == id);
        selected.set(property);
    });
    let on_close = Callback::new(move |()| selected.set(None));

    view! {
        <div class="search-page">
            <Navbar/>
            <div class="search-page__body">
                <h1 class="search-page__title">"Buscador de Propiedades"</h1>
                <input
                    class="search-page__query"
                    type="search"
                    placeholder="Buscar por dirección..."
                    prop:value=move || query.get()
                    on:input=move |ev| query.set(event_target_value(&ev))
                />
                <Show
                    when=move || properties.get().is_some()
                    fallback=move || view! { <div class="spinner" aria-label="Cargando"></div> }
                >
                    <Show
                        when=move || !properties.get().unwrap_or_default().is_empty()
                        fallback=move || {
                            view! {
                                <p class="search-page__empty">
                                    "No hay propiedades disponibles por el momento."
                                </p>
                            }
                        }
                    >
                        <div class="search-page__grid">
                            {move || {
                                filter_properties(
                                    &properties.get().unwrap_or_default(),
                                    &query.get(),
                                )
                                    .into_iter()
                                    .map(|property| {
                                        view! {
                                            <OpenPropertyCard property=property on_open=on_open/>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </div>
                    </Show>
                </Show>
            </div>
            <Show when=move || selected.get().is_some()>
                <PropertyDetailDialog selected=selected on_close=on_close/>
            </Show>
        </div>
    }
}

/// Modal with the full detail of the clicked property.
#[component]
fn PropertyDetailDialog(
    selected: RwSignal<Option<Property>>,
    on_close: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                {move || {
                    selected
                        .get()
                        .map(|property| {
                            view! {
                                <h2>{property.address.clone()}</h2>
                                <p class="dialog__row">
                                    {count_label(property.bedrooms, "Dormitorio")}
                                    " · "
                                    {count_label(property.bathrooms, "Baño")}
                                </p>
                                <p class="dialog__row">
                                    "Candidatos: "
                                    {property.candidates.len()}
                                </p>
                            }
                        })
                }}
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_close.run(())>
                        "Cerrar"
                    </button>
                </div>
            </div>
        </div>
    }
}
