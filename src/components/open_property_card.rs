//! Card for an open property in the search grid.
//!
//! DESIGN
//! ======
//! Keeps listing presentation consistent between the property browser and
//! any future landlord inventory view while centralizing the cover-image
//! fallback.

#[cfg(test)]
#[path = "open_property_card_test.rs"]
mod open_property_card_test;

use leptos::prelude::*;

use crate::net::types::Property;

/// Fallback cover when a property has no media attached.
pub const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/400";

/// Spanish count label, e.g. `2 Dormitorios`, `1 Baño`.
pub(crate) fn count_label(count: u32, singular: &str) -> String {
    if count == 1 {
        format!("{count} {singular}")
    } else {
        format!("{count} {singular}s")
    }
}

/// A clickable card summarizing an open property.
#[component]
pub fn OpenPropertyCard(
    property: Property,
    #[prop(optional)] on_open: Option<Callback<String>>,
) -> impl IntoView {
    let cover = property.cover_url().unwrap_or(PLACEHOLDER_IMAGE).to_owned();
    let alt = format!("Imagen de {}", property.address);
    let candidate_count = property.candidates.len();
    let id = property.id.clone();

    let on_click = move |_| {
        if let Some(on_open) = on_open.as_ref() {
            on_open.run(id.clone());
        }
    };

    view! {
        <div class="property-card" on:click=on_click>
            <div class="property-card__cover">
                <img src=cover alt=alt/>
            </div>
            <div class="property-card__header">
                <p class="property-card__address">{property.address.clone()}</p>
                <h3 class="property-card__candidates-title">"Numero Candidatos"</h3>
                <p class="property-card__candidates">{candidate_count}</p>
            </div>
            <div class="property-card__counts">
                <span class="property-card__count">{count_label(property.bedrooms, "Dormitorio")}</span>
                <span class="property-card__count">{count_label(property.bathrooms, "Baño")}</span>
            </div>
        </div>
    }
}
