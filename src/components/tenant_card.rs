//! Card for a tenant summary in the landlord dashboard grid.

#[cfg(test)]
#[path = "tenant_card_test.rs"]
mod tenant_card_test;

use leptos::prelude::*;

use crate::net::types::TenantSummary;

/// Uppercase initials for the avatar fallback.
pub(crate) fn initials(name: &str, last_name: &str) -> String {
    let mut out = String::new();
    if let Some(c) = name.chars().next() {
        out.extend(c.to_uppercase());
    }
    if let Some(c) = last_name.chars().next() {
        out.extend(c.to_uppercase());
    }
    out
}

/// A card linking to the tenant detail route with contact and rent info.
#[component]
pub fn TenantCard(tenant: TenantSummary) -> impl IntoView {
    let href = format!("/arrendatario-dashboard/inquilinos/{}", tenant.id);
    let full_name = format!("{} {}", tenant.name, tenant.last_name);
    let avatar_initials = initials(&tenant.name, &tenant.last_name);
    let avatar = tenant.image.clone();
    let alt = full_name.clone();

    view! {
        <a class="tenant-card" href=href>
            <div class="tenant-card__body">
                <div class="tenant-card__identity">
                    <span class="tenant-card__avatar">
                        {match avatar {
                            Some(url) => view! { <img src=url alt=alt/> }.into_any(),
                            None => view! { <span class="tenant-card__initials">{avatar_initials}</span> }.into_any(),
                        }}
                    </span>
                    <div class="tenant-card__headline">
                        <h3 class="tenant-card__name">{full_name}</h3>
                        <span class="badge badge--secondary">{tenant.classification.clone()}</span>
                        <span class="tenant-card__rating">"★ " {tenant.rating}</span>
                    </div>
                </div>
                <div class="tenant-card__contact">
                    <p class="tenant-card__row">{tenant.email.clone()}</p>
                    <p class="tenant-card__row">{tenant.phone.clone()}</p>
                    <p class="tenant-card__row">{tenant.current_property.clone()}</p>
                </div>
            </div>
            <div class="tenant-card__footer">
                <span class="tenant-card__rent-label">"Canon Arrendamiento"</span>
                <span class="tenant-card__rent">"$" {tenant.monthly_rent}</span>
            </div>
        </a>
    }
}
