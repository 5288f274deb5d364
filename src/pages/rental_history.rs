//! Tenant rental-history view.
//!
//! SYSTEM CONTEXT
//! ==============
//! Fetches the tenant's contracts, enriches each with its property record,
//! and renders a filterable card grid. Enrichment is all-or-nothing: the
//! property fetches run concurrently and are joined before a single state
//! update, and one failed lookup discards the whole batch in favor of the
//! empty result set. Filtering is purely client-side and never re-fetches.

#[cfg(test)]
#[path = "rental_history_test.rs"]
mod rental_history_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::navbar::Navbar;
use crate::components::open_property_card::PLACEHOLDER_IMAGE;
use crate::net::types::{Contract, Property};
use crate::state::auth::AuthState;
use crate::util::auth::install_unauth_redirect;
use crate::util::cancel::scoped_token;
use crate::util::dates::format_display_date;

/// Derived lease status shown on a history card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ExperienceStatus {
    Arrendado,
    Finalizado,
}

impl ExperienceStatus {
    /// Status code `"1"` means the lease is still active.
    pub(crate) fn from_code(code: &str) -> Self {
        if code == "1" { Self::Arrendado } else { Self::Finalizado }
    }

    pub(crate) fn label(self) -> &'static str {
        match self {
            Self::Arrendado => "Arrendado",
            Self::Finalizado => "Finalizado",
        }
    }
}

/// Client-side status filter over the enriched collection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) enum HistoryFilter {
    #[default]
    Todas,
    Arrendadas,
    Finalizadas,
}

impl HistoryFilter {
    pub(crate) fn matches(self, status: ExperienceStatus) -> bool {
        match self {
            Self::Todas => true,
            Self::Arrendadas => status == ExperienceStatus::Arrendado,
            Self::Finalizadas => status == ExperienceStatus::Finalizado,
        }
    }
}

/// A past or current stay, derived from a contract + property pair.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Experience {
    pub id: String,
    pub name: String,
    pub address: String,
    pub image: String,
    pub move_in: String,
    pub move_out: String,
    pub status: ExperienceStatus,
    pub kind: String,
    pub rating: f64,
}

/// Join one contract with its fetched property into a display record.
pub(crate) fn derive_experience(contract: &Contract, property: &Property) -> Experience {
    Experience {
        id: contract.id.clone(),
        name: contract.property.address.clone(),
        address: format!("{}, {}", contract.property.city, contract.property.state),
        image: property.cover_url().unwrap_or(PLACEHOLDER_IMAGE).to_owned(),
        move_in: format_display_date(&contract.start_date),
        move_out: format_display_date(&contract.end_date),
        status: ExperienceStatus::from_code(&contract.status),
        kind: contract.property.kind.clone(),
        rating: contract.tenant.avg_rating,
    }
}

/// Pair contracts with their concurrently fetched properties.
///
/// All-or-nothing: the first failed lookup fails the whole batch so a
/// partially enriched grid is never rendered.
///
/// # Errors
///
/// Returns the first property-fetch error encountered, in contract order.
pub(crate) fn pair_experiences(
    contracts: &[Contract],
    properties: &[Result<Property, String>],
) -> Result<Vec<Experience>, String> {
    contracts
        .iter()
        .zip(properties)
        .map(|(contract, property)| match property {
            Ok(property) => Ok(derive_experience(contract, property)),
            Err(e) => Err(e.clone()),
        })
        .collect()
}

/// Apply the active filter; `Todas` keeps the full collection.
pub(crate) fn filtered_experiences(experiences: &[Experience], filter: HistoryFilter) -> Vec<Experience> {
    experiences
        .iter()
        .filter(|e| filter.matches(e.status))
        .cloned()
        .collect()
}

#[cfg(feature = "hydrate")]
async fn load_experiences(subject: &str) -> Vec<Experience> {
    let contracts = match crate::net::api::fetch_tenant_contracts(subject).await {
        Ok(contracts) => contracts,
        Err(e) => {
            log::error!("error al obtener historial de arrendamientos: {e}");
            return Vec::new();
        }
    };

    let fetches = contracts
        .iter()
        .map(|contract| crate::net::api::fetch_property(&contract.property.id));
    let properties = futures::future::join_all(fetches).await;

    match pair_experiences(&contracts, &properties) {
        Ok(experiences) => experiences,
        Err(e) => {
            log::error!("error al obtener historial de arrendamientos: {e}");
            Vec::new()
        }
    }
}

/// Rental-history page: filter bar, enriched card grid, and a promotional
/// empty-state when the tenant has no recorded stays.
#[component]
pub fn RentalHistoryPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    // `None` renders the loading spinner until the join settles.
    let experiences = RwSignal::new(None::<Vec<Experience>>);
    let filter = RwSignal::new(HistoryFilter::default());
    let fetched = RwSignal::new(false);

    install_unauth_redirect(auth, navigate.clone());

    let token = scoped_token();
    Effect::new(move || {
        if fetched.get() {
            return;
        }
        let state = auth.get();
        if state.loading {
            return;
        }
        let Some(subject) = state.subject().map(ToOwned::to_owned) else {
            return;
        };
        fetched.set(true);

        #[cfg(feature = "hydrate")]
        {
            let token = token.clone();
            leptos::task::spawn_local(async move {
                let items = load_experiences(&subject).await;
                if token.is_cancelled() {
                    return;
                }
                experiences.set(Some(items));
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&token, subject);
            experiences.set(Some(Vec::new()));
        }
    });

    let filter_button = move |target: HistoryFilter, label: &'static str| {
        view! {
            <button
                class="btn history-page__filter"
                class:btn--primary={move || filter.get() == target}
                on:click=move |_| filter.set(target)
            >
                {label}
            </button>
        }
    };

    view! {
        <div class="history-page">
            <Navbar/>
            <Show
                when=move || !auth.get().loading && experiences.get().is_some()
                fallback=move || view! { <div class="spinner" aria-label="Cargando"></div> }
            >
                <div class="history-page__body">
                    <div class="history-page__header">
                        <a class="btn" href="/inquilino-dashboard/buscador-propiedades">
                            "Volver al Buscador"
                        </a>
                        <h1 class="history-page__title">"Mis Experiencias de Alojamiento"</h1>
                    </div>

                    <div class="history-page__filters" role="group">
                        {filter_button(HistoryFilter::Todas, "Todas")}
                        {filter_button(HistoryFilter::Arrendadas, "Arrendadas")}
                        {filter_button(HistoryFilter::Finalizadas, "Finalizadas")}
                    </div>

                    <Show
                        when=move || !experiences.get().unwrap_or_default().is_empty()
                        fallback=move || view! { <HistoryEmptyState/> }
                    >
                        <div class="history-page__grid">
                            {move || {
                                filtered_experiences(
                                    &experiences.get().unwrap_or_default(),
                                    filter.get(),
                                )
                                    .into_iter()
                                    .map(|experience| view! { <ExperienceCard experience=experience/> })
                                    .collect::<Vec<_>>()
                            }}
                        </div>
                    </Show>
                </div>
            </Show>
        </div>
    }
}

/// Card for a single stay.
#[component]
fn ExperienceCard(experience: Experience) -> impl IntoView {
    let status = experience.status;

    view! {
        <div class="experience-card">
            <div class="experience-card__cover">
                <img src=experience.image.clone() alt=experience.name.clone()/>
                <span
                    class="badge experience-card__status"
                    class:badge--secondary={status == ExperienceStatus::Finalizado}
                >
                    {status.label()}
                </span>
            </div>
            <div class="experience-card__header">
                <h3 class="experience-card__name">
                    {experience.name.clone()}
                    <span class="badge badge--outline">{experience.kind.clone()}</span>
                </h3>
                <p class="experience-card__address">{experience.address.clone()}</p>
            </div>
            <div class="experience-card__dates">
                <div class="experience-card__date-row">
                    <span class="experience-card__date-label">"Ingreso"</span>
                    <span class="experience-card__date">{experience.move_in.clone()}</span>
                </div>
                <div class="experience-card__date-row">
                    <span class="experience-card__date-label">"Salida"</span>
                    <span class="experience-card__date">{experience.move_out.clone()}</span>
                </div>
            </div>
            <div class="experience-card__footer">
                <span class="experience-card__rating">"★ " {experience.rating}</span>
            </div>
        </div>
    }
}

/// Promotional empty-state shown when the fetched collection is empty.
#[component]
fn HistoryEmptyState() -> impl IntoView {
    view! {
        <div class="history-empty">
            <h2 class="history-empty__title">"¡Comienza tu Historia con Nosotros!"</h2>
            <p class="history-empty__subtitle">
                "Aún no tienes experiencias de alojamiento registradas. ¡Es el momento perfecto para comenzar tu viaje con nosotros!"
            </p>
            <div class="history-empty__pitch">
                <h3 class="history-empty__pitch-title">"¿Por qué elegir nuestras propiedades?"</h3>
                <ul class="history-empty__points">
                    <li class="history-empty__point">
                        <p class="history-empty__point-title">"Búsqueda Personalizada"</p>
                        <p class="history-empty__point-text">
                            "Encuentra el lugar perfecto según tus necesidades"
                        </p>
                    </li>
                    <li class="history-empty__point">
                        <p class="history-empty__point-title">"Proceso Rápido"</p>
                        <p class="history-empty__point-text">
                            "Gestión de arrendamiento sin complicaciones"
                        </p>
                    </li>
                    <li class="history-empty__point">
                        <p class="history-empty__point-title">"Experiencias Memorables"</p>
                        <p class="history-empty__point-text">
                            "Propiedades verificadas y de calidad"
                        </p>
                    </li>
                </ul>
            </div>
            <a class="btn btn--primary" href="/inquilino-dashboard/buscador-propiedades">
                "Explorar Propiedades"
            </a>
        </div>
    }
}
