//! Landlord profile view.
//!
//! SYSTEM CONTEXT
//! ==============
//! Read-only profile cards for the signed-in landlord. The record lookup
//! is stubbed locally until the backend profile endpoint lands; a missing
//! record redirects to the generic error route instead of rendering a
//! partial profile.

#[cfg(test)]
#[path = "landlord_profile_test.rs"]
mod landlord_profile_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::navbar::Navbar;
use crate::components::tenant_card::initials;
use crate::state::auth::AuthState;
use crate::util::auth::install_unauth_redirect;

/// Profile record rendered by this view.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct LandlordProfile {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub age: u32,
    pub avatar: Option<String>,
    pub property_count: u32,
    pub avg_rating: f64,
    pub compliance_pct: u8,
}

/// Look up a landlord profile by subject id.
///
/// Stub standing in for the backend profile endpoint; returns `None` for
/// an empty subject so the missing-record redirect stays exercised.
pub(crate) fn get_profile(subject: &str) -> Option<LandlordProfile> {
    if subject.is_empty() {
        return None;
    }
    Some(LandlordProfile {
        first_name: "Juan".to_owned(),
        last_name: "Pérez".to_owned(),
        email: "juan.perez@email.com".to_owned(),
        phone: "+57 300 123 4567".to_owned(),
        age: 35,
        avatar: Some(
            "https://images.unsplash.com/photo-1535713875002-d1d0cf377fde?q=80&w=2080".to_owned(),
        ),
        property_count: 2,
        avg_rating: 4.5,
        compliance_pct: 98,
    })
}

/// Number of filled stars in the five-star rating row.
pub(crate) fn filled_stars(avg_rating: f64) -> usize {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    {
        (avg_rating.max(0.0).floor() as usize).min(5)
    }
}

/// Read-only landlord profile page.
#[component]
pub fn LandlordProfilePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let profile = RwSignal::new(None::<LandlordProfile>);

    install_unauth_redirect(auth, navigate.clone());

    let navigate_error = navigate.clone();
    Effect::new(move || {
        let state = auth.get();
        if state.loading {
            return;
        }
        let Some(subject) = state.subject() else {
            return;
        };
        match get_profile(subject) {
            Some(record) => profile.set(Some(record)),
            None => navigate_error("/error", NavigateOptions::default()),
        }
    });

    view! {
        <div class="profile-page">
            <Navbar/>
            <Show
                when=move || profile.get().is_some()
                fallback=move || view! { <p class="profile-page__loading">"Cargando..."</p> }
            >
                {move || {
                    profile
                        .get()
                        .map(|record| view! { <ProfileBody record=record/> })
                }}
            </Show>
        </div>
    }
}

#[component]
fn ProfileBody(record: LandlordProfile) -> impl IntoView {
    let full_name = format!("{} {}", record.first_name, record.last_name);
    let avatar_initials = initials(&record.first_name, &record.last_name);
    let stars = filled_stars(record.avg_rating);
    let compliance_width = format!("{}%", record.compliance_pct);

    view! {
        <div class="profile-page__body">
            <div class="profile-page__back">
                <a class="btn" href="/arrendatario-dashboard/propiedades">
                    "Volver a propiedades"
                </a>
            </div>

            <div class="profile-page__identity">
                <span class="profile-page__avatar">
                    {match record.avatar.clone() {
                        Some(url) => view! { <img src=url alt=full_name.clone()/> }.into_any(),
                        None => {
                            view! {
                                <span class="profile-page__initials">{avatar_initials}</span>
                            }
                                .into_any()
                        }
                    }}
                </span>
                <div>
                    <h1 class="profile-page__name">{full_name.clone()}</h1>
                    <p class="profile-page__role">"Arrendatario"</p>
                </div>
            </div>

            <div class="profile-page__cards">
                <div class="profile-card">
                    <h2 class="profile-card__title">"Información Personal"</h2>
                    <div class="profile-card__grid">
                        <div class="profile-card__field">
                            <p class="profile-card__label">"Nombre"</p>
                            <p class="profile-card__value">{record.first_name.clone()}</p>
                        </div>
                        <div class="profile-card__field">
                            <p class="profile-card__label">"Apellido"</p>
                            <p class="profile-card__value">{record.last_name.clone()}</p>
                        </div>
                        <div class="profile-card__field">
                            <p class="profile-card__label">"Correo electrónico"</p>
                            <p class="profile-card__value">{record.email.clone()}</p>
                        </div>
                        <div class="profile-card__field">
                            <p class="profile-card__label">"Teléfono"</p>
                            <p class="profile-card__value">{record.phone.clone()}</p>
                        </div>
                        <div class="profile-card__field">
                            <p class="profile-card__label">"Edad"</p>
                            <p class="profile-card__value">{format!("{} años", record.age)}</p>
                        </div>
                    </div>
                </div>

                <div class="profile-card">
                    <h2 class="profile-card__title">"Información de Arrendamientos"</h2>
                    <div class="profile-card__stat">
                        <p class="profile-card__label">"Número de Propiedades"</p>
                        <p class="profile-card__stat-value">{record.property_count}</p>
                    </div>
                    <div class="profile-card__stat">
                        <p class="profile-card__label">"Calificación Promedio"</p>
                        <p class="profile-card__stat-value">{record.avg_rating}</p>
                        <span class="profile-card__stars">
                            {(0..5)
                                .map(|i| {
                                    view! {
                                        <span
                                            class="profile-card__star"
                                            class:profile-card__star--filled={i < stars}
                                        >
                                            "★"
                                        </span>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </span>
                    </div>
                    <div class="profile-card__stat">
                        <p class="profile-card__label">"Porcentaje de Cumplimiento"</p>
                        <p class="profile-card__stat-value">
                            {format!("{}%", record.compliance_pct)}
                        </p>
                        <div class="profile-card__meter">
                            <div class="profile-card__meter-fill" style:width=compliance_width></div>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
