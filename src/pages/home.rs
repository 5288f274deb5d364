//! Landing page.

use leptos::prelude::*;

use crate::components::navbar::Navbar;

/// Public landing screen with entry points into the marketplace.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <Navbar/>
            <section class="home-page__hero">
                <h1 class="home-page__title">"Encuentra tu próximo hogar"</h1>
                <p class="home-page__subtitle">
                    "Propiedades verificadas, arrendamiento sin complicaciones."
                </p>
                <a class="btn btn--primary" href="/selecciona-rol">
                    "Comenzar"
                </a>
            </section>
        </div>
    }
}
