//! Generic error and not-found screens.

use leptos::prelude::*;

use crate::components::navbar::Navbar;

/// Fallback screen for unrecoverable view errors (e.g. a missing profile).
#[component]
pub fn ErrorPage() -> impl IntoView {
    view! {
        <div class="error-page">
            <Navbar/>
            <div class="error-page__body">
                <h1 class="error-page__title">"Algo salió mal"</h1>
                <p class="error-page__message">
                    "No pudimos cargar la información solicitada. Por favor, inténtalo de nuevo más tarde."
                </p>
                <a class="btn btn--primary" href="/">"Volver al inicio"</a>
            </div>
        </div>
    }
}

/// Router fallback for unknown paths.
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="error-page">
            <Navbar/>
            <div class="error-page__body">
                <h1 class="error-page__title">"Página no encontrada"</h1>
                <a class="btn btn--primary" href="/">"Volver al inicio"</a>
            </div>
        </div>
    }
}
