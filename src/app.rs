//! App shell: shared context providers, router, and the toast overlay.
//!
//! ARCHITECTURE
//! ============
//! All shared state is provided here as `RwSignal` contexts and consumed
//! by pages/components via `expect_context` — context flows down through
//! composition, never through a process-wide singleton. The session user
//! is resolved once at startup.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::components::toaster::Toaster;
use crate::pages::create_profile::CreateProfilePage;
use crate::pages::error::{ErrorPage, NotFoundPage};
use crate::pages::home::HomePage;
use crate::pages::landlord_profile::LandlordProfilePage;
use crate::pages::property_search::PropertySearchPage;
use crate::pages::rental_history::RentalHistoryPage;
use crate::pages::role_select::RoleSelectPage;
use crate::pages::tenant_list::TenantListPage;
use crate::state::auth::AuthState;
use crate::state::setup::ProfileSetupState;
use crate::state::toasts::ToastsState;

/// Root component wiring contexts, routes, and the toast overlay.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let toasts = RwSignal::new(ToastsState::default());
    let setup = RwSignal::new(ProfileSetupState::default());
    provide_context(auth);
    provide_context(toasts);
    provide_context(setup);

    // Resolve the session user once; the guard token covers teardown
    // during the initial request.
    #[cfg(feature = "hydrate")]
    {
        let token = crate::util::cancel::scoped_token();
        leptos::task::spawn_local(async move {
            let user = crate::net::api::fetch_current_user().await;
            if token.is_cancelled() {
                return;
            }
            auth.update(|a| {
                a.user = user;
                a.loading = false;
            });
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        auth.update(|a| a.loading = false);
    }

    view! {
        <Title text="LIMITLESS"/>
        <Router>
            <main class="app">
                <Routes fallback=|| view! { <NotFoundPage/> }>
                    <Route path=path!("/") view=HomePage/>
                    <Route path=path!("/selecciona-rol") view=RoleSelectPage/>
                    <Route path=path!("/crear-perfil") view=CreateProfilePage/>
                    <Route path=path!("/inquilino-dashboard/historial") view=RentalHistoryPage/>
                    <Route
                        path=path!("/inquilino-dashboard/buscador-propiedades")
                        view=PropertySearchPage
                    />
                    <Route
                        path=path!("/arrendatario-dashboard/propiedades")
                        view=PropertySearchPage
                    />
                    <Route path=path!("/arrendatario-dashboard/inquilinos") view=TenantListPage/>
                    <Route path=path!("/arrendatario-dashboard/perfil") view=LandlordProfilePage/>
                    <Route path=path!("/error") view=ErrorPage/>
                </Routes>
            </main>
            <Toaster/>
        </Router>
    }
}
