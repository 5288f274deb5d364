//! Top navigation bar with auth-aware login/logout control.

use leptos::prelude::*;

use crate::state::auth::AuthState;

/// Marketplace navbar: brand, static links, and a session control that
/// shows Login or Logout depending on the identity context.
#[component]
pub fn Navbar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let on_login = move |_| {
        #[cfg(feature = "hydrate")]
        {
            // Login is a full-page redirect to the identity collaborator.
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href("/auth/login");
            }
        }
    };

    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                crate::net::api::logout().await;
                auth.update(|a| a.user = None);
                if let Some(window) = web_sys::window() {
                    let _ = window.location().set_href("/");
                }
            });
        }
    };

    view! {
        <nav class="navbar">
            <div class="navbar__inner">
                <span class="navbar__brand">"LIMITLESS"</span>
                <div class="navbar__links">
                    <a class="navbar__link" href="/">"Home"</a>
                    <a class="navbar__link" href="/about-us">"About Us"</a>
                    <a class="navbar__link" href="/projects">"Contact Us"</a>
                    <Show when=move || !auth.get().is_authenticated()>
                        <button class="navbar__link navbar__auth" on:click=on_login>
                            "Login"
                        </button>
                    </Show>
                    <Show when=move || auth.get().is_authenticated()>
                        <button class="navbar__link navbar__auth" on:click=on_logout>
                            "Logout"
                        </button>
                    </Show>
                </div>
            </div>
        </nav>
    }
}
