//! Toast overlay rendering the shared notification queue.

use leptos::prelude::*;

use crate::state::toasts::{Toast, ToastVariant, ToastsState};

/// How long a toast stays visible before auto-dismissal.
#[cfg(feature = "hydrate")]
const TOAST_DISMISS_MS: u64 = 5000;

/// Queue a toast and schedule its auto-dismissal.
pub fn show_toast(toasts: RwSignal<ToastsState>, toast: Toast) {
    let id = toast.id.clone();
    toasts.update(|s| s.push(toast));
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(std::time::Duration::from_millis(TOAST_DISMISS_MS)).await;
            toasts.update(|s| s.dismiss(&id));
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
    }
}

/// Fixed overlay listing queued toasts, newest last.
#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastsState>>();

    view! {
        <div class="toaster">
            {move || {
                toasts
                    .get()
                    .items
                    .into_iter()
                    .map(|toast| {
                        let Toast { id, title, description, variant } = toast;
                        view! {
                            <div
                                class="toast"
                                class:toast--destructive={variant == ToastVariant::Destructive}
                            >
                                <div class="toast__body">
                                    <p class="toast__title">{title}</p>
                                    <p class="toast__description">{description}</p>
                                </div>
                                <button
                                    class="toast__dismiss"
                                    on:click=move |_| toasts.update(|s| s.dismiss(&id))
                                    aria-label="Cerrar"
                                >
                                    "✕"
                                </button>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
