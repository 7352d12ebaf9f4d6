//! Toast notification and the outlet that hosts the active one.
//!
//! SYSTEM CONTEXT
//! ==============
//! `ToastOutlet` is mounted once by `app::App`. Each shown toast is rendered as
//! a fresh `Toast`, which owns its auto-dismiss timer and cancels it when torn
//! down.

use leptos::prelude::*;

use crate::state::toast::{ToastConfig, ToastState};

/// Raise a toast from any component with access to the toast context.
pub fn push_toast(toasts: RwSignal<ToastState>, config: ToastConfig) {
    toasts.update(|state| {
        state.show(config);
    });
}

/// Renders the current toast, if any.
#[component]
pub fn ToastOutlet() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let current = Memo::new(move |_| toasts.with(|state| state.current.clone()));

    move || {
        current.get().map(|active| {
            let id = active.id;
            let on_close = Callback::new(move |()| toasts.update(|state| state.dismiss(id)));
            view! { <Toast config=active.config on_close=on_close /> }
        })
    }
}

/// Single notification: optional title, message, and a manual close control.
///
/// `on_close` runs once, either from the "×" button or after `delay_ms`.
#[component]
pub fn Toast(config: ToastConfig, on_close: Callback<()>) -> impl IntoView {
    #[cfg(feature = "hydrate")]
    {
        use crate::util::timer::{AutoDismiss, BrowserScheduler};

        let dismiss = StoredValue::new_local(AutoDismiss::start(&BrowserScheduler, config.delay_ms, move || {
            on_close.run(());
        }));
        on_cleanup(move || dismiss.update_value(AutoDismiss::cancel));
    }

    let ToastConfig {
        message,
        title,
        variant,
        ..
    } = config;

    view! {
        <div class=variant.class() role="status" aria-live="polite">
            <div class="toast__content">
                {title.map(|title| view! { <p class="toast__title">{title}</p> })}
                <p class="toast__message">{message}</p>
            </div>
            <button class="toast__close" aria-label="Cerrar" on:click=move |_| on_close.run(())>
                "×"
            </button>
        </div>
    }
}
