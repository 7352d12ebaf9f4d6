//! Dialog for reporting a renter's profile.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted once per comment card. Opening checks whether the signed-in host
//! already has an active report against the renter; submission is validated
//! locally first and backend rejections are classified into lockout states.

use leptos::prelude::*;

use crate::components::toast::push_toast;
use crate::state::report::{ReportAction, ReportDialogState, ReportReason};
use crate::state::toast::{ToastConfig, ToastState, VALIDATION_DELAY_MS};
use crate::util::cancel::CancelToken;

/// Trigger button plus the modal it opens.
#[component]
pub fn ReportProfileDialog(
    renter_id: i64,
    #[prop(into)] renter_name: String,
    #[prop(into, default = "Reportar".to_owned())] trigger_label: String,
) -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let state = RwSignal::new(ReportDialogState::default());
    let dispatch = move |action: ReportAction| state.update(|s| *s = std::mem::take(s).reduce(action));

    let cancel = CancelToken::new();
    let cancel_on_cleanup = cancel.clone();
    on_cleanup(move || cancel_on_cleanup.cancel());
    let cancel = StoredValue::new(cancel);

    let on_open = move |_| {
        dispatch(ReportAction::Opened);
        #[cfg(feature = "hydrate")]
        {
            let Some(token) = crate::util::storage::auth_token() else {
                return;
            };
            let cancel = cancel.get_value();
            leptos::task::spawn_local(async move {
                match crate::net::api::fetch_reports_against(&token, renter_id).await {
                    Ok(reports) => {
                        let reported = crate::state::report::has_active_report(&reports);
                        if cancel.keep(()).is_some() {
                            dispatch(ReportAction::PriorReportsChecked(reported));
                        }
                    }
                    Err(e) => log::warn!("prior report check failed for renter {renter_id}: {e}"),
                }
            });
        }
    };

    let on_close = Callback::new(move |()| dispatch(ReportAction::Closed));

    let on_submit = move |_| {
        let request = match state.get_untracked().validate(renter_id) {
            Ok(request) => request,
            Err(invalid) => {
                push_toast(toasts, ToastConfig::error(invalid.to_string()).delay_ms(VALIDATION_DELAY_MS));
                if invalid.closes_dialog() {
                    dispatch(ReportAction::Closed);
                }
                return;
            }
        };
        dispatch(ReportAction::SubmitStarted);
        #[cfg(feature = "hydrate")]
        {
            use crate::state::report::{SUBMITTED_MESSAGE, classify_failure};

            let token = crate::util::storage::auth_token().unwrap_or_default();
            let cancel = cancel.get_value();
            leptos::task::spawn_local(async move {
                let result = crate::net::api::submit_report(&token, &request).await;
                if cancel.is_cancelled() {
                    return;
                }
                match result {
                    Ok(()) => {
                        dispatch(ReportAction::SubmitSucceeded);
                        push_toast(toasts, ToastConfig::success(SUBMITTED_MESSAGE));
                    }
                    Err(e) => {
                        log::error!("report submission for renter {renter_id} failed: {e}");
                        let failure = classify_failure(&e);
                        push_toast(toasts, ToastConfig::error(failure.to_string()));
                        dispatch(ReportAction::SubmitFailed(failure));
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (request, cancel);
        }
    };

    let title = format!("Reportar a {renter_name}");

    view! {
        <button class="btn comment-card__report" on:click=on_open>
            {trigger_label}
        </button>
        <Show when=move || state.get().open>
            <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
                <div class="dialog dialog--report" on:click=move |ev| ev.stop_propagation()>
                    <h2>{title.clone()}</h2>
                    <p class="dialog__description">{move || state.get().description()}</p>

                    <label class="dialog__label">
                        "Motivo del reporte"
                        <select
                            class="dialog__input"
                            prop:disabled=move || state.get().inputs_locked()
                            prop:value=move || state.get().reason.map_or("", ReportReason::wire)
                            on:change=move |ev| {
                                dispatch(ReportAction::ReasonSelected(ReportReason::parse(&event_target_value(&ev))));
                            }
                        >
                            <option value="">"Seleccione un motivo"</option>
                            {ReportReason::ALL
                                .into_iter()
                                .map(|reason| view! { <option value=reason.wire()>{reason.label()}</option> })
                                .collect::<Vec<_>>()}
                        </select>
                    </label>

                    <label class="dialog__label">
                        <span>"Información adicional"</span>
                        <span class="dialog__counter">{move || state.get().details_counter()}</span>
                        <textarea
                            class="dialog__input dialog__textarea"
                            rows="3"
                            maxlength="200"
                            placeholder="Proporcione detalles adicionales sobre el reporte..."
                            prop:disabled=move || state.get().inputs_locked()
                            prop:value=move || state.get().details
                            on:input=move |ev| dispatch(ReportAction::DetailsEdited(event_target_value(&ev)))
                        ></textarea>
                    </label>
                    <Show when=move || state.get().reason.is_some_and(ReportReason::requires_details)>
                        <p class="dialog__hint">"Este motivo requiere información adicional"</p>
                    </Show>

                    <div class="dialog__actions">
                        <button
                            class="btn"
                            prop:disabled=move || state.get().submitting
                            on:click=move |_| on_close.run(())
                        >
                            "Cancelar"
                        </button>
                        <button
                            class=move || {
                                if state.get().inputs_locked() { "btn btn--destructive" } else { "btn btn--primary" }
                            }
                            prop:disabled=move || state.get().submit_blocked()
                            on:click=on_submit
                        >
                            {move || state.get().submit_label()}
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
