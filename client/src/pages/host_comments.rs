//! Host comment browser: every rating left on the host's vehicles.
//!
//! SYSTEM CONTEXT
//! ==============
//! Loads the profile once (roles for the access gate, id for the comment
//! query), then the host's comments. Auth and browser state are owned by the
//! page, so every visit starts from defaults. All list changes go through
//! `CommentsState::reduce`; the page only renders and forwards events.

#[cfg(test)]
#[path = "host_comments_test.rs"]
mod host_comments_test;

use leptos::prelude::*;

use crate::components::comment_card::{CommentCard, CommentCardSkeleton};
use crate::components::comment_filters::CommentFilters;
use crate::components::pagination_bar::PaginationBar;
use crate::state::auth::{Access, AuthState};
use crate::state::comments::{Comment, CommentsAction, CommentsState};
use crate::state::pagination::PAGE_SIZE;
use crate::state::toast::{ToastConfig, ToastState};
use crate::util::cancel::CancelToken;

/// Destructive toast raised when any step of the load fails.
pub const LOAD_ERROR_MESSAGE: &str = "No se pudieron cargar los comentarios";

pub const EMPTY_MESSAGE: &str = "No se encontraron comentarios con los filtros aplicados.";

/// Toast shown for a failed load.
pub fn load_error_toast() -> ToastConfig {
    ToastConfig::error(LOAD_ERROR_MESSAGE).title("Error")
}

/// Text rendered in place of the browser while access is not granted.
pub fn gate_message(access: Access) -> Option<&'static str> {
    match access {
        Access::Loading => Some("Cargando..."),
        Access::Denied => Some("No tienes permiso para ver esta página."),
        Access::Granted => None,
    }
}

#[component]
pub fn HostCommentsPage() -> impl IntoView {
    let auth = RwSignal::new(AuthState::default());
    let comments = RwSignal::new(CommentsState::default());
    let toasts = expect_context::<RwSignal<ToastState>>();
    let dispatch = Callback::new(move |action: CommentsAction| {
        comments.update(|state| *state = std::mem::take(state).reduce(action));
    });

    dispatch.run(CommentsAction::LoadStarted);

    let cancel = CancelToken::new();
    let cancel_on_cleanup = cancel.clone();
    on_cleanup(move || cancel_on_cleanup.cancel());

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(load(cancel, auth, dispatch, toasts));
    #[cfg(not(feature = "hydrate"))]
    let _ = (cancel, toasts);

    // Scroll to the top whenever the reducer moves the active page.
    Effect::new(move |previous: Option<u64>| {
        let seq = comments.with(|state| state.scroll_to_top_seq);
        if previous.is_some_and(|prev| prev != seq) {
            scroll_to_top();
        }
        seq
    });

    let access = Memo::new(move |_| auth.with(AuthState::host_access));

    view! {
        <div class="host-comments-page">
            {move || match gate_message(access.get()) {
                Some(message) => view! { <p class="host-comments-page__status">{message}</p> }.into_any(),
                None => view! { <CommentBrowser comments=comments dispatch=dispatch /> }.into_any(),
            }}
        </div>
    }
}

#[component]
fn CommentBrowser(comments: RwSignal<CommentsState>, dispatch: Callback<CommentsAction>) -> impl IntoView {
    let criteria = Memo::new(move |_| comments.with(|state| state.criteria.clone()));
    let controls = Memo::new(move |_| comments.with(CommentsState::page_controls));
    let page_items = Memo::new(move |_| comments.with(|state| state.page_items().to_vec()));
    let loading = Memo::new(move |_| comments.with(|state| state.loading));

    let on_select = Callback::new(move |page: usize| dispatch.run(CommentsAction::PageSelected(page)));
    let on_previous = Callback::new(move |()| dispatch.run(CommentsAction::PreviousPage));
    let on_next = Callback::new(move |()| dispatch.run(CommentsAction::NextPage));

    view! {
        <section class="host-comments">
            <header class="host-comments__header">
                <h1 class="host-comments__title">"Comentarios sobre mis vehículos"</h1>
                <BackToProfile />
            </header>
            <CommentFilters criteria=criteria dispatch=dispatch />
            <Show
                when=move || !loading.get()
                fallback=|| {
                    view! {
                        <div class="host-comments__list">
                            {(0..PAGE_SIZE).map(|_| view! { <CommentCardSkeleton /> }).collect::<Vec<_>>()}
                        </div>
                    }
                }
            >
                <Show
                    when=move || page_items.with(|items| !items.is_empty())
                    fallback=|| view! { <p class="host-comments__empty">{EMPTY_MESSAGE}</p> }
                >
                    <div class="host-comments__list">
                        <For
                            each=move || page_items.get()
                            key=|comment: &Comment| comment.id
                            children=move |comment: Comment| view! { <CommentCard comment=comment /> }
                        />
                    </div>
                </Show>
            </Show>
            <PaginationBar controls=controls on_select=on_select on_previous=on_previous on_next=on_next />
        </section>
    }
}

/// Full navigation to the profile page, which this app's router does not serve.
#[component]
fn BackToProfile() -> impl IntoView {
    let href = crate::config::profile_url();
    view! {
        <a
            class="btn"
            href=href
            rel="external"
            on:click=move |ev| {
                ev.prevent_default();
                #[cfg(feature = "hydrate")]
                {
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href(href);
                    }
                }
            }
        >
            "Atrás"
        </a>
    }
}

fn scroll_to_top() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    }
}

/// Profile, then comments. Results arriving after `cancel` are dropped.
#[cfg(feature = "hydrate")]
async fn load(
    cancel: CancelToken,
    auth: RwSignal<AuthState>,
    dispatch: Callback<CommentsAction>,
    toasts: RwSignal<ToastState>,
) {
    use crate::net::api;

    let token = crate::util::storage::auth_token().unwrap_or_default();
    let profile = api::fetch_profile(&token).await;
    if cancel.is_cancelled() {
        return;
    }
    let profile = match profile {
        Ok(profile) => profile,
        Err(e) => {
            auth.set(AuthState::failed());
            fail(&e, dispatch, toasts);
            return;
        }
    };
    auth.set(AuthState::loaded(profile.clone()));

    let result = fetch_comments(&token, &profile).await;
    if cancel.is_cancelled() {
        return;
    }
    match result {
        Ok(list) => dispatch.run(CommentsAction::Loaded(list)),
        Err(e) => fail(&e, dispatch, toasts),
    }
}

#[cfg(feature = "hydrate")]
async fn fetch_comments(
    token: &str,
    profile: &crate::net::types::ProfileRecord,
) -> Result<Vec<Comment>, crate::net::error::ApiError> {
    use crate::net::api;

    let host_id = api::require_identity(profile)?;
    let records = api::fetch_host_comments(token, host_id).await?;
    crate::state::comments::normalize_comments(records)
}

#[cfg(feature = "hydrate")]
fn fail(err: &crate::net::error::ApiError, dispatch: Callback<CommentsAction>, toasts: RwSignal<ToastState>) {
    log::warn!("comment load failed: {err}");
    crate::components::toast::push_toast(toasts, load_error_toast());
    dispatch.run(CommentsAction::LoadFailed(err.to_string()));
}
