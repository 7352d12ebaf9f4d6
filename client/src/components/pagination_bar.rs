//! Page navigation under the comment list.

use leptos::prelude::*;

use crate::state::pagination::PageControls;

/// Renders nothing when `controls.visible` is false.
#[component]
pub fn PaginationBar(
    #[prop(into)] controls: Signal<PageControls>,
    on_select: Callback<usize>,
    on_previous: Callback<()>,
    on_next: Callback<()>,
) -> impl IntoView {
    view! {
        <Show when=move || controls.get().visible>
            <nav class="pagination" aria-label="Paginación">
                <Show when=move || controls.get().show_previous>
                    <button class="btn pagination__prev" on:click=move |_| on_previous.run(())>
                        "Anterior"
                    </button>
                </Show>
                {move || {
                    controls
                        .get()
                        .links
                        .into_iter()
                        .map(|link| {
                            let class = if link.active {
                                "btn pagination__link pagination__link--active"
                            } else {
                                "btn pagination__link"
                            };
                            view! {
                                <button
                                    class=class
                                    aria-current=if link.active { Some("page") } else { None }
                                    on:click=move |_| on_select.run(link.number)
                                >
                                    {link.number}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
                <Show when=move || controls.get().ellipsis>
                    <span class="pagination__ellipsis">"…"</span>
                </Show>
                <Show when=move || controls.get().show_next>
                    <button class="btn pagination__next" on:click=move |_| on_next.run(())>
                        "Siguiente"
                    </button>
                </Show>
            </nav>
        </Show>
    }
}
