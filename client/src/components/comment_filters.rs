//! Search, date range, and sort controls above the comment list.

use leptos::prelude::*;

use crate::state::comments::{CommentsAction, DateRange, FilterCriteria, SortDirection, SortKey};
use crate::util::dates::{format_input_date, parse_input_date};

/// Every control change is reported as a `CommentsAction`.
#[component]
pub fn CommentFilters(#[prop(into)] criteria: Signal<FilterCriteria>, dispatch: Callback<CommentsAction>) -> impl IntoView {
    let range_open = RwSignal::new(false);

    let set_start = move |ev: leptos::ev::Event| {
        let range = DateRange {
            start: parse_input_date(&event_target_value(&ev)),
            ..criteria.get_untracked().date_range
        };
        dispatch.run(CommentsAction::DateRangeChanged(range));
    };
    let set_end = move |ev: leptos::ev::Event| {
        let range = DateRange {
            end: parse_input_date(&event_target_value(&ev)),
            ..criteria.get_untracked().date_range
        };
        dispatch.run(CommentsAction::DateRangeChanged(range));
    };
    let clear_range = move |_| {
        dispatch.run(CommentsAction::DateRangeChanged(DateRange::default()));
        range_open.set(false);
    };

    view! {
        <div class="comment-filters">
            <input
                class="comment-filters__search"
                type="search"
                placeholder="Buscar por marca o modelo"
                prop:value=move || criteria.get().search
                on:input=move |ev| dispatch.run(CommentsAction::SearchChanged(event_target_value(&ev)))
            />

            <div class="comment-filters__range">
                <button class="btn comment-filters__range-toggle" on:click=move |_| range_open.update(|open| *open = !*open)>
                    {move || criteria.get().date_range.label()}
                </button>
                <Show when=move || range_open.get()>
                    <div class="comment-filters__range-panel">
                        <label class="comment-filters__label">
                            "Desde"
                            <input
                                type="date"
                                prop:value=move || format_input_date(criteria.get().date_range.start)
                                on:change=set_start
                            />
                        </label>
                        <label class="comment-filters__label">
                            "Hasta"
                            <input
                                type="date"
                                prop:value=move || format_input_date(criteria.get().date_range.end)
                                on:change=set_end
                            />
                        </label>
                        <button class="btn" on:click=clear_range>"Limpiar"</button>
                    </div>
                </Show>
            </div>

            <label class="comment-filters__label">
                "Ordenar por"
                <select
                    prop:value=move || criteria.get().sort_key.as_str()
                    on:change=move |ev| {
                        if let Some(key) = SortKey::parse(&event_target_value(&ev)) {
                            dispatch.run(CommentsAction::SortKeyChanged(key));
                        }
                    }
                >
                    {SortKey::ALL
                        .into_iter()
                        .map(|key| view! { <option value=key.as_str()>{key.label()}</option> })
                        .collect::<Vec<_>>()}
                </select>
            </label>

            <label class="comment-filters__label">
                "Orden"
                <select
                    prop:value=move || criteria.get().sort_direction.as_str()
                    on:change=move |ev| {
                        if let Some(direction) = SortDirection::parse(&event_target_value(&ev)) {
                            dispatch.run(CommentsAction::SortDirectionChanged(direction));
                        }
                    }
                >
                    {SortDirection::ALL
                        .into_iter()
                        .map(|direction| view! { <option value=direction.as_str()>{direction.label()}</option> })
                        .collect::<Vec<_>>()}
                </select>
            </label>
        </div>
    }
}
