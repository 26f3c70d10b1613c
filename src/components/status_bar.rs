//! Status Bar Component
//!
//! Remaining count, status filter, sort order and "clear completed".

use leptos::prelude::*;

use crate::filter::{StatusFilter, TaskSort};
use crate::store::{
    store_clear_completed, store_set_sort, store_set_status_filter, use_app_store, AppStateStoreFields,
};

#[component]
pub fn StatusBar() -> impl IntoView {
    let store = use_app_store();

    let remaining = move || store.board().with(|board| board.remaining_count());
    let completed = move || store.board().with(|board| board.completed_count());
    let status = move || store.filter().with(|filter| filter.status);
    let sort = move || store.filter().with(|filter| filter.sort);

    view! {
        <footer class="status-bar">
            <span class="todo-count">
                {move || match remaining() {
                    1 => "1 task left".to_string(),
                    n => format!("{} tasks left", n),
                }}
            </span>

            <div class="status-filters">
                {StatusFilter::ALL.iter().map(|&filter| view! {
                    <button
                        class=move || if status() == filter { "status-filter active" } else { "status-filter" }
                        on:click=move |_| store_set_status_filter(&store, filter)
                    >
                        {filter.label()}
                    </button>
                }).collect_view()}
            </div>

            <select
                class="sort-select"
                on:change=move |ev| store_set_sort(&store, TaskSort::from_str(&event_target_value(&ev)))
            >
                {TaskSort::ALL.iter().map(|&option| view! {
                    <option value=option.as_str() prop:selected=move || sort() == option>
                        {option.label()}
                    </option>
                }).collect_view()}
            </select>

            <Show when=move || { completed() > 0 }>
                <button class="clear-completed-btn" on:click=move |_| store_clear_completed(&store)>
                    {move || format!("Clear completed ({})", completed())}
                </button>
            </Show>
        </footer>
    }
}
