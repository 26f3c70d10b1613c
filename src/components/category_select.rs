//! Category Select Component
//!
//! Drop-down of existing categories with a "no category" entry.

use leptos::prelude::*;

use crate::models::CategoryId;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn CategorySelect(
    current: ReadSignal<Option<CategoryId>>,
    on_change: impl Fn(Option<CategoryId>) + Copy + 'static,
) -> impl IntoView {
    let store = use_app_store();
    let categories = move || store.board().with(|board| board.categories().to_vec());

    view! {
        <select
            class="category-select"
            on:change=move |ev| on_change(event_target_value(&ev).parse::<CategoryId>().ok())
        >
            <option value="" prop:selected=move || current.get().is_none()>"No category"</option>
            <For
                each=categories
                key=|category| category.id
                children=move |category| {
                    let id = category.id;
                    view! {
                        <option value=id.to_string() prop:selected=move || current.get() == Some(id)>
                            {category.name}
                        </option>
                    }
                }
            />
        </select>
    }
}
