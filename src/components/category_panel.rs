//! Category Panel Component
//!
//! Add-category form plus the filter chips (all, uncategorized, each category).

use leptos::prelude::*;

use crate::filter::CategoryFilter;
use crate::store::{store_add_category, store_set_category_filter, use_app_store, AppStateStoreFields};

#[component]
pub fn CategoryPanel() -> impl IntoView {
    let store = use_app_store();
    let (new_name, set_new_name) = signal(String::new());

    let add_category = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if store_add_category(&store, &new_name.get()).is_some() {
            set_new_name.set(String::new());
        }
    };

    let current = move || store.filter().with(|filter| filter.category);
    let chip_class = move |filter: CategoryFilter| {
        if current() == filter { "category-filter active" } else { "category-filter" }
    };

    view! {
        <section class="category-panel">
            <form id="category-form" class="category-form" on:submit=add_category>
                <input
                    type="text"
                    placeholder="New category..."
                    prop:value=move || new_name.get()
                    on:input=move |ev| set_new_name.set(event_target_value(&ev))
                />
                <button type="submit">"+"</button>
            </form>

            <div class="category-filters">
                <button
                    class=move || chip_class(CategoryFilter::All)
                    on:click=move |_| store_set_category_filter(&store, CategoryFilter::All)
                >
                    "All"
                </button>
                <button
                    class=move || chip_class(CategoryFilter::Uncategorized)
                    on:click=move |_| store_set_category_filter(&store, CategoryFilter::Uncategorized)
                >
                    "Uncategorized"
                </button>
                <For
                    each=move || store.board().with(|board| board.categories().to_vec())
                    key=|category| category.id
                    children=move |category| {
                        let filter = CategoryFilter::Category(category.id);
                        view! {
                            <button
                                class=move || chip_class(filter)
                                on:click=move |_| store_set_category_filter(&store, filter)
                            >
                                {category.name}
                            </button>
                        }
                    }
                />
            </div>
        </section>
    }
}
