//! Task List Component
//!
//! Renders the filtered board. Rows are keyed on every field, so any
//! change to a task rebuilds its row from scratch.

use leptos::prelude::*;

use crate::components::TaskItem;
use crate::store::{store_visible_tasks, use_app_store, AppStateStoreFields};

#[component]
pub fn TaskList() -> impl IntoView {
    let store = use_app_store();

    let visible = move || store_visible_tasks(&store);
    let board_empty = move || store.board().with(|board| board.tasks().is_empty());

    view! {
        <ul id="todo-list" class="todo-list">
            <For
                each=visible
                key=|task| {
                    (
                        task.id,
                        task.text.clone(),
                        task.completed,
                        task.editing,
                        task.due_date,
                        task.priority,
                        task.category_id,
                    )
                }
                children=move |task| {
                    let category_name = task.category_id.and_then(|cid| {
                        store.board().with_untracked(|board| board.category_name(cid).map(str::to_string))
                    });
                    view! { <TaskItem task=task category_name=category_name /> }
                }
            />
        </ul>

        <Show when=board_empty>
            <p class="empty-hint">"Nothing to do yet."</p>
        </Show>
    }
}
