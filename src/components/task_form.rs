//! New Task Form Component
//!
//! Text, due date, priority and category for a new task.

use leptos::prelude::*;

use crate::components::{CategorySelect, PrioritySelector};
use crate::context::AppContext;
use crate::date;
use crate::models::{CategoryId, TaskDraft};
use crate::store::{store_add_task, use_app_store};

#[component]
pub fn NewTaskForm() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (text, set_text) = signal(String::new());
    let (due, set_due) = signal(String::new());
    let (priority, set_priority) = signal(ctx.default_priority);
    let (category, set_category) = signal::<Option<CategoryId>>(None);

    let add_task = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let draft = TaskDraft::new(text.get())
            .with_due_date(date::parse_input(&due.get()))
            .with_priority(priority.get())
            .with_category(category.get());

        // Priority and category stay selected for the next entry
        if store_add_task(&store, draft).is_some() {
            set_text.set(String::new());
            set_due.set(String::new());
        }
    };

    view! {
        <form id="todo-form" class="todo-form" on:submit=add_task>
            <div class="todo-form-row">
                <input
                    id="todo-input"
                    type="text"
                    placeholder="Add a task..."
                    prop:value=move || text.get()
                    on:input=move |ev| set_text.set(event_target_value(&ev))
                />
                <button type="submit">"Add"</button>
            </div>

            <div class="todo-form-row">
                <input
                    type="date"
                    class="due-input"
                    prop:value=move || due.get()
                    on:input=move |ev| set_due.set(event_target_value(&ev))
                />
                <PrioritySelector current=priority on_change=move |p| set_priority.set(p) />
                <CategorySelect current=category on_change=move |c| set_category.set(c) />
            </div>
        </form>
    }
}
