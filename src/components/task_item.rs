//! Task Item Component
//!
//! One row of the list. The editing flag picks between the read-only row
//! and the inline edit form.

use chrono::NaiveDate;
use leptos::prelude::*;

use crate::components::{CategorySelect, PrioritySelector};
use crate::context::AppContext;
use crate::date;
use crate::models::{Task, TaskEdit};
use crate::store::{
    store_begin_edit, store_cancel_edit, store_delete_task, store_save_edit, store_toggle_task,
    use_app_store,
};

#[component]
pub fn TaskItem(task: Task, category_name: Option<String>) -> impl IntoView {
    if task.editing {
        view! { <TaskEditRow task=task /> }.into_any()
    } else {
        view! { <TaskViewRow task=task category_name=category_name /> }.into_any()
    }
}

/// CSS classes for a read-only row: (`<li>` classes, text `<span>` classes)
pub fn row_classes(task: &Task, today: NaiveDate) -> (String, &'static str) {
    let mut row = format!("todo-item priority-{}", task.priority.as_str());
    if task.completed { row.push_str(" done"); }
    if task.is_overdue(today) { row.push_str(" overdue"); }

    let text = if task.completed { "todo-text completed" } else { "todo-text" };
    (row, text)
}

#[component]
fn TaskViewRow(task: Task, category_name: Option<String>) -> impl IntoView {
    let store = use_app_store();
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (row_class, text_class) = row_classes(&task, ctx.today);
    let Task { id, text, completed, due_date, priority, .. } = task;
    let due_label = due_date.map(|due| date::describe_due(due, ctx.today));

    view! {
        <li class=row_class>
            <input
                type="checkbox"
                checked=completed
                on:change=move |_| store_toggle_task(&store, id)
            />

            <span class=text_class>{text}</span>

            <span class=format!("priority-badge {}", priority.as_str())>{priority.label()}</span>

            {due_label.map(|label| view! { <span class="due-label">{label}</span> })}

            {category_name.map(|name| view! { <span class="category-chip">{name}</span> })}

            <button class="edit-btn" on:click=move |_| store_begin_edit(&store, id)>"Edit"</button>
            <button class="delete-btn" on:click=move |_| store_delete_task(&store, id)>"Delete"</button>
        </li>
    }
}

/// Enter saves, Escape cancels
#[component]
fn TaskEditRow(task: Task) -> impl IntoView {
    let store = use_app_store();
    let id = task.id;

    let (text, set_text) = signal(task.text.clone());
    let (due, set_due) = signal(date::format_input(task.due_date));
    let (priority, set_priority) = signal(task.priority);
    let (category, set_category) = signal(task.category_id);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let edit = TaskEdit::new(text.get())
            .with_due_date(date::parse_input(&due.get()))
            .with_priority(priority.get())
            .with_category(category.get());
        if !store_save_edit(&store, id, edit) {
            log::debug!("Task #{} stays in edit mode: empty text", id);
        }
    };

    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        if ev.key() == "Escape" {
            store_cancel_edit(&store, id);
        }
    };

    view! {
        <li class="todo-item editing">
            <form class="edit-form" on:submit=on_submit on:keydown=on_keydown>
                <input
                    type="text"
                    class="edit-input"
                    prop:value=move || text.get()
                    on:input=move |ev| set_text.set(event_target_value(&ev))
                />
                <input
                    type="date"
                    class="due-input"
                    prop:value=move || due.get()
                    on:input=move |ev| set_due.set(event_target_value(&ev))
                />
                <PrioritySelector current=priority on_change=move |p| set_priority.set(p) />
                <CategorySelect current=category on_change=move |c| set_category.set(c) />

                <button type="submit" class="save-btn">"Save"</button>
                <button type="button" class="cancel-btn" on:click=move |_| store_cancel_edit(&store, id)>
                    "Cancel"
                </button>
            </form>
        </li>
    }
}
