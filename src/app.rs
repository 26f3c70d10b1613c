//! To-Do Widget App
//!
//! Loads the board from local storage, provides shared state, and writes
//! the board back after every change.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{CategoryPanel, NewTaskForm, StatusBar, TaskList};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::date;
use crate::storage::{BrowserStorage, TodoRepository};
use crate::store::{AppState, AppStateStoreFields};

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let repository = TodoRepository::new(BrowserStorage, config.storage.clone());
    let store = Store::new(AppState::new(repository.load_board()));

    provide_context(store);
    provide_context(AppContext::new(date::today(), config.default_priority));

    // Save on every board change; the first run only subscribes
    Effect::new(move |subscribed: Option<bool>| {
        store.board().with(|board| {
            if subscribed.is_some() {
                if let Err(e) = repository.save_board(board) {
                    log::warn!("Failed to save board: {}", e);
                }
            }
        });
        true
    });

    view! {
        <div class="todo-app">
            <h1>{config.title}</h1>

            <NewTaskForm />

            <CategoryPanel />

            <TaskList />

            <StatusBar />
        </div>
    }
}
