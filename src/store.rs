//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Every mutation
//! goes through one of the helpers below so the board write is the only
//! thing that triggers a re-render and a save.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::board::TodoBoard;
use crate::filter::{CategoryFilter, StatusFilter, TaskFilter, TaskSort};
use crate::models::{CategoryId, Task, TaskDraft, TaskEdit, TaskId};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Tasks, categories and id counters
    pub board: TodoBoard,
    /// Current view filter (not persisted)
    pub filter: TaskFilter,
}

impl AppState {
    pub fn new(board: TodoBoard) -> Self {
        Self {
            board,
            filter: TaskFilter::default(),
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

/// Runs `f` on a copy of the board and writes it back only when `changed`
/// holds, so rejected actions neither re-render nor save
fn commit_board<R>(
    store: &AppStore,
    f: impl FnOnce(&mut TodoBoard) -> R,
    changed: impl FnOnce(&R) -> bool,
) -> R {
    let mut board = store.board().get_untracked();
    let result = f(&mut board);
    if changed(&result) {
        *store.board().write() = board;
    }
    result
}

// ========================
// Task Helpers
// ========================

pub fn store_add_task(store: &AppStore, draft: TaskDraft) -> Option<TaskId> {
    let id = commit_board(store, |board| board.add_task(draft), Option::is_some);
    match id {
        Some(id) => log::debug!("Added task #{}", id),
        None => log::debug!("Ignored task: empty text or no ids left"),
    }
    id
}

pub fn store_toggle_task(store: &AppStore, id: TaskId) {
    if !commit_board(store, |board| board.toggle_task(id), |found| *found) {
        log::warn!("Toggle: task #{} not found", id);
    }
}

pub fn store_delete_task(store: &AppStore, id: TaskId) {
    if commit_board(store, |board| board.delete_task(id), |found| *found) {
        log::debug!("Deleted task #{}", id);
    }
}

pub fn store_begin_edit(store: &AppStore, id: TaskId) {
    commit_board(store, |board| board.begin_edit(id), |found| *found);
}

/// Returns false when the edit was rejected (empty text)
pub fn store_save_edit(store: &AppStore, id: TaskId, edit: TaskEdit) -> bool {
    commit_board(store, |board| board.save_edit(id, edit), |saved| *saved)
}

pub fn store_cancel_edit(store: &AppStore, id: TaskId) {
    commit_board(store, |board| board.cancel_edit(id), |found| *found);
}

pub fn store_clear_completed(store: &AppStore) {
    let removed = commit_board(store, |board| board.clear_completed(), |removed| *removed > 0);
    log::debug!("Cleared {} completed tasks", removed);
}

// ========================
// Category Helpers
// ========================

pub fn store_add_category(store: &AppStore, name: &str) -> Option<CategoryId> {
    let id = commit_board(store, |board| board.add_category(name), Option::is_some);
    if let Some(id) = id {
        log::debug!("Added category #{}", id);
    }
    id
}

// ========================
// Filter Helpers
// ========================

pub fn store_set_category_filter(store: &AppStore, category: CategoryFilter) {
    store.filter().write().category = category;
}

pub fn store_set_status_filter(store: &AppStore, status: StatusFilter) {
    store.filter().write().status = status;
}

pub fn store_set_sort(store: &AppStore, sort: TaskSort) {
    store.filter().write().sort = sort;
}

/// Rows to render for the current filter; tracks both board and filter
pub fn store_visible_tasks(store: &AppStore) -> Vec<Task> {
    let filter = store.filter().get();
    store.board().with(|board| board.visible_tasks(&filter))
}
