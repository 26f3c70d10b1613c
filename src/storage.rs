//! Persistence Layer
//!
//! Key/value seam over the browser's local storage and the repository
//! that reads and writes the whole task and category lists as JSON.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::board::TodoBoard;
use crate::config::StorageKeys;
use crate::error::{StorageError, StorageResult};
use crate::models::{Category, Task};

/// Minimal string key/value store
pub trait KeyValueStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    fn set(&self, key: &str, value: &str) -> StorageResult<()>;
}

/// `window.localStorage`, looked up on every call so the handle can be
/// shared freely across reactive closures
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn local_storage() -> StorageResult<web_sys::Storage> {
        let window = web_sys::window().ok_or_else(|| StorageError::Unavailable("no window".to_string()))?;
        window
            .local_storage()
            .map_err(|e| StorageError::Unavailable(format!("{:?}", e)))?
            .ok_or_else(|| StorageError::Unavailable("localStorage disabled".to_string()))
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Self::local_storage()?
            .get_item(key)
            .map_err(|e| StorageError::access(key, format!("{:?}", e)))
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        Self::local_storage()?
            .set_item(key, value)
            .map_err(|e| StorageError::access(key, format!("{:?}", e)))
    }
}

/// Loads and saves the board as two JSON arrays
#[derive(Debug, Clone)]
pub struct TodoRepository<S: KeyValueStore> {
    store: S,
    keys: StorageKeys,
}

impl<S: KeyValueStore> TodoRepository<S> {
    pub fn new(store: S, keys: StorageKeys) -> Self {
        Self { store, keys }
    }

    pub fn load_tasks(&self) -> Vec<Task> {
        self.load_records(&self.keys.tasks_key)
    }

    pub fn save_tasks(&self, tasks: &[Task]) -> StorageResult<()> {
        self.save_records(&self.keys.tasks_key, tasks)
    }

    pub fn load_categories(&self) -> Vec<Category> {
        self.load_records(&self.keys.categories_key)
    }

    pub fn save_categories(&self, categories: &[Category]) -> StorageResult<()> {
        self.save_records(&self.keys.categories_key, categories)
    }

    /// Missing or malformed entries load as an empty board
    pub fn load_board(&self) -> TodoBoard {
        let board = TodoBoard::from_parts(self.load_tasks(), self.load_categories());
        log::info!(
            "Loaded {} tasks, {} categories",
            board.tasks().len(),
            board.categories().len()
        );
        board
    }

    pub fn save_board(&self, board: &TodoBoard) -> StorageResult<()> {
        self.save_tasks(board.tasks())?;
        self.save_categories(board.categories())?;
        log::debug!("Saved {} tasks", board.tasks().len());
        Ok(())
    }

    fn load_records<T: DeserializeOwned>(&self, key: &str) -> Vec<T> {
        match self.try_load_records(key) {
            Ok(records) => records,
            Err(e) => {
                log::warn!("Treating '{}' as empty: {}", key, e);
                Vec::new()
            }
        }
    }

    fn try_load_records<T: DeserializeOwned>(&self, key: &str) -> StorageResult<Vec<T>> {
        match self.store.get(key)? {
            Some(raw) => serde_json::from_str(&raw).map_err(|source| StorageError::Decode {
                key: key.to_string(),
                source,
            }),
            None => Ok(Vec::new()),
        }
    }

    fn save_records<T: Serialize>(&self, key: &str, records: &[T]) -> StorageResult<()> {
        let json = serde_json::to_string(records)?;
        self.store.set(key, &json)
    }
}

#[cfg(test)]
pub(crate) mod memory {
    use std::cell::RefCell;
    use std::collections::HashMap;

    use super::KeyValueStore;
    use crate::error::StorageResult;

    /// In-memory stand-in for local storage
    #[derive(Debug, Default)]
    pub struct MemoryStore {
        entries: RefCell<HashMap<String, String>>,
    }

    impl MemoryStore {
        pub fn with_entry(self, key: &str, value: &str) -> Self {
            self.entries.borrow_mut().insert(key.to_string(), value.to_string());
            self
        }

        pub fn raw(&self, key: &str) -> Option<String> {
            self.entries.borrow().get(key).cloned()
        }
    }

    impl KeyValueStore for MemoryStore {
        fn get(&self, key: &str) -> StorageResult<Option<String>> {
            Ok(self.entries.borrow().get(key).cloned())
        }

        fn set(&self, key: &str, value: &str) -> StorageResult<()> {
            self.entries.borrow_mut().insert(key.to_string(), value.to_string());
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::memory::MemoryStore;
    use super::*;
    use crate::models::{Priority, TaskDraft};
    use chrono::NaiveDate;

    fn setup_repo(store: MemoryStore) -> TodoRepository<MemoryStore> {
        TodoRepository::new(store, StorageKeys::default())
    }

    #[test]
    fn test_missing_entries_load_empty_board() {
        let repo = setup_repo(MemoryStore::default());
        let board = repo.load_board();
        assert!(board.tasks().is_empty());
        assert!(board.categories().is_empty());
    }

    #[test]
    fn test_malformed_entries_load_empty_board() {
        let keys = StorageKeys::default();
        let store = MemoryStore::default()
            .with_entry(&keys.tasks_key, "{not json")
            .with_entry(&keys.categories_key, "null");
        let board = setup_repo(store).load_board();
        assert!(board.tasks().is_empty());
        assert!(board.categories().is_empty());
    }

    #[test]
    fn test_reload_restores_same_tasks() {
        let repo = setup_repo(MemoryStore::default());

        let mut board = TodoBoard::new();
        let work = board.add_category("Work").unwrap();
        board.add_task(
            TaskDraft::new("Quarterly review")
                .with_due_date(NaiveDate::from_ymd_opt(2026, 12, 15))
                .with_priority(Priority::High)
                .with_category(Some(work)),
        );
        board.add_task(TaskDraft::new("Water plants"));
        board.toggle_task(2);
        repo.save_board(&board).unwrap();

        let reloaded = repo.load_board();
        assert_eq!(reloaded.tasks(), board.tasks());
        assert_eq!(reloaded.categories(), board.categories());
    }

    #[test]
    fn test_reload_drops_editing_flag() {
        let repo = setup_repo(MemoryStore::default());
        let mut board = TodoBoard::new();
        board.add_task(TaskDraft::new("Mid-edit"));
        board.begin_edit(1);
        repo.save_board(&board).unwrap();

        let reloaded = repo.load_board();
        assert!(!reloaded.task(1).unwrap().editing);
    }

    #[test]
    fn test_delete_is_reflected_in_storage() {
        let repo = setup_repo(MemoryStore::default());
        let mut board = TodoBoard::new();
        board.add_task(TaskDraft::new("one"));
        board.add_task(TaskDraft::new("two"));
        board.add_task(TaskDraft::new("three"));
        repo.save_board(&board).unwrap();

        board.delete_task(2);
        repo.save_board(&board).unwrap();

        let ids: Vec<u32> = repo.load_tasks().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_counters_continue_after_reload() {
        let repo = setup_repo(MemoryStore::default());
        let mut board = TodoBoard::new();
        board.add_task(TaskDraft::new("a"));
        board.add_task(TaskDraft::new("b"));
        board.add_category("Home");
        repo.save_board(&board).unwrap();

        let mut reloaded = repo.load_board();
        assert_eq!(reloaded.add_task(TaskDraft::new("c")), Some(3));
        assert_eq!(reloaded.add_category("Work"), Some(2));
    }

    #[test]
    fn test_records_use_camel_case_fields() {
        let keys = StorageKeys::default();
        let repo = setup_repo(MemoryStore::default());
        let mut board = TodoBoard::new();
        board.add_task(TaskDraft::new("a").with_due_date(NaiveDate::from_ymd_opt(2026, 1, 5)));
        repo.save_board(&board).unwrap();

        let raw = repo.store.raw(&keys.tasks_key).unwrap();
        assert!(raw.contains(r#""dueDate":"2026-01-05""#));
        assert!(raw.contains(r#""categoryId":null"#));
        assert!(raw.contains(r#""priority":"medium""#));
    }

    #[test]
    fn test_first_version_records_load() {
        let keys = StorageKeys::default();
        let store = MemoryStore::default().with_entry(
            &keys.tasks_key,
            r#"[{"id":1,"text":"legacy","completed":false,"isEditing":false}]"#,
        );
        let tasks = setup_repo(store).load_tasks();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].text, "legacy");
        assert_eq!(tasks[0].priority, Priority::Medium);
    }

    #[test]
    fn test_max_stored_id_loads_without_panicking() {
        let keys = StorageKeys::default();
        let store = MemoryStore::default().with_entry(
            &keys.tasks_key,
            r#"[{"id":4294967295,"text":"x","completed":false}]"#,
        );
        let mut board = setup_repo(store).load_board();

        assert_eq!(board.tasks().len(), 1);
        assert_eq!(board.task(u32::MAX).unwrap().text, "x");
        // No id left to hand out, and none is reused
        assert_eq!(board.add_task(TaskDraft::new("y")), None);
        assert_eq!(board.tasks().len(), 1);
    }
}
