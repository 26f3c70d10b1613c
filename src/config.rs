//! Widget Configuration
//!
//! Optional JSON override kept in local storage under [`CONFIG_KEY`].
//! Every field has a default, so partial overrides are fine.

use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::models::Priority;
use crate::storage::KeyValueStore;

pub const CONFIG_KEY: &str = "todo-widget.config";

/// Local storage keys for the two persisted lists
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageKeys {
    pub tasks_key: String,
    pub categories_key: String,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            tasks_key: "todo-widget.tasks".to_string(),
            categories_key: "todo-widget.categories".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub title: String,
    pub storage: StorageKeys,
    /// Priority preselected in the new-task form
    pub default_priority: Priority,
    /// One of off, error, warn, info, debug, trace
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "To-Do".to_string(),
            storage: StorageKeys::default(),
            default_priority: Priority::Medium,
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Read the override entry; anything missing or unreadable yields defaults
    pub fn load(store: &impl KeyValueStore) -> Self {
        let raw = match store.get(CONFIG_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Self::default(),
            Err(e) => {
                log::warn!("Config unavailable, using defaults: {}", e);
                return Self::default();
            }
        };
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> Self {
        serde_json::from_str(raw).unwrap_or_else(|e| {
            log::warn!("Malformed config, using defaults: {}", e);
            Self::default()
        })
    }

    pub fn level_filter(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::memory::MemoryStore;

    #[test]
    fn test_defaults_when_absent() {
        let config = AppConfig::load(&MemoryStore::default());
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.storage.tasks_key, "todo-widget.tasks");
        assert_eq!(config.level_filter(), LevelFilter::Info);
    }

    #[test]
    fn test_partial_override() {
        let store = MemoryStore::default().with_entry(
            CONFIG_KEY,
            r#"{"title":"Groceries","storage":{"tasks_key":"shop.tasks"},"default_priority":"high"}"#,
        );
        let config = AppConfig::load(&store);
        assert_eq!(config.title, "Groceries");
        assert_eq!(config.storage.tasks_key, "shop.tasks");
        assert_eq!(config.storage.categories_key, "todo-widget.categories");
        assert_eq!(config.default_priority, Priority::High);
    }

    #[test]
    fn test_malformed_falls_back_to_defaults() {
        assert_eq!(AppConfig::from_json("[1,2"), AppConfig::default());
    }

    #[test]
    fn test_level_filter_parsing() {
        let mut config = AppConfig::default();
        config.log_level = "debug".to_string();
        assert_eq!(config.level_filter(), LevelFilter::Debug);
        config.log_level = "chatty".to_string();
        assert_eq!(config.level_filter(), LevelFilter::Info);
    }
}
