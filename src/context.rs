//! Application Context
//!
//! Read-only values shared by every component via the Leptos Context API.

use chrono::NaiveDate;

use crate::models::Priority;

#[derive(Clone, Copy)]
pub struct AppContext {
    /// Local calendar day captured at mount, used for overdue marking
    pub today: NaiveDate,
    /// Priority preselected in the new-task form
    pub default_priority: Priority,
}

impl AppContext {
    pub fn new(today: NaiveDate, default_priority: Priority) -> Self {
        Self {
            today,
            default_priority,
        }
    }
}
