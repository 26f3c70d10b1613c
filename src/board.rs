//! Task Board
//!
//! In-memory tasks and categories plus the id counters. Every UI action is
//! one synchronous method call here; the store persists and re-renders
//! afterwards.

use crate::filter::TaskFilter;
use crate::models::{Category, CategoryId, Task, TaskDraft, TaskEdit, TaskId};

#[derive(Debug, Clone, PartialEq)]
pub struct TodoBoard {
    tasks: Vec<Task>,
    categories: Vec<Category>,
    /// `None` once the id space is used up
    next_task_id: Option<TaskId>,
    next_category_id: Option<CategoryId>,
}

impl Default for TodoBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl TodoBoard {
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            categories: Vec::new(),
            next_task_id: Some(1),
            next_category_id: Some(1),
        }
    }

    /// Rebuild a board from persisted records, seeding both counters
    /// from the highest stored id
    pub fn from_parts(tasks: Vec<Task>, categories: Vec<Category>) -> Self {
        let next_task_id = next_id(tasks.iter().map(|t| t.id), "task");
        let next_category_id = next_id(categories.iter().map(|c| c.id), "category");
        Self {
            tasks,
            categories,
            next_task_id,
            next_category_id,
        }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn category(&self, id: CategoryId) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    fn task_mut(&mut self, id: TaskId) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|t| t.id == id)
    }

    /// Known category ids pass through, anything else becomes `None`
    fn resolve_category(&self, category_id: Option<CategoryId>) -> Option<CategoryId> {
        category_id.filter(|id| self.category(*id).is_some())
    }

    // ========================
    // Task operations
    // ========================

    /// Returns the new id, or `None` when the trimmed text is empty or
    /// task ids are exhausted
    pub fn add_task(&mut self, draft: TaskDraft) -> Option<TaskId> {
        let text = draft.text.trim();
        if text.is_empty() {
            return None;
        }

        let id = self.next_task_id?;
        self.next_task_id = id.checked_add(1);

        let mut task = Task::new(id, text.to_string());
        task.due_date = draft.due_date;
        task.priority = draft.priority;
        task.category_id = self.resolve_category(draft.category_id);
        self.tasks.push(task);
        Some(id)
    }

    pub fn toggle_task(&mut self, id: TaskId) -> bool {
        match self.task_mut(id) {
            Some(task) => {
                task.completed = !task.completed;
                true
            }
            None => false,
        }
    }

    pub fn delete_task(&mut self, id: TaskId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        self.tasks.len() != before
    }

    pub fn begin_edit(&mut self, id: TaskId) -> bool {
        match self.task_mut(id) {
            Some(task) => {
                task.editing = true;
                true
            }
            None => false,
        }
    }

    /// Applies the edit and leaves edit mode; empty text keeps the row
    /// in edit mode untouched
    pub fn save_edit(&mut self, id: TaskId, edit: TaskEdit) -> bool {
        let text = edit.text.trim();
        if text.is_empty() {
            return false;
        }
        let category_id = self.resolve_category(edit.category_id);

        match self.task_mut(id) {
            Some(task) => {
                task.text = text.to_string();
                task.due_date = edit.due_date;
                task.priority = edit.priority;
                task.category_id = category_id;
                task.editing = false;
                true
            }
            None => false,
        }
    }

    pub fn cancel_edit(&mut self, id: TaskId) -> bool {
        match self.task_mut(id) {
            Some(task) => {
                task.editing = false;
                true
            }
            None => false,
        }
    }

    /// Removes every completed task, returning how many were dropped
    pub fn clear_completed(&mut self) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|t| !t.completed);
        before - self.tasks.len()
    }

    // ========================
    // Category operations
    // ========================

    pub fn add_category(&mut self, name: &str) -> Option<CategoryId> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }

        let id = self.next_category_id?;
        self.next_category_id = id.checked_add(1);
        self.categories.push(Category {
            id,
            name: name.to_string(),
        });
        Some(id)
    }

    pub fn category_name(&self, id: CategoryId) -> Option<&str> {
        self.category(id).map(|c| c.name.as_str())
    }

    // ========================
    // Views
    // ========================

    /// Tasks to render for the given filter, in display order
    pub fn visible_tasks(&self, filter: &TaskFilter) -> Vec<Task> {
        filter.apply(self.tasks.iter()).into_iter().cloned().collect()
    }

    pub fn remaining_count(&self) -> usize {
        self.tasks.iter().filter(|t| !t.completed).count()
    }

    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.completed).count()
    }
}

/// Highest id + 1, or `None` when the highest id is `u32::MAX`
fn next_id(ids: impl Iterator<Item = u32>, kind: &str) -> Option<u32> {
    match ids.max() {
        None => Some(1),
        Some(max) => {
            let next = max.checked_add(1);
            if next.is_none() {
                log::warn!("Stored {} id {} is the largest possible; no new {}s can be added", kind, max, kind);
            }
            next
        }
    }
}
