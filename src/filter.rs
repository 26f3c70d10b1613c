//! Task filtering and sorting
//!
//! Builder-style filter applied to the board on every render.

use std::cmp::Ordering;

use crate::models::{CategoryId, Task};

/// Which categories are visible
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    /// Tasks without a category
    Uncategorized,
    Category(CategoryId),
}

/// Which completion states are visible
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Active,
    Completed,
}

impl StatusFilter {
    pub const ALL: [StatusFilter; 3] = [StatusFilter::All, StatusFilter::Active, StatusFilter::Completed];

    pub fn label(&self) -> &'static str {
        match self {
            StatusFilter::All => "All",
            StatusFilter::Active => "Active",
            StatusFilter::Completed => "Completed",
        }
    }
}

/// Sort order for the visible list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TaskSort {
    /// Creation order
    #[default]
    Created,
    /// Earliest due date first, undated last
    DueDate,
    /// Highest priority first
    Priority,
}

impl TaskSort {
    pub const ALL: [TaskSort; 3] = [TaskSort::Created, TaskSort::DueDate, TaskSort::Priority];

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskSort::Created => "created",
            TaskSort::DueDate => "due",
            TaskSort::Priority => "priority",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TaskSort::Created => "Added",
            TaskSort::DueDate => "Due date",
            TaskSort::Priority => "Priority",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "due" => TaskSort::DueDate,
            "priority" => TaskSort::Priority,
            _ => TaskSort::Created,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TaskFilter {
    pub category: CategoryFilter,
    pub status: StatusFilter,
    pub sort: TaskSort,
}

impl TaskFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn in_category(mut self, id: CategoryId) -> Self {
        self.category = CategoryFilter::Category(id);
        self
    }

    pub fn uncategorized(mut self) -> Self {
        self.category = CategoryFilter::Uncategorized;
        self
    }

    pub fn with_category(mut self, category: CategoryFilter) -> Self {
        self.category = category;
        self
    }

    pub fn with_status(mut self, status: StatusFilter) -> Self {
        self.status = status;
        self
    }

    pub fn sort_by(mut self, sort: TaskSort) -> Self {
        self.sort = sort;
        self
    }

    pub fn matches(&self, task: &Task) -> bool {
        let category_ok = match self.category {
            CategoryFilter::All => true,
            CategoryFilter::Uncategorized => task.category_id.is_none(),
            CategoryFilter::Category(id) => task.category_id == Some(id),
        };
        let status_ok = match self.status {
            StatusFilter::All => true,
            StatusFilter::Active => !task.completed,
            StatusFilter::Completed => task.completed,
        };
        category_ok && status_ok
    }

    /// Filter then sort; input order is treated as creation order
    pub fn apply<'a>(&self, tasks: impl Iterator<Item = &'a Task>) -> Vec<&'a Task> {
        let mut filtered: Vec<&Task> = tasks.filter(|t| self.matches(t)).collect();

        // sort_by is stable, so ties keep creation order
        match self.sort {
            TaskSort::Created => {}
            TaskSort::DueDate => filtered.sort_by(|a, b| match (a.due_date, b.due_date) {
                (Some(a_due), Some(b_due)) => a_due.cmp(&b_due),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            }),
            TaskSort::Priority => filtered.sort_by(|a, b| b.priority.cmp(&a.priority)),
        }

        filtered
    }
}
