//! UI Components
//!
//! Leptos components for the to-do widget.

mod priority_selector;
mod category_select;
mod task_form;
mod task_item;
mod task_list;
mod category_panel;
mod status_bar;

pub use priority_selector::PrioritySelector;
pub use category_select::CategorySelect;
pub use task_form::NewTaskForm;
pub use task_item::TaskItem;
pub use task_list::TaskList;
pub use category_panel::CategoryPanel;
pub use status_bar::StatusBar;
