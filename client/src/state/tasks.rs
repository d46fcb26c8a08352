//! Task-list state owned by the `Tasks` component.

#[cfg(test)]
#[path = "tasks_test.rs"]
mod tasks_test;

use crate::net::types::TaskSummary;

#[derive(Clone, Debug, Default)]
pub struct TasksState {
    pub items: Vec<TaskSummary>,
    pub loading: bool,
    pub error: Option<String>,
}

impl TasksState {
    /// Mark a fetch as in flight, keeping any items already shown.
    pub fn begin_load(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Apply the result of a task fetch.
    pub fn finish_load(&mut self, result: Result<Vec<TaskSummary>, String>) {
        self.loading = false;
        match result {
            Ok(items) => {
                self.items = items;
                self.error = None;
            }
            Err(e) => self.error = Some(e),
        }
    }

    pub fn is_empty(&self) -> bool {
        !self.loading && self.error.is_none() && self.items.is_empty()
    }
}
