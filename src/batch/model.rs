// src/batch/model.rs

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// One task as supplied by the caller.
///
/// `title` is the identity of the task within its batch: dependencies name
/// other tasks by title, and titles must be non-empty and unique. `due` is
/// an optional RFC 3339 timestamp used as the ordering tiebreaker.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TaskDescriptor {
    pub title: String,

    /// Optional due date; tasks without one sort after all dated tasks.
    #[serde(default)]
    pub due: Option<DateTime<Utc>>,

    /// Titles of tasks in the same batch that must precede this one.
    #[serde(default)]
    pub deps: Vec<String>,
}

impl TaskDescriptor {
    /// Convenience constructor for tasks with no due date.
    pub fn new(title: impl Into<String>, deps: Vec<String>) -> Self {
        Self {
            title: title.into(),
            due: None,
            deps,
        }
    }
}

/// Top-level batch file as read from TOML.
///
/// Uses an array of tables so author order is preserved — input order
/// seeds the traversal and breaks ties among equally-due tasks:
///
/// ```toml
/// [[task]]
/// title = "gather data"
/// due = "2024-01-05T00:00:00Z"
///
/// [[task]]
/// title = "write report"
/// due = "2024-02-01T00:00:00Z"
/// deps = ["gather data"]
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BatchFile {
    #[serde(default)]
    pub task: Vec<TaskDescriptor>,
}

impl BatchFile {
    pub fn tasks(&self) -> &[TaskDescriptor] {
        &self.task
    }

    pub fn into_tasks(self) -> Vec<TaskDescriptor> {
        self.task
    }
}
