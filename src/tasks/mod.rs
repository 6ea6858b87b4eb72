//! In-memory to-do list
//!
//! Tasks keep insertion order and carry a stable [`TaskId`]. Looking a task up by
//! its description is a convenience path: it is case-insensitive, exact on the
//! trimmed text, and returns the first match when descriptions repeat.
//!
//! No operation fails on a missing task; callers get `None`/`false` instead.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for tasks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaskId(pub Uuid);

impl TaskId {
    /// Create a new random task ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for TaskId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single to-do item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub description: String,
    pub completed: bool,
    pub reminder: Option<NaiveDateTime>,
}

impl Task {
    fn new(description: &str) -> Self {
        Self {
            id: TaskId::new(),
            description: description.to_string(),
            completed: false,
            reminder: None,
        }
    }

    /// Case-insensitive comparison on the trimmed description
    pub fn matches(&self, description: &str) -> bool {
        self.description.to_lowercase() == description.trim().to_lowercase()
    }

    pub fn status(&self) -> &'static str {
        if self.completed {
            "Completed"
        } else {
            "Pending"
        }
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.description, self.status())?;
        if let Some(when) = self.reminder {
            write!(f, " (Reminder: {})", when.format("%H:%M"))?;
        }
        Ok(())
    }
}

/// Rendered task list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskListing {
    Empty,
    Items(Vec<String>),
}

impl TaskListing {
    pub fn is_empty(&self) -> bool {
        matches!(self, TaskListing::Empty)
    }
}

/// Ordered collection of tasks
#[derive(Debug, Clone, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a pending task. Blank descriptions are ignored.
    pub fn add(&mut self, description: &str) -> Option<TaskId> {
        let description = description.trim();
        if description.is_empty() {
            return None;
        }

        let task = Task::new(description);
        let id = task.id;
        self.tasks.push(task);
        Some(id)
    }

    pub fn find_by_description(&self, description: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.matches(description))
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    fn get_mut(&mut self, id: TaskId) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|t| t.id == id)
    }

    /// Mark a task as completed
    pub fn complete(&mut self, id: TaskId) -> Option<&Task> {
        let task = self.get_mut(id)?;
        task.completed = true;
        Some(task)
    }

    /// Remove a task, returning it
    pub fn delete(&mut self, id: TaskId) -> Option<Task> {
        let pos = self.tasks.iter().position(|t| t.id == id)?;
        Some(self.tasks.remove(pos))
    }

    /// Attach or replace a reminder
    pub fn set_reminder(&mut self, id: TaskId, when: NaiveDateTime) -> Option<&Task> {
        let task = self.get_mut(id)?;
        task.reminder = Some(when);
        Some(task)
    }

    pub fn list(&self) -> TaskListing {
        if self.tasks.is_empty() {
            TaskListing::Empty
        } else {
            TaskListing::Items(self.tasks.iter().map(Task::to_string).collect())
        }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
