//! Task domain type
//!
//! A task is a named work category (Line, Cashier, ...). The fixed catalog
//! lives in [`crate::catalog`]; this type is the persisted record.

use serde::{Deserialize, Serialize};

use super::id::generate_id;
use super::now_ms;

/// A named task category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier
    pub id: String,

    /// Human-readable name ("Line", "Cashier", ...)
    pub name: String,

    /// What the task covers
    pub description: String,

    /// Creation timestamp (Unix milliseconds)
    pub created_at: i64,

    /// Last update timestamp (Unix milliseconds)
    pub updated_at: i64,
}

impl Task {
    /// Create a new task with generated ID
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        let name = name.into();
        let now = now_ms();
        Self {
            id: generate_id("task", &name),
            name,
            description: description.into(),
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_new() {
        let task = Task::new("Grill", "Tasks related to cooking food on the grill");
        assert!(task.id.contains("-task-grill"));
        assert_eq!(task.name, "Grill");
    }

    #[test]
    fn test_task_serde_round_trip() {
        let task = Task::new("Prep", "Tasks related to preparing food for cooking");
        let json = serde_json::to_string(&task).unwrap();
        let back: Task = serde_json::from_str(&json).unwrap();
        assert_eq!(back, task);
    }
}
