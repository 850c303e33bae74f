//! Fixed task catalog
//!
//! The five task categories every roster draws from. The table itself is
//! static data; `ensure_catalog` only syncs it into storage (find-or-create
//! by name) and is safe to call on every generation run.

use tracing::debug;

use crate::domain::Task;
use crate::store::{StoreError, TaskRepo};

/// Logical key for a catalog task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskKey {
    Line,
    Cashier,
    Grill,
    Prep,
    Manager,
}

/// The predefined catalog: key, name, description
pub const CATALOG: [(TaskKey, &str, &str); 5] = [
    (
        TaskKey::Line,
        "Line",
        "Tasks related to managing the line or serving food",
    ),
    (
        TaskKey::Cashier,
        "Cashier",
        "Tasks related to managing the cash register and transactions",
    ),
    (TaskKey::Grill, "Grill", "Tasks related to cooking food on the grill"),
    (TaskKey::Prep, "Prep", "Tasks related to preparing food for cooking"),
    (
        TaskKey::Manager,
        "Manager",
        "Tasks related to managing the restaurant and supervising employees",
    ),
];

impl TaskKey {
    /// Human-readable task name
    pub fn name(self) -> &'static str {
        CATALOG[self as usize].1
    }

    /// Task description
    pub fn description(self) -> &'static str {
        CATALOG[self as usize].2
    }
}

/// Catalog entries resolved to persisted tasks
#[derive(Debug, Clone)]
pub struct TaskCatalog {
    line: Task,
    cashier: Task,
    grill: Task,
    prep: Task,
    manager: Task,
}

impl TaskCatalog {
    /// The resolved task for a key
    pub fn get(&self, key: TaskKey) -> &Task {
        match key {
            TaskKey::Line => &self.line,
            TaskKey::Cashier => &self.cashier,
            TaskKey::Grill => &self.grill,
            TaskKey::Prep => &self.prep,
            TaskKey::Manager => &self.manager,
        }
    }
}

/// Make sure every catalog task exists in storage and resolve each by key
///
/// Idempotent: a second call finds the records created by the first and
/// never duplicates them.
pub async fn ensure_catalog(repo: &dyn TaskRepo) -> Result<TaskCatalog, StoreError> {
    Ok(TaskCatalog {
        line: ensure_one(repo, TaskKey::Line).await?,
        cashier: ensure_one(repo, TaskKey::Cashier).await?,
        grill: ensure_one(repo, TaskKey::Grill).await?,
        prep: ensure_one(repo, TaskKey::Prep).await?,
        manager: ensure_one(repo, TaskKey::Manager).await?,
    })
}

async fn ensure_one(repo: &dyn TaskRepo, key: TaskKey) -> Result<Task, StoreError> {
    if let Some(task) = repo.find_by_name(key.name()).await? {
        return Ok(task);
    }
    debug!(name = key.name(), "catalog task missing, creating");
    repo.create(Task::new(key.name(), key.description())).await
}
