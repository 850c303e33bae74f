//! Persistence seams
//!
//! The generator and CLI talk to storage through the repository traits
//! below; [`Store`] is the shipped implementation (in-memory, optionally
//! persisted to a JSON document on disk).

mod backend;

pub use backend::Store;

use async_trait::async_trait;
use chrono::NaiveDate;
use thiserror::Error;

use crate::domain::{DayOfWeek, Employee, ScheduleEntry, Task, TimeOffRequest, TimeOffStatus};

/// Errors from store operations
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("record not found: {0}")]
    NotFound(String),

    #[error("store I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("store serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Read access to employees
///
/// The core never writes employees during generation; insert/list exist for
/// the CLI import path.
#[async_trait]
pub trait EmployeeRepo: Send + Sync {
    /// Store a new employee
    async fn insert_employee(&self, employee: Employee) -> Result<Employee, StoreError>;

    /// All employees
    async fn list_employees(&self) -> Result<Vec<Employee>, StoreError>;

    /// Employees not marked off for the given day, in stable retrieval order
    async fn find_available_on(&self, day: DayOfWeek) -> Result<Vec<Employee>, StoreError>;
}

/// Task catalog persistence
#[async_trait]
pub trait TaskRepo: Send + Sync {
    /// Look a task up by its human-readable name
    async fn find_by_name(&self, name: &str) -> Result<Option<Task>, StoreError>;

    /// Store a new task
    async fn create(&self, task: Task) -> Result<Task, StoreError>;

    /// All tasks
    async fn list_tasks(&self) -> Result<Vec<Task>, StoreError>;
}

/// Schedule entry persistence
#[async_trait]
pub trait ScheduleRepo: Send + Sync {
    /// Most recent `week_start` at or after `from`, if any
    ///
    /// This is the week-sequencing query: always computed against storage,
    /// never cached, so restarts cannot observe stale state.
    async fn latest_week_start_from(&self, from: NaiveDate) -> Result<Option<NaiveDate>, StoreError>;

    /// Bulk-insert generated entries (best-effort, not transactional)
    async fn insert_many(&self, entries: &[ScheduleEntry]) -> Result<(), StoreError>;

    /// Store one manual entry
    async fn insert_entry(&self, entry: ScheduleEntry) -> Result<ScheduleEntry, StoreError>;

    /// Fetch one entry
    async fn get_entry(&self, id: &str) -> Result<Option<ScheduleEntry>, StoreError>;

    /// Active entries, optionally restricted to one week window
    async fn list_entries(&self, week_start: Option<NaiveDate>) -> Result<Vec<ScheduleEntry>, StoreError>;

    /// Approve an entry
    async fn approve_entry(&self, id: &str) -> Result<ScheduleEntry, StoreError>;

    /// Replace an entry wholesale (edit operations)
    async fn update_entry(&self, entry: ScheduleEntry) -> Result<(), StoreError>;

    /// Soft-delete an entry (flips `is_active` off)
    async fn soft_delete_entry(&self, id: &str) -> Result<(), StoreError>;
}

/// Time-off request persistence
#[async_trait]
pub trait TimeOffRepo: Send + Sync {
    /// Store a new request
    async fn create_request(&self, request: TimeOffRequest) -> Result<TimeOffRequest, StoreError>;

    /// All requests
    async fn list_requests(&self) -> Result<Vec<TimeOffRequest>, StoreError>;

    /// Update the review status of a request
    async fn set_request_status(&self, id: &str, status: TimeOffStatus) -> Result<TimeOffRequest, StoreError>;
}
