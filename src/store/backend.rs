//! Store implementation
//!
//! Collections live in memory behind a `tokio::sync::RwLock`; when the
//! store was opened with a path, every mutation rewrites the JSON document
//! on disk. `in_memory` is the test and fixture constructor.

use std::collections::HashMap;
use std::path::PathBuf;

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::domain::{DayOfWeek, Employee, ScheduleEntry, Task, TimeOffRequest, TimeOffStatus};

use super::{EmployeeRepo, ScheduleRepo, StoreError, TaskRepo, TimeOffRepo};

/// On-disk/in-memory document holding every collection
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
struct Collections {
    employees: HashMap<String, Employee>,
    tasks: HashMap<String, Task>,
    schedules: HashMap<String, ScheduleEntry>,
    time_off: HashMap<String, TimeOffRequest>,
}

/// The shipped store
pub struct Store {
    path: Option<PathBuf>,
    inner: RwLock<Collections>,
}

impl Store {
    /// A store that never touches disk
    pub fn in_memory() -> Self {
        Self {
            path: None,
            inner: RwLock::new(Collections::default()),
        }
    }

    /// Open (or create) a JSON-file-backed store
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let collections = if path.exists() {
            let bytes = std::fs::read(&path)?;
            serde_json::from_slice(&bytes)?
        } else {
            Collections::default()
        };
        info!(path = %path.display(), "store opened");
        Ok(Self {
            path: Some(path),
            inner: RwLock::new(collections),
        })
    }

    /// Default store location under the platform data directory
    pub fn default_path() -> PathBuf {
        dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("rostergen")
            .join("store.json")
    }

    fn persist(&self, collections: &Collections) -> Result<(), StoreError> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let bytes = serde_json::to_vec_pretty(collections)?;
        std::fs::write(path, bytes)?;
        debug!(path = %path.display(), "store persisted");
        Ok(())
    }
}

/// Stable retrieval order: insertion time, then id as the tiebreak
fn sorted<T: Clone>(records: impl Iterator<Item = T>, key: impl Fn(&T) -> (i64, String)) -> Vec<T> {
    let mut out: Vec<T> = records.collect();
    out.sort_by_key(key);
    out
}

#[async_trait]
impl EmployeeRepo for Store {
    async fn insert_employee(&self, employee: Employee) -> Result<Employee, StoreError> {
        let mut inner = self.inner.write().await;
        inner.employees.insert(employee.id.clone(), employee.clone());
        self.persist(&inner)?;
        Ok(employee)
    }

    async fn list_employees(&self) -> Result<Vec<Employee>, StoreError> {
        let inner = self.inner.read().await;
        Ok(sorted(inner.employees.values().cloned(), |e| {
            (e.created_at, e.id.clone())
        }))
    }

    async fn find_available_on(&self, day: DayOfWeek) -> Result<Vec<Employee>, StoreError> {
        let inner = self.inner.read().await;
        Ok(sorted(
            inner
                .employees
                .values()
                .filter(|e| !e.availability.day(day).off)
                .cloned(),
            |e| (e.created_at, e.id.clone()),
        ))
    }
}

#[async_trait]
impl TaskRepo for Store {
    async fn find_by_name(&self, name: &str) -> Result<Option<Task>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner.tasks.values().find(|t| t.name == name).cloned())
    }

    async fn create(&self, task: Task) -> Result<Task, StoreError> {
        let mut inner = self.inner.write().await;
        inner.tasks.insert(task.id.clone(), task.clone());
        self.persist(&inner)?;
        Ok(task)
    }

    async fn list_tasks(&self) -> Result<Vec<Task>, StoreError> {
        let inner = self.inner.read().await;
        Ok(sorted(inner.tasks.values().cloned(), |t| (t.created_at, t.id.clone())))
    }
}

#[async_trait]
impl ScheduleRepo for Store {
    async fn latest_week_start_from(&self, from: NaiveDate) -> Result<Option<NaiveDate>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner
            .schedules
            .values()
            .map(|e| e.week_start)
            .filter(|w| *w >= from)
            .max())
    }

    async fn insert_many(&self, entries: &[ScheduleEntry]) -> Result<(), StoreError> {
        let mut inner = self.inner.write().await;
        for entry in entries {
            inner.schedules.insert(entry.id.clone(), entry.clone());
        }
        self.persist(&inner)?;
        Ok(())
    }

    async fn insert_entry(&self, entry: ScheduleEntry) -> Result<ScheduleEntry, StoreError> {
        let mut inner = self.inner.write().await;
        inner.schedules.insert(entry.id.clone(), entry.clone());
        self.persist(&inner)?;
        Ok(entry)
    }

    async fn get_entry(&self, id: &str) -> Result<Option<ScheduleEntry>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner.schedules.get(id).cloned())
    }

    async fn list_entries(&self, week_start: Option<NaiveDate>) -> Result<Vec<ScheduleEntry>, StoreError> {
        let inner = self.inner.read().await;
        Ok(sorted(
            inner
                .schedules
                .values()
                .filter(|e| e.is_active)
                .filter(|e| week_start.is_none_or(|w| e.week_start == w))
                .cloned(),
            |e| (e.created_at, e.id.clone()),
        ))
    }

    async fn approve_entry(&self, id: &str) -> Result<ScheduleEntry, StoreError> {
        let mut inner = self.inner.write().await;
        let entry = inner
            .schedules
            .get_mut(id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        entry.approve();
        let entry = entry.clone();
        self.persist(&inner)?;
        Ok(entry)
    }

    async fn update_entry(&self, entry: ScheduleEntry) -> Result<(), StoreError> {
        let mut inner = self.inner.write().await;
        if !inner.schedules.contains_key(&entry.id) {
            return Err(StoreError::NotFound(entry.id.clone()));
        }
        inner.schedules.insert(entry.id.clone(), entry);
        self.persist(&inner)?;
        Ok(())
    }

    async fn soft_delete_entry(&self, id: &str) -> Result<(), StoreError> {
        let mut inner = self.inner.write().await;
        let entry = inner
            .schedules
            .get_mut(id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        entry.deactivate();
        self.persist(&inner)?;
        Ok(())
    }
}

#[async_trait]
impl TimeOffRepo for Store {
    async fn create_request(&self, request: TimeOffRequest) -> Result<TimeOffRequest, StoreError> {
        let mut inner = self.inner.write().await;
        inner.time_off.insert(request.id.clone(), request.clone());
        self.persist(&inner)?;
        Ok(request)
    }

    async fn list_requests(&self) -> Result<Vec<TimeOffRequest>, StoreError> {
        let inner = self.inner.read().await;
        Ok(sorted(inner.time_off.values().cloned(), |r| {
            (r.created_at, r.id.clone())
        }))
    }

    async fn set_request_status(&self, id: &str, status: TimeOffStatus) -> Result<TimeOffRequest, StoreError> {
        let mut inner = self.inner.write().await;
        let request = inner
            .time_off
            .get_mut(id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        request.set_status(status);
        let request = request.clone();
        self.persist(&inner)?;
        Ok(request)
    }
}
