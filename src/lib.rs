//! rostergen - sales-driven weekly staff roster generator
//!
//! Given projected sales per day and employee availability, rostergen
//! decides staffing levels, picks which employees work which shift, and
//! assigns each a task by role. Generation is strictly sequential
//! week-over-week: a week can only be generated once, and never in the
//! past.
//!
//! # Modules
//!
//! - [`domain`] - record and value types (employees, tasks, schedules)
//! - [`calendar`] - Monday-anchored week arithmetic
//! - [`catalog`] - the fixed task catalog and its storage sync
//! - [`planner`] - sales-to-headcount thresholds
//! - [`assignment`] - per-day shift and task assignment
//! - [`generator`] - the orchestrator tying the above together
//! - [`store`] - repository traits and the shipped JSON/in-memory store
//! - [`config`] - configuration types and loading
//! - [`cli`] - command-line interface

pub mod assignment;
pub mod calendar;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod domain;
pub mod generator;
pub mod planner;
pub mod store;

// Re-export commonly used types
pub use calendar::{WeekWindow, date_for, next_available_week_start, start_of_week, week_dates};
pub use catalog::{CATALOG, TaskCatalog, TaskKey, ensure_catalog};
pub use config::{Config, StorageConfig};
pub use domain::{
    DayAvailability, DayOfWeek, Employee, Feedback, Role, ScheduleEntry, Shift, ShiftPreference, Task,
    TimeOffRequest, TimeOffStatus, WeekAvailability,
};
pub use generator::{GenerateError, SalesData, ScheduleGenerator};
pub use planner::{StaffingPlan, staffing_for_sales};
pub use store::{EmployeeRepo, ScheduleRepo, Store, StoreError, TaskRepo, TimeOffRepo};
