//! Domain types for rostergen
//!
//! Records (Employee, Task, ScheduleEntry, TimeOffRequest) and the value
//! types the generator works with. Persistence goes through the repository
//! traits in [`crate::store`].

mod day;
mod employee;
mod id;
mod schedule;
mod task;
mod timeoff;

pub mod timefmt;

pub use day::DayOfWeek;
pub use employee::{DayAvailability, Employee, Role, ShiftPreference, WeekAvailability};
pub use id::generate_id;
pub use schedule::{Feedback, ScheduleEntry, Shift};
pub use task::Task;
pub use timeoff::{TimeOffRequest, TimeOffStatus};

/// Current time as Unix milliseconds
pub fn now_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
