//! Schedule entry domain type
//!
//! A schedule entry is the unit the generator produces: one employee, one
//! task, one shift, inside a Monday..Sunday week window. Entries are never
//! physically deleted; `is_active` is flipped off instead.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use super::day::DayOfWeek;
use super::id::generate_id;
use super::now_ms;
use super::timefmt::hhmm;

/// One work period embedded in a schedule entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shift {
    /// Day label ("monday"..)
    pub day: DayOfWeek,

    /// Concrete calendar date for that day
    pub date: NaiveDate,

    /// Shift start
    #[serde(with = "hhmm")]
    pub start_time: NaiveTime,

    /// Shift end
    #[serde(with = "hhmm")]
    pub end_time: NaiveTime,
}

/// Manager feedback attached to an entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Feedback {
    pub comment: Option<String>,
    pub submitted_by: Option<String>,
    pub reason: Option<String>,
}

/// A persisted schedule entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    /// Unique identifier
    pub id: String,

    /// Employee working the shift
    pub employee_id: String,

    /// Task assigned for the shift
    pub task_id: String,

    /// The shift itself
    pub shift: Shift,

    /// Monday the week starts on
    pub week_start: NaiveDate,

    /// Sunday the week ends on (always week_start + 6 days)
    pub week_end: NaiveDate,

    /// Projected sales for the shift's day
    pub projected_sales: f64,

    /// Generated entries are auto-approved; manual entries start false
    #[serde(default)]
    pub is_approved: bool,

    /// Soft-delete flag
    #[serde(default = "default_active")]
    pub is_active: bool,

    /// Optional manager feedback
    #[serde(default)]
    pub feedback: Option<Feedback>,

    /// Creation timestamp (Unix milliseconds)
    pub created_at: i64,

    /// Last update timestamp (Unix milliseconds)
    pub updated_at: i64,
}

fn default_active() -> bool {
    true
}

impl ScheduleEntry {
    /// Create a manual entry (unapproved until a manager approves it)
    pub fn new(
        employee_id: impl Into<String>,
        task_id: impl Into<String>,
        shift: Shift,
        week_start: NaiveDate,
        week_end: NaiveDate,
        projected_sales: f64,
    ) -> Self {
        let employee_id = employee_id.into();
        let now = now_ms();
        Self {
            id: generate_id("schedule", &format!("{}-{}", shift.day, employee_id)),
            employee_id,
            task_id: task_id.into(),
            shift,
            week_start,
            week_end,
            projected_sales,
            is_approved: false,
            is_active: true,
            feedback: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Create a generator-produced entry (auto-approved by policy)
    pub fn generated(
        employee_id: impl Into<String>,
        task_id: impl Into<String>,
        shift: Shift,
        week_start: NaiveDate,
        week_end: NaiveDate,
        projected_sales: f64,
    ) -> Self {
        let mut entry = Self::new(employee_id, task_id, shift, week_start, week_end, projected_sales);
        entry.is_approved = true;
        entry
    }

    /// Approve the entry
    pub fn approve(&mut self) {
        self.is_approved = true;
        self.updated_at = now_ms();
    }

    /// Soft-delete: mark inactive instead of removing the record
    pub fn deactivate(&mut self) {
        self.is_active = false;
        self.updated_at = now_ms();
    }

    /// Replace the assigned task
    pub fn set_task(&mut self, task_id: impl Into<String>) {
        self.task_id = task_id.into();
        self.updated_at = now_ms();
    }

    /// Replace the shift
    pub fn set_shift(&mut self, shift: Shift) {
        self.shift = shift;
        self.updated_at = now_ms();
    }

    /// Attach or replace feedback
    pub fn set_feedback(&mut self, feedback: Feedback) {
        self.feedback = Some(feedback);
        self.updated_at = now_ms();
    }

    /// Whether the shift date falls inside the entry's own week window
    pub fn shift_in_window(&self) -> bool {
        self.week_start <= self.shift.date && self.shift.date <= self.week_end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_shift() -> Shift {
        Shift {
            day: DayOfWeek::Monday,
            date: NaiveDate::from_ymd_opt(2026, 8, 24).unwrap(),
            start_time: NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
            end_time: NaiveTime::from_hms_opt(14, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_manual_entry_unapproved() {
        let entry = ScheduleEntry::new(
            "emp-1",
            "task-1",
            sample_shift(),
            NaiveDate::from_ymd_opt(2026, 8, 24).unwrap(),
            NaiveDate::from_ymd_opt(2026, 8, 30).unwrap(),
            5200.0,
        );
        assert!(!entry.is_approved);
        assert!(entry.is_active);
        assert!(entry.shift_in_window());
    }

    #[test]
    fn test_generated_entry_auto_approved() {
        let entry = ScheduleEntry::generated(
            "emp-1",
            "task-1",
            sample_shift(),
            NaiveDate::from_ymd_opt(2026, 8, 24).unwrap(),
            NaiveDate::from_ymd_opt(2026, 8, 30).unwrap(),
            7000.0,
        );
        assert!(entry.is_approved);
    }

    #[test]
    fn test_soft_delete() {
        let mut entry = ScheduleEntry::new(
            "emp-1",
            "task-1",
            sample_shift(),
            NaiveDate::from_ymd_opt(2026, 8, 24).unwrap(),
            NaiveDate::from_ymd_opt(2026, 8, 30).unwrap(),
            0.0,
        );
        entry.deactivate();
        assert!(!entry.is_active);
    }

    #[test]
    fn test_shift_serde_hhmm() {
        let shift = sample_shift();
        let json = serde_json::to_string(&shift).unwrap();
        assert!(json.contains("\"08:00\""));
        assert!(json.contains("\"14:00\""));

        let back: Shift = serde_json::from_str(&json).unwrap();
        assert_eq!(back, shift);
    }

    #[test]
    fn test_feedback_merge() {
        let mut entry = ScheduleEntry::new(
            "emp-1",
            "task-1",
            sample_shift(),
            NaiveDate::from_ymd_opt(2026, 8, 24).unwrap(),
            NaiveDate::from_ymd_opt(2026, 8, 30).unwrap(),
            0.0,
        );
        entry.set_feedback(Feedback {
            comment: Some("Swap with Dana".to_string()),
            submitted_by: Some("gm-1".to_string()),
            reason: None,
        });
        assert!(entry.feedback.is_some());
    }
}
