//! Time-off request domain type

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::id::generate_id;
use super::now_ms;

/// Review status of a time-off request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TimeOffStatus {
    #[default]
    Pending,
    Approved,
    Denied,
}

impl std::fmt::Display for TimeOffStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::Approved => write!(f, "approved"),
            Self::Denied => write!(f, "denied"),
        }
    }
}

/// A request for days off, reviewed by a manager
///
/// Requests do not feed the availability filter; the weekly `off` flags on
/// the employee record are the single source the generator reads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeOffRequest {
    /// Unique identifier
    pub id: String,

    /// Requesting employee
    pub employee_id: String,

    /// First day off
    pub start_date: NaiveDate,

    /// Last day off (inclusive)
    pub end_date: NaiveDate,

    /// Why the time off is requested
    #[serde(default)]
    pub reason: Option<String>,

    /// Review status
    #[serde(default)]
    pub status: TimeOffStatus,

    /// Creation timestamp (Unix milliseconds)
    pub created_at: i64,

    /// Last update timestamp (Unix milliseconds)
    pub updated_at: i64,
}

impl TimeOffRequest {
    /// Create a new pending request
    pub fn new(employee_id: impl Into<String>, start_date: NaiveDate, end_date: NaiveDate) -> Self {
        let employee_id = employee_id.into();
        let now = now_ms();
        Self {
            id: generate_id("timeoff", &employee_id),
            employee_id,
            start_date,
            end_date,
            reason: None,
            status: TimeOffStatus::Pending,
            created_at: now,
            updated_at: now,
        }
    }

    /// Set the reason (builder pattern)
    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }

    /// Update the review status
    pub fn set_status(&mut self, status: TimeOffStatus) {
        self.status = status;
        self.updated_at = now_ms();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_request_pending() {
        let request = TimeOffRequest::new(
            "emp-1",
            NaiveDate::from_ymd_opt(2026, 9, 1).unwrap(),
            NaiveDate::from_ymd_opt(2026, 9, 3).unwrap(),
        )
        .with_reason("family visit");

        assert_eq!(request.status, TimeOffStatus::Pending);
        assert_eq!(request.reason.as_deref(), Some("family visit"));
    }

    #[test]
    fn test_set_status_bumps_updated_at() {
        let mut request = TimeOffRequest::new(
            "emp-1",
            NaiveDate::from_ymd_opt(2026, 9, 1).unwrap(),
            NaiveDate::from_ymd_opt(2026, 9, 1).unwrap(),
        );
        request.set_status(TimeOffStatus::Approved);
        assert_eq!(request.status, TimeOffStatus::Approved);
        assert!(request.updated_at >= request.created_at);
    }
}
