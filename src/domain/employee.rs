//! Employee domain type
//!
//! Employees carry the three inputs the assignment engine reads: role,
//! per-day availability, and shift preference. The generator never mutates
//! an employee.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use super::day::DayOfWeek;
use super::id::generate_id;
use super::now_ms;
use super::timefmt::hhmm_opt;

/// Employee role
///
/// Wire strings match the staffing records ("general manager" etc.).
/// Anything unrecognized deserializes to `Other` and falls back to the
/// LINE task at assignment time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Role {
    #[serde(rename = "general manager")]
    GeneralManager,
    #[serde(rename = "service manager")]
    ServiceManager,
    #[serde(rename = "kitchen manager")]
    KitchenManager,
    #[default]
    #[serde(rename = "crew member")]
    CrewMember,
    #[serde(other)]
    Other,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::GeneralManager => write!(f, "general manager"),
            Self::ServiceManager => write!(f, "service manager"),
            Self::KitchenManager => write!(f, "kitchen manager"),
            Self::CrewMember => write!(f, "crew member"),
            Self::Other => write!(f, "other"),
        }
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "general manager" => Ok(Self::GeneralManager),
            "service manager" => Ok(Self::ServiceManager),
            "kitchen manager" => Ok(Self::KitchenManager),
            "crew member" => Ok(Self::CrewMember),
            _ => Err(format!("Unknown role: {}", s)),
        }
    }
}

/// Preferred shift bucket
///
/// Four values exist in the data model, but the assignment engine only
/// recognizes morning and afternoon; see `assignment::assign_day`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ShiftPreference {
    #[default]
    Morning,
    Afternoon,
    Evening,
    Night,
}

impl std::fmt::Display for ShiftPreference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Morning => write!(f, "morning"),
            Self::Afternoon => write!(f, "afternoon"),
            Self::Evening => write!(f, "evening"),
            Self::Night => write!(f, "night"),
        }
    }
}

impl std::str::FromStr for ShiftPreference {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "morning" => Ok(Self::Morning),
            "afternoon" => Ok(Self::Afternoon),
            "evening" => Ok(Self::Evening),
            "night" => Ok(Self::Night),
            _ => Err(format!("Unknown shift preference: {}", s)),
        }
    }
}

/// One day's availability window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DayAvailability {
    /// Personal start time, if the employee declared one
    #[serde(with = "hhmm_opt")]
    pub start: Option<NaiveTime>,

    /// Personal end time, if the employee declared one
    #[serde(with = "hhmm_opt")]
    pub end: Option<NaiveTime>,

    /// Employee is off this day and must never be scheduled
    pub off: bool,
}

impl DayAvailability {
    /// An off day
    pub fn off() -> Self {
        Self {
            start: None,
            end: None,
            off: true,
        }
    }

    /// Available with a declared window
    pub fn window(start: NaiveTime, end: NaiveTime) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
            off: false,
        }
    }
}

/// Weekly availability, one record per day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct WeekAvailability {
    pub monday: DayAvailability,
    pub tuesday: DayAvailability,
    pub wednesday: DayAvailability,
    pub thursday: DayAvailability,
    pub friday: DayAvailability,
    pub saturday: DayAvailability,
    pub sunday: DayAvailability,
}

impl WeekAvailability {
    /// The availability record for a given day
    pub fn day(&self, day: DayOfWeek) -> &DayAvailability {
        match day {
            DayOfWeek::Monday => &self.monday,
            DayOfWeek::Tuesday => &self.tuesday,
            DayOfWeek::Wednesday => &self.wednesday,
            DayOfWeek::Thursday => &self.thursday,
            DayOfWeek::Friday => &self.friday,
            DayOfWeek::Saturday => &self.saturday,
            DayOfWeek::Sunday => &self.sunday,
        }
    }

    /// Mutable access, for building fixtures and imports
    pub fn day_mut(&mut self, day: DayOfWeek) -> &mut DayAvailability {
        match day {
            DayOfWeek::Monday => &mut self.monday,
            DayOfWeek::Tuesday => &mut self.tuesday,
            DayOfWeek::Wednesday => &mut self.wednesday,
            DayOfWeek::Thursday => &mut self.thursday,
            DayOfWeek::Friday => &mut self.friday,
            DayOfWeek::Saturday => &mut self.saturday,
            DayOfWeek::Sunday => &mut self.sunday,
        }
    }
}

/// An employee record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier
    pub id: String,

    /// Display name
    pub name: String,

    /// Contact email, if known
    #[serde(default)]
    pub email: Option<String>,

    /// Role driving task assignment
    pub role: Role,

    /// Weekly availability
    #[serde(default)]
    pub availability: WeekAvailability,

    /// Preferred shift bucket
    #[serde(default)]
    pub shift_preference: ShiftPreference,

    /// Creation timestamp (Unix milliseconds)
    pub created_at: i64,

    /// Last update timestamp (Unix milliseconds)
    pub updated_at: i64,
}

impl Employee {
    /// Create a new employee with generated ID
    pub fn new(name: impl Into<String>, role: Role) -> Self {
        let name = name.into();
        let now = now_ms();
        Self {
            id: generate_id("employee", &name),
            name,
            email: None,
            role,
            availability: WeekAvailability::default(),
            shift_preference: ShiftPreference::default(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Set the email (builder pattern)
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Set the shift preference (builder pattern)
    pub fn with_preference(mut self, preference: ShiftPreference) -> Self {
        self.shift_preference = preference;
        self
    }

    /// Set the weekly availability (builder pattern)
    pub fn with_availability(mut self, availability: WeekAvailability) -> Self {
        self.availability = availability;
        self
    }

    /// Whether the employee can work the given day at all
    pub fn is_available_on(&self, day: DayOfWeek) -> bool {
        !self.availability.day(day).off
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_employee_new_defaults() {
        let employee = Employee::new("Maria Lopez", Role::CrewMember);
        assert!(employee.id.contains("-employee-maria-lopez"));
        assert_eq!(employee.role, Role::CrewMember);
        assert_eq!(employee.shift_preference, ShiftPreference::Morning);
        assert!(employee.is_available_on(DayOfWeek::Monday));
    }

    #[test]
    fn test_off_day_not_available() {
        let mut availability = WeekAvailability::default();
        *availability.day_mut(DayOfWeek::Tuesday) = DayAvailability::off();
        let employee = Employee::new("Sam", Role::CrewMember).with_availability(availability);

        assert!(!employee.is_available_on(DayOfWeek::Tuesday));
        assert!(employee.is_available_on(DayOfWeek::Wednesday));
    }

    #[test]
    fn test_role_wire_strings() {
        let json = serde_json::to_string(&Role::GeneralManager).unwrap();
        assert_eq!(json, "\"general manager\"");
        let role: Role = serde_json::from_str("\"kitchen manager\"").unwrap();
        assert_eq!(role, Role::KitchenManager);
    }

    #[test]
    fn test_unknown_role_falls_back_to_other() {
        let role: Role = serde_json::from_str("\"dishwasher\"").unwrap();
        assert_eq!(role, Role::Other);
    }

    #[test]
    fn test_availability_hhmm_serde() {
        let avail = DayAvailability::window(
            NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            NaiveTime::from_hms_opt(15, 30, 0).unwrap(),
        );
        let json = serde_json::to_string(&avail).unwrap();
        assert!(json.contains("\"09:00\""));
        assert!(json.contains("\"15:30\""));

        let back: DayAvailability = serde_json::from_str(&json).unwrap();
        assert_eq!(back, avail);
    }
}
