//! Day-of-week labels
//!
//! Sales data and availability records are keyed by lowercase day names
//! (`monday`..`sunday`). Monday is the canonical start of the week in all
//! calendar arithmetic.

use serde::{Deserialize, Serialize};

/// A day of the week, Monday-first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl DayOfWeek {
    /// All days in calendar order, Monday..Sunday
    pub const ALL: [DayOfWeek; 7] = [
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
        Self::Sunday,
    ];

    /// Days elapsed since Monday (Monday = 0, Sunday = 6)
    pub fn offset(self) -> u32 {
        self as u32
    }
}

impl From<chrono::Weekday> for DayOfWeek {
    fn from(weekday: chrono::Weekday) -> Self {
        match weekday {
            chrono::Weekday::Mon => Self::Monday,
            chrono::Weekday::Tue => Self::Tuesday,
            chrono::Weekday::Wed => Self::Wednesday,
            chrono::Weekday::Thu => Self::Thursday,
            chrono::Weekday::Fri => Self::Friday,
            chrono::Weekday::Sat => Self::Saturday,
            chrono::Weekday::Sun => Self::Sunday,
        }
    }
}

impl std::fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Monday => write!(f, "monday"),
            Self::Tuesday => write!(f, "tuesday"),
            Self::Wednesday => write!(f, "wednesday"),
            Self::Thursday => write!(f, "thursday"),
            Self::Friday => write!(f, "friday"),
            Self::Saturday => write!(f, "saturday"),
            Self::Sunday => write!(f, "sunday"),
        }
    }
}

impl std::str::FromStr for DayOfWeek {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "monday" => Ok(Self::Monday),
            "tuesday" => Ok(Self::Tuesday),
            "wednesday" => Ok(Self::Wednesday),
            "thursday" => Ok(Self::Thursday),
            "friday" => Ok(Self::Friday),
            "saturday" => Ok(Self::Saturday),
            "sunday" => Ok(Self::Sunday),
            _ => Err(format!("Unknown day: {}", s)),
        }
    }
}
