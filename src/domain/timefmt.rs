//! `HH:MM` time-of-day (de)serialization
//!
//! Shift windows and availability records carry wall-clock times in the
//! `"08:00"` wire form. Seconds are accepted on input but never written.

use chrono::NaiveTime;

/// Parse a `HH:MM` (or `HH:MM:SS`) time string
pub fn parse_hhmm(s: &str) -> Result<NaiveTime, chrono::ParseError> {
    NaiveTime::parse_from_str(s, "%H:%M").or_else(|_| NaiveTime::parse_from_str(s, "%H:%M:%S"))
}

/// serde adapter for `NaiveTime` in `HH:MM` form
pub mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&time.format("%H:%M").to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let s = String::deserialize(deserializer)?;
        super::parse_hhmm(&s).map_err(D::Error::custom)
    }
}

/// serde adapter for `Option<NaiveTime>` in `HH:MM` form
pub mod hhmm_opt {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    pub fn serialize<S: Serializer>(time: &Option<NaiveTime>, serializer: S) -> Result<S::Ok, S::Error> {
        match time {
            Some(t) => serializer.serialize_some(&t.format("%H:%M").to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<NaiveTime>, D::Error> {
        let s: Option<String> = Option::deserialize(deserializer)?;
        match s {
            Some(s) => super::parse_hhmm(&s).map(Some).map_err(D::Error::custom),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hhmm() {
        assert_eq!(parse_hhmm("08:00").unwrap(), NaiveTime::from_hms_opt(8, 0, 0).unwrap());
        assert_eq!(parse_hhmm("14:30:00").unwrap(), NaiveTime::from_hms_opt(14, 30, 0).unwrap());
        assert!(parse_hhmm("25:00").is_err());
        assert!(parse_hhmm("eight").is_err());
    }
}
