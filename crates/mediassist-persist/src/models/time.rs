use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::PersistError;

/// Wall-clock time of day a reminder fires, stored as `HH:MM`
/// 
/// Seconds are accepted on input (browsers submit `HH:MM:SS` for some time
/// pickers) and dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ReminderTime(NaiveTime);

impl ReminderTime {
    pub fn new(hour: u32, minute: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, minute, 0).map(Self)
    }
}

impl FromStr for ReminderTime {
    type Err = PersistError;
    
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let parsed = NaiveTime::parse_from_str(trimmed, "%H:%M")
            .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M:%S"))
            .map_err(|_| PersistError::InvalidTime(s.to_string()))?;
        
        Self::new(parsed.hour(), parsed.minute()).ok_or_else(|| PersistError::InvalidTime(s.to_string()))
    }
}

impl fmt::Display for ReminderTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%H:%M"))
    }
}

impl Serialize for ReminderTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ReminderTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    
    #[test]
    fn test_display_is_zero_padded() {
        assert_eq!(ReminderTime::new(7, 5).unwrap().to_string(), "07:05");
    }
    
    #[test]
    fn test_every_minute_round_trips() {
        for hour in 0..24 {
            for minute in 0..60 {
                let text = format!("{:02}:{:02}", hour, minute);
                let parsed: ReminderTime = text.parse().unwrap();
                assert_eq!(parsed.to_string(), text);
                assert_eq!(parsed.to_string().parse::<ReminderTime>().unwrap(), parsed);
            }
        }
    }
    
    #[test]
    fn test_seconds_are_dropped() {
        let parsed: ReminderTime = "21:45:59".parse().unwrap();
        assert_eq!(parsed.to_string(), "21:45");
    }
    
    #[test]
    fn test_invalid_times_rejected() {
        for input in ["", "24:00", "12:60", "noon", "9.30"] {
            assert!(input.parse::<ReminderTime>().is_err(), "accepted {:?}", input);
        }
    }
    
    #[test]
    fn test_ordering_is_chronological() {
        let early: ReminderTime = "00:00".parse().unwrap();
        let mid: ReminderTime = "09:30".parse().unwrap();
        let late: ReminderTime = "23:59".parse().unwrap();
        assert!(early < mid && mid < late);
    }
    
    #[test]
    fn test_serde_uses_string_form() {
        let time = ReminderTime::new(8, 0).unwrap();
        assert_eq!(serde_json::to_string(&time).unwrap(), "\"08:00\"");
        let back: ReminderTime = serde_json::from_str("\"08:00\"").unwrap();
        assert_eq!(back, time);
        assert!(serde_json::from_str::<ReminderTime>("\"8am\"").is_err());
    }
}
