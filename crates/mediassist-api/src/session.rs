use chrono::{DateTime, Utc};

/// Prefix of every session identifier
pub const SESSION_PREFIX: &str = "user_";

/// Fresh session identifier for the current instant
pub fn new_session_id() -> String {
    session_id_at(Utc::now())
}

/// `user_` followed by the UNIX timestamp with the decimal point removed
/// (seconds, then six digits of microseconds)
pub fn session_id_at(now: DateTime<Utc>) -> String {
    let micros = now.timestamp_subsec_micros().min(999_999);
    format!("{}{}{:06}", SESSION_PREFIX, now.timestamp(), micros)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    
    #[test]
    fn test_session_id_format() {
        let at = Utc.timestamp_opt(1_735_689_600, 42_000).unwrap();
        assert_eq!(session_id_at(at), "user_1735689600000042");
    }
    
    #[test]
    fn test_new_session_id_is_digits() {
        let id = new_session_id();
        let digits = id.strip_prefix(SESSION_PREFIX).unwrap();
        assert!(digits.len() >= 16);
        assert!(digits.chars().all(|c| c.is_ascii_digit()));
    }
}
