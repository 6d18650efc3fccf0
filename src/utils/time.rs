//! Time utilities: parsing HH:MM, timestamp storage format, clock formatting.

use crate::errors::{AppError, AppResult};
use crate::models::jornada::Timestamp;
use chrono::{DateTime, Local, NaiveDate, NaiveTime, TimeZone};

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t.trim(), "%H:%M").ok()
}

/// Parse a lunch window like `13:00-15:00` into (start, end).
/// The end must come after the start.
pub fn parse_lunch_window(s: &str) -> Option<(NaiveTime, NaiveTime)> {
    let (a, b) = s.split_once('-')?;
    let start = parse_time(a)?;
    let end = parse_time(b)?;
    if end <= start {
        return None;
    }
    Some((start, end))
}

/// Parse an optional `HH:MM` from an edit field.
///
/// - `None` → field not specified (keep current value)
/// - `""` or `-` → clear the field
/// - `HH:MM` → new time
pub fn parse_edit_field(input: Option<&String>) -> AppResult<Option<Option<NaiveTime>>> {
    match input {
        None => Ok(None),
        Some(s) if s.trim().is_empty() || s.trim() == "-" => Ok(Some(None)),
        Some(s) => {
            let t = parse_time(s).ok_or_else(|| AppError::InvalidTime(s.to_string()))?;
            Ok(Some(Some(t)))
        }
    }
}

/// Recombine a calendar date with an `HH:MM` time in the local time zone
/// (seconds forced to zero).
pub fn combine_date_time(date: NaiveDate, time: NaiveTime) -> AppResult<Timestamp> {
    let naive = date.and_time(time);
    Local
        .from_local_datetime(&naive)
        .earliest()
        .ok_or_else(|| AppError::InvalidTimestamp(naive.format("%Y-%m-%d %H:%M").to_string()))
}

/// Storage representation of a timestamp (ISO-8601 / RFC 3339).
pub fn to_storage(ts: &Timestamp) -> String {
    ts.to_rfc3339()
}

pub fn from_storage(s: &str) -> AppResult<Timestamp> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Local))
        .map_err(|_| AppError::InvalidTimestamp(s.to_string()))
}

/// `HH:MM` of an optional timestamp, `--:--` when empty.
pub fn format_clock(ts: Option<&Timestamp>) -> String {
    ts.map(|t| t.format("%H:%M").to_string())
        .unwrap_or_else(|| "--:--".to_string())
}

/// `HH:MM:SS` of an optional timestamp, `--:--` when empty.
pub fn format_clock_secs(ts: Option<&Timestamp>) -> String {
    ts.map(|t| t.format("%H:%M:%S").to_string())
        .unwrap_or_else(|| "--:--".to_string())
}

/// Parse a pinned "now" (`YYYY-MM-DD HH:MM` or RFC 3339).
pub fn parse_now(s: &str) -> AppResult<Timestamp> {
    if let Ok(ts) = from_storage(s) {
        return Ok(ts);
    }
    let naive = chrono::NaiveDateTime::parse_from_str(s.trim(), "%Y-%m-%d %H:%M")
        .map_err(|_| AppError::InvalidTimestamp(s.to_string()))?;
    combine_date_time(naive.date(), naive.time())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lunch_window_requires_ordered_bounds() {
        let (a, b) = parse_lunch_window("13:00-15:00").unwrap();
        assert_eq!(a, NaiveTime::from_hms_opt(13, 0, 0).unwrap());
        assert_eq!(b, NaiveTime::from_hms_opt(15, 0, 0).unwrap());
        assert!(parse_lunch_window("15:00-13:00").is_none());
        assert!(parse_lunch_window("13:00").is_none());
    }

    #[test]
    fn edit_field_distinguishes_keep_clear_and_set() {
        assert_eq!(parse_edit_field(None).unwrap(), None);
        assert_eq!(parse_edit_field(Some(&"".to_string())).unwrap(), Some(None));
        assert_eq!(parse_edit_field(Some(&"-".to_string())).unwrap(), Some(None));
        assert_eq!(
            parse_edit_field(Some(&"09:05".to_string())).unwrap(),
            Some(Some(NaiveTime::from_hms_opt(9, 5, 0).unwrap()))
        );
        assert!(parse_edit_field(Some(&"9h".to_string())).is_err());
    }

    #[test]
    fn storage_format_keeps_the_instant() {
        let d = NaiveDate::from_ymd_opt(2025, 9, 1).unwrap();
        let ts = combine_date_time(d, NaiveTime::from_hms_opt(9, 30, 0).unwrap()).unwrap();
        let back = from_storage(&to_storage(&ts)).unwrap();
        assert_eq!(back, ts);
        assert_eq!(format_clock(Some(&back)), "09:30");
        assert_eq!(format_clock_secs(Some(&back)), "09:30:00");
        assert_eq!(format_clock(None), "--:--");
    }

    #[test]
    fn now_accepts_plain_local_datetime() {
        let ts = parse_now("2025-09-01 13:15").unwrap();
        assert_eq!(ts.format("%Y-%m-%d %H:%M").to_string(), "2025-09-01 13:15");
        assert!(parse_now("yesterday").is_err());
    }
}
