//! Worked time of a jornada.

use crate::models::jornada::ShiftTimes;

/// Lunch length in whole minutes, when both bounds are present.
pub fn lunch_minutes(t: &ShiftTimes) -> Option<i64> {
    match (t.lunch_start, t.lunch_end) {
        (Some(a), Some(b)) => Some((b - a).num_minutes()),
        _ => None,
    }
}

/// Minutes between shift start and end, minus the lunch interval when
/// both lunch bounds are set. Never negative.
/// `None` while the shift is not both started and ended.
pub fn worked_minutes(t: &ShiftTimes) -> Option<i64> {
    let (start, end) = match (t.shift_start, t.shift_end) {
        (Some(s), Some(e)) => (s, e),
        _ => return None,
    };

    let mut total = (end - start).num_minutes();
    if let Some(lunch) = lunch_minutes(t) {
        total -= lunch;
    }

    Some(total.max(0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::jornada::Timestamp;
    use crate::utils::formatting::worked_readable;
    use chrono::{Local, TimeZone};

    fn at(h: u32, m: u32) -> Option<Timestamp> {
        Some(Local.with_ymd_and_hms(2025, 9, 1, h, m, 0).unwrap())
    }

    #[test]
    fn full_day_example() {
        let t = ShiftTimes {
            shift_start: at(9, 30),
            lunch_start: at(13, 0),
            lunch_end: at(13, 30),
            shift_end: at(18, 0),
        };
        assert_eq!(worked_minutes(&t), Some(480));
        assert_eq!(worked_readable(worked_minutes(&t)), "8h 00m");
    }

    #[test]
    fn contained_lunch_reduces_by_its_length() {
        let mut t = ShiftTimes {
            shift_start: at(9, 0),
            lunch_start: None,
            lunch_end: None,
            shift_end: at(17, 45),
        };
        let without = worked_minutes(&t).unwrap();
        t.lunch_start = at(12, 10);
        t.lunch_end = at(13, 25);
        let with = worked_minutes(&t).unwrap();
        assert_eq!(without - with, 75);
    }

    #[test]
    fn half_open_lunch_is_ignored() {
        let t = ShiftTimes {
            shift_start: at(9, 0),
            lunch_start: at(13, 0),
            lunch_end: None,
            shift_end: at(17, 0),
        };
        assert_eq!(worked_minutes(&t), Some(480));
    }

    #[test]
    fn inconsistent_records_clamp_to_zero() {
        // end before start
        let t = ShiftTimes {
            shift_start: at(18, 0),
            lunch_start: None,
            lunch_end: None,
            shift_end: at(9, 0),
        };
        assert_eq!(worked_minutes(&t), Some(0));

        // lunch longer than the shift
        let t = ShiftTimes {
            shift_start: at(12, 0),
            lunch_start: at(9, 0),
            lunch_end: at(16, 0),
            shift_end: at(13, 0),
        };
        assert_eq!(worked_minutes(&t), Some(0));
    }

    #[test]
    fn open_shift_has_no_worked_time() {
        let t = ShiftTimes {
            shift_start: at(9, 0),
            ..ShiftTimes::default()
        };
        assert_eq!(worked_minutes(&t), None);
        assert_eq!(worked_readable(worked_minutes(&t)), "--:--");
    }
}
