//! Maps the four timestamps of a jornada to its display status.

use crate::models::jornada::{Jornada, ShiftTimes};
use crate::models::shift_status::ShiftStatus;

/// Status of an optional record; no record at all is `Absent`.
pub fn derive_status(record: Option<&Jornada>) -> ShiftStatus {
    match record {
        Some(j) => status_of(&j.times()),
        None => ShiftStatus::Absent,
    }
}

/// Fields are checked from the last one to the first; the first present
/// field decides. Inconsistent combinations (e.g. an end without a start,
/// as left by an admin edit) resolve by the same order.
pub fn status_of(t: &ShiftTimes) -> ShiftStatus {
    if t.shift_end.is_some() {
        ShiftStatus::Finished
    } else if t.lunch_end.is_some() {
        ShiftStatus::BackFromLunch
    } else if t.lunch_start.is_some() {
        ShiftStatus::OnLunch
    } else if t.shift_start.is_some() {
        ShiftStatus::Working
    } else {
        ShiftStatus::Absent
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, TimeZone};

    fn ts() -> crate::models::jornada::Timestamp {
        Local.with_ymd_and_hms(2025, 9, 1, 10, 0, 0).unwrap()
    }

    /// Expected status for a presence mask (start, lunch_start, lunch_end, end).
    fn expected(mask: [bool; 4]) -> ShiftStatus {
        if mask[3] {
            ShiftStatus::Finished
        } else if mask[2] {
            ShiftStatus::BackFromLunch
        } else if mask[1] {
            ShiftStatus::OnLunch
        } else if mask[0] {
            ShiftStatus::Working
        } else {
            ShiftStatus::Absent
        }
    }

    #[test]
    fn every_combination_follows_the_priority_order() {
        for bits in 0u8..16 {
            let mask = [bits & 1 != 0, bits & 2 != 0, bits & 4 != 0, bits & 8 != 0];
            let pick = |on: bool| if on { Some(ts()) } else { None };
            let times = ShiftTimes {
                shift_start: pick(mask[0]),
                lunch_start: pick(mask[1]),
                lunch_end: pick(mask[2]),
                shift_end: pick(mask[3]),
            };
            assert_eq!(status_of(&times), expected(mask), "mask {:?}", mask);
        }
    }

    #[test]
    fn no_record_is_out_of_service() {
        let s = derive_status(None);
        assert_eq!(s, ShiftStatus::Absent);
        assert_eq!(s.label(), "Fuera de servicio");
        assert_eq!(s.admin_label(), "Ausente");
    }

    #[test]
    fn back_from_lunch_reads_as_working() {
        assert_eq!(ShiftStatus::BackFromLunch.label(), "Trabajando");
        assert_eq!(ShiftStatus::Working.label(), "Trabajando");
        assert_eq!(ShiftStatus::OnLunch.admin_label(), "En Almuerzo");
    }
}
