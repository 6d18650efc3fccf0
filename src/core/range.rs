//! Day / week / month ranges of the admin view.

use crate::utils::date::{long_date, month_abbr, month_name};
use chrono::{Datelike, Duration, NaiveDate};
use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RangeKind {
    Day,
    Week,
    Month,
}

/// Inclusive range of dates around a reference date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub kind: RangeKind,
    pub reference: NaiveDate,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

fn last_day_of_month(d: NaiveDate) -> NaiveDate {
    let (y, m) = if d.month() == 12 {
        (d.year() + 1, 1)
    } else {
        (d.year(), d.month() + 1)
    };
    NaiveDate::from_ymd_opt(y, m, 1)
        .and_then(|first_next| first_next.pred_opt())
        .unwrap_or(d)
}

impl DateRange {
    /// Weeks run Monday to Sunday.
    pub fn around(reference: NaiveDate, kind: RangeKind) -> Self {
        let (start, end) = match kind {
            RangeKind::Day => (reference, reference),
            RangeKind::Week => {
                let offset = i64::from(reference.weekday().num_days_from_monday());
                let start = reference - Duration::days(offset);
                (start, start + Duration::days(6))
            }
            RangeKind::Month => (reference.with_day(1).unwrap_or(reference), last_day_of_month(reference)),
        };

        Self {
            kind,
            reference,
            start,
            end,
        }
    }

    /// Human description shown above the admin table.
    pub fn describe(&self) -> String {
        match self.kind {
            RangeKind::Day => long_date(self.reference),
            RangeKind::Week => format!(
                "Semana del {} de {} al {} de {}, {}",
                self.start.day(),
                month_abbr(self.start.month()),
                self.end.day(),
                month_abbr(self.end.month()),
                self.end.year()
            ),
            RangeKind::Month => format!(
                "{} {}",
                month_name(self.reference.month()),
                self.reference.year()
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn week_starts_on_monday() {
        // 2025-09-03 is a Wednesday
        let r = DateRange::around(d(2025, 9, 3), RangeKind::Week);
        assert_eq!(r.start, d(2025, 9, 1));
        assert_eq!(r.end, d(2025, 9, 7));

        // a Sunday belongs to the week that started six days before
        let r = DateRange::around(d(2025, 9, 7), RangeKind::Week);
        assert_eq!(r.start, d(2025, 9, 1));

        // a Monday starts its own week
        let r = DateRange::around(d(2025, 9, 8), RangeKind::Week);
        assert_eq!(r.start, d(2025, 9, 8));
        assert_eq!(r.end, d(2025, 9, 14));
    }

    #[test]
    fn month_covers_every_day() {
        let r = DateRange::around(d(2024, 2, 17), RangeKind::Month);
        assert_eq!(r.start, d(2024, 2, 1));
        assert_eq!(r.end, d(2024, 2, 29));

        let r = DateRange::around(d(2025, 12, 31), RangeKind::Month);
        assert_eq!(r.start, d(2025, 12, 1));
        assert_eq!(r.end, d(2025, 12, 31));
    }

    #[test]
    fn day_is_a_single_date() {
        let r = DateRange::around(d(2025, 9, 3), RangeKind::Day);
        assert_eq!((r.start, r.end), (d(2025, 9, 3), d(2025, 9, 3)));
    }

    #[test]
    fn descriptions() {
        assert_eq!(
            DateRange::around(d(2025, 9, 3), RangeKind::Day).describe(),
            "3 de septiembre de 2025"
        );
        assert_eq!(
            DateRange::around(d(2025, 9, 30), RangeKind::Week).describe(),
            "Semana del 29 de sep al 5 de oct, 2025"
        );
        assert_eq!(
            DateRange::around(d(2025, 9, 30), RangeKind::Month).describe(),
            "septiembre 2025"
        );
    }
}
