use crate::core::calculator::worked::worked_minutes;
use crate::core::range::DateRange;
use crate::core::status::status_of;
use crate::db::log::ttlog;
use crate::db::queries::{get_jornada, list_jornadas, overwrite_jornada_times};
use crate::errors::{AppError, AppResult};
use crate::models::jornada::{Jornada, JornadaWithColaborador, ShiftTimes, Timestamp};
use crate::ui::messages::warning;
use crate::utils::colors::{colorize_optional, colorize_status};
use crate::utils::date::long_date;
use crate::utils::formatting::worked_readable;
use crate::utils::table::Table;
use crate::utils::time::{combine_date_time, format_clock};
use chrono::{NaiveDate, NaiveTime, Timelike};
use rusqlite::Connection;

/// Requested change for one field of the edit dialog:
/// `None` keeps the current value, `Some(None)` clears it,
/// `Some(Some(t))` sets it to `t` on the record's date.
pub type FieldEdit = Option<Option<NaiveTime>>;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimeEdits {
    pub shift_start: FieldEdit,
    pub lunch_start: FieldEdit,
    pub lunch_end: FieldEdit,
    pub shift_end: FieldEdit,
}

/// Current value of a field as the dialog shows it (`HH:MM`, no seconds).
fn prefill(ts: Option<&Timestamp>) -> Option<NaiveTime> {
    ts.and_then(|t| t.time().with_second(0))
        .and_then(|t| t.with_nanosecond(0))
}

fn resolve(date: NaiveDate, edit: FieldEdit, current: Option<&Timestamp>) -> AppResult<Option<Timestamp>> {
    let time = match edit {
        None => prefill(current),
        Some(t) => t,
    };
    time.map(|t| combine_date_time(date, t)).transpose()
}

impl TimeEdits {
    /// Build the four timestamps written back by the edit dialog.
    /// Every field is recombined with the record's date, including the
    /// untouched ones (their seconds are dropped).
    pub fn apply_to(&self, j: &Jornada) -> AppResult<ShiftTimes> {
        Ok(ShiftTimes {
            shift_start: resolve(j.date, self.shift_start, j.shift_start.as_ref())?,
            lunch_start: resolve(j.date, self.lunch_start, j.lunch_start.as_ref())?,
            lunch_end: resolve(j.date, self.lunch_end, j.lunch_end.as_ref())?,
            shift_end: resolve(j.date, self.shift_end, j.shift_end.as_ref())?,
        })
    }

    pub fn is_empty(&self) -> bool {
        *self == TimeEdits::default()
    }
}

/// Admin review and correction of team records.
pub struct AdminLogic;

impl AdminLogic {
    pub fn query(
        conn: &Connection,
        range: &DateRange,
        colaborador_id: Option<i64>,
    ) -> AppResult<Vec<JornadaWithColaborador>> {
        list_jornadas(conn, &range.start, &range.end, colaborador_id)
    }

    /// Overwrite the four times of a record. Ordering is not validated:
    /// corrections may leave the record inconsistent on purpose.
    pub fn edit(conn: &Connection, jornada_id: i64, edits: &TimeEdits) -> AppResult<Jornada> {
        let current = get_jornada(conn, jornada_id)?.ok_or(AppError::JornadaNotFound(jornada_id))?;
        let times = edits.apply_to(&current)?;
        let updated = overwrite_jornada_times(conn, jornada_id, &times)?;

        let message = format!(
            "{} → in {} | lunch {}-{} | out {}",
            updated.date_str(),
            format_clock(times.shift_start.as_ref()),
            format_clock(times.lunch_start.as_ref()),
            format_clock(times.lunch_end.as_ref()),
            format_clock(times.shift_end.as_ref()),
        );
        if let Err(e) = ttlog(conn, "admin_edit", &format!("jornada {}", jornada_id), &message) {
            warning(format!("Failed to write internal log: {}", e));
        }

        Ok(updated)
    }

    pub fn render_table(rows: &[JornadaWithColaborador]) -> String {
        if rows.is_empty() {
            return "No se encontraron registros para los filtros seleccionados.\n".to_string();
        }

        let mut table = Table::new(&[
            "ID",
            "Colaborador",
            "Fecha",
            "Inicio",
            "Inicio almuerzo",
            "Fin almuerzo",
            "Fin",
            "Horas",
            "Estado",
        ]);

        for row in rows {
            let j = &row.jornada;
            let times = j.times();
            let status = status_of(&times);
            table.add_row(vec![
                j.id.to_string(),
                row.colaborador_name(),
                long_date(j.date),
                colorize_optional(&format_clock(j.shift_start.as_ref())),
                colorize_optional(&format_clock(j.lunch_start.as_ref())),
                colorize_optional(&format_clock(j.lunch_end.as_ref())),
                colorize_optional(&format_clock(j.shift_end.as_ref())),
                colorize_optional(&worked_readable(worked_minutes(&times))),
                colorize_status(status, status.admin_label()),
            ]);
        }

        table.render()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, TimeZone};

    fn jornada() -> Jornada {
        Jornada {
            id: 3,
            colaborador_id: 1,
            date: NaiveDate::from_ymd_opt(2025, 9, 1).unwrap(),
            shift_start: Some(Local.with_ymd_and_hms(2025, 9, 1, 9, 31, 42).unwrap()),
            lunch_start: Some(Local.with_ymd_and_hms(2025, 9, 1, 13, 2, 5).unwrap()),
            lunch_end: None,
            shift_end: None,
            created_at: String::new(),
        }
    }

    fn hm(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn untouched_fields_keep_their_minute() {
        let times = TimeEdits::default().apply_to(&jornada()).unwrap();
        assert_eq!(format_clock(times.shift_start.as_ref()), "09:31");
        assert_eq!(times.shift_start.unwrap().time(), hm(9, 31));
        assert_eq!(format_clock(times.lunch_start.as_ref()), "13:02");
        assert!(times.lunch_end.is_none());
    }

    #[test]
    fn edits_set_and_clear_independently() {
        let edits = TimeEdits {
            shift_start: Some(Some(hm(8, 0))),
            lunch_start: Some(None),
            lunch_end: Some(Some(hm(14, 0))),
            shift_end: None,
        };
        let times = edits.apply_to(&jornada()).unwrap();
        assert_eq!(times.shift_start.unwrap().time(), hm(8, 0));
        assert_eq!(times.shift_start.unwrap().date_naive(), jornada().date);
        assert!(times.lunch_start.is_none());
        // lunch end without lunch start is accepted as-is
        assert_eq!(times.lunch_end.unwrap().time(), hm(14, 0));
        assert!(times.shift_end.is_none());
    }

    #[test]
    fn table_headers_start_with_the_record_id() {
        let row = JornadaWithColaborador {
            jornada: jornada(),
            colaborador: None,
        };
        let text = AdminLogic::render_table(&[row]);
        let header = text.lines().next().unwrap();
        assert!(header.starts_with("ID"));
        for col in ["Colaborador", "Fecha", "Inicio almuerzo", "Fin almuerzo", "Horas", "Estado"] {
            assert!(header.contains(col), "{col}");
        }
        assert!(text.contains("#1"));
    }

    #[test]
    fn empty_listing_message() {
        assert!(AdminLogic::render_table(&[]).contains("No se encontraron registros"));
        assert!(TimeEdits::default().is_empty());
    }
}
