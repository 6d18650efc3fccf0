// src/export/model.rs

use crate::core::calculator::worked::worked_minutes;
use crate::core::status::status_of;
use crate::models::jornada::JornadaWithColaborador;
use crate::utils::formatting::worked_readable;
use crate::utils::time::format_clock;
use serde::Serialize;

/// Flat row of the admin listing, for CSV / JSON.
/// Empty times are exported as empty strings, not `--:--`.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct JornadaExport {
    pub id: i64,
    pub colaborador_id: i64,
    pub colaborador: String,
    pub date: String,
    pub shift_start: String,
    pub lunch_start: String,
    pub lunch_end: String,
    pub shift_end: String,
    pub worked_minutes: Option<i64>,
    pub worked: String,
    pub status: String,
}

fn clock_or_empty(ts: Option<&crate::models::jornada::Timestamp>) -> String {
    ts.map(|t| format_clock(Some(t))).unwrap_or_default()
}

impl From<&JornadaWithColaborador> for JornadaExport {
    fn from(row: &JornadaWithColaborador) -> Self {
        let j = &row.jornada;
        let times = j.times();
        let minutes = worked_minutes(&times);

        Self {
            id: j.id,
            colaborador_id: j.colaborador_id,
            colaborador: row.colaborador_name(),
            date: j.date_str(),
            shift_start: clock_or_empty(j.shift_start.as_ref()),
            lunch_start: clock_or_empty(j.lunch_start.as_ref()),
            lunch_end: clock_or_empty(j.lunch_end.as_ref()),
            shift_end: clock_or_empty(j.shift_end.as_ref()),
            worked_minutes: minutes,
            worked: minutes.map(|m| worked_readable(Some(m))).unwrap_or_default(),
            status: status_of(&times).as_str().to_string(),
        }
    }
}
