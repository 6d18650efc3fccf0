use super::colaborador::Colaborador;
use chrono::{DateTime, Local, NaiveDate};
use serde::Serialize;

/// Every stored instant is a local-time RFC 3339 string.
pub type Timestamp = DateTime<Local>;

/// One work shift record for one colaborador on one date.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Jornada {
    pub id: i64,                        // ⇔ registros_jornada.id
    pub colaborador_id: i64,            // ⇔ registros_jornada.colaborador_id
    pub date: NaiveDate,                // ⇔ registros_jornada.date (TEXT "YYYY-MM-DD")
    pub shift_start: Option<Timestamp>, // ⇔ registros_jornada.shift_start (RFC 3339)
    pub lunch_start: Option<Timestamp>, // ⇔ registros_jornada.lunch_start
    pub lunch_end: Option<Timestamp>,   // ⇔ registros_jornada.lunch_end
    pub shift_end: Option<Timestamp>,   // ⇔ registros_jornada.shift_end
    pub created_at: String,             // ⇔ registros_jornada.created_at
}

impl Jornada {
    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    pub fn times(&self) -> ShiftTimes {
        ShiftTimes {
            shift_start: self.shift_start,
            lunch_start: self.lunch_start,
            lunch_end: self.lunch_end,
            shift_end: self.shift_end,
        }
    }
}

/// The four editable timestamps of a jornada.
/// Used as the payload of admin overwrites.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ShiftTimes {
    pub shift_start: Option<Timestamp>,
    pub lunch_start: Option<Timestamp>,
    pub lunch_end: Option<Timestamp>,
    pub shift_end: Option<Timestamp>,
}

/// Admin listing row: jornada joined with its colaborador identity.
/// The colaborador may be missing if the row points to a removed profile.
#[derive(Debug, Clone, Serialize)]
pub struct JornadaWithColaborador {
    #[serde(flatten)]
    pub jornada: Jornada,
    pub colaborador: Option<Colaborador>,
}

impl JornadaWithColaborador {
    pub fn colaborador_name(&self) -> String {
        self.colaborador
            .as_ref()
            .map(|c| c.full_name())
            .unwrap_or_else(|| format!("#{}", self.jornada.colaborador_id))
    }
}
