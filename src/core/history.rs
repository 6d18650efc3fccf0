use crate::core::calculator::worked::worked_minutes;
use crate::core::status::status_of;
use crate::db::queries::jornada_history;
use crate::errors::{AppError, AppResult};
use crate::models::colaborador::Colaborador;
use crate::models::jornada::Jornada;
use crate::utils::colors::{colorize_optional, colorize_status};
use crate::utils::date::long_date;
use crate::utils::formatting::{bold, worked_readable};
use crate::utils::table::Table;
use crate::utils::time::format_clock;
use rusqlite::Connection;

/// One page of a colaborador's records, newest first.
#[derive(Debug, Clone)]
pub struct HistoryPage {
    pub page: u32,
    pub page_size: u32,
    pub rows: Vec<Jornada>,
}

impl HistoryPage {
    /// Sum of the closed shifts on this page.
    pub fn total_minutes(&self) -> i64 {
        self.rows
            .iter()
            .filter_map(|j| worked_minutes(&j.times()))
            .sum()
    }
}

pub struct HistoryLogic;

impl HistoryLogic {
    /// Pages are 1-based.
    pub fn page(conn: &Connection, colaborador_id: i64, page: u32, page_size: u32) -> AppResult<HistoryPage> {
        if page == 0 {
            return Err(AppError::Other("page numbers start at 1".into()));
        }
        if page_size == 0 {
            return Err(AppError::Other("page size must be at least 1".into()));
        }

        let rows = jornada_history(conn, colaborador_id, page, page_size)?;
        Ok(HistoryPage {
            page,
            page_size,
            rows,
        })
    }

    pub fn render(colaborador: &Colaborador, history: &HistoryPage) -> String {
        let mut out = String::new();
        out.push_str(&bold(&format!(
            "Historial de {} (página {})",
            colaborador.full_name(),
            history.page
        )));
        out.push('\n');

        if history.rows.is_empty() {
            out.push_str("Sin registros.\n");
            return out;
        }

        let mut table = Table::new(&["Fecha", "Inicio", "Inicio almuerzo", "Fin almuerzo", "Fin", "Horas", "Estado"]);
        for j in &history.rows {
            let times = j.times();
            let status = status_of(&times);
            table.add_row(vec![
                long_date(j.date),
                colorize_optional(&format_clock(j.shift_start.as_ref())),
                colorize_optional(&format_clock(j.lunch_start.as_ref())),
                colorize_optional(&format_clock(j.lunch_end.as_ref())),
                colorize_optional(&format_clock(j.shift_end.as_ref())),
                colorize_optional(&worked_readable(worked_minutes(&times))),
                colorize_status(status, status.admin_label()),
            ]);
        }
        out.push_str(&table.render());
        out.push_str(&format!(
            "\nTotal: {}\n",
            worked_readable(Some(history.total_minutes()))
        ));

        if history.rows.len() as u32 == history.page_size {
            out.push_str(&format!("(--page {} para ver más)\n", history.page + 1));
        }
        out
    }
}
