use crate::core::gate::{self, GateContext, ShiftRules};
use crate::db::log::ttlog;
use crate::db::queries::{
    ShiftField, get_jornada_by_date, insert_jornada_start, update_jornada_field,
};
use crate::errors::{AppError, AppResult};
use crate::models::clock_action::ClockAction;
use crate::models::colaborador::Colaborador;
use crate::models::jornada::Jornada;
use crate::ui::messages::warning;
use crate::utils::time::format_clock_secs;
use rusqlite::Connection;

/// High-level business logic for the four self-service actions.
pub struct ClockLogic;

impl ClockLogic {
    /// Validate `action` against the record of `ctx.now`'s date and write it.
    ///
    /// The record is read from the store right before the write; the write
    /// itself is unconditional (last write wins against concurrent edits).
    pub fn apply(
        conn: &Connection,
        colaborador: &Colaborador,
        action: ClockAction,
        rules: &ShiftRules,
        ctx: &GateContext,
    ) -> AppResult<Jornada> {
        let date = ctx.now.date_naive();
        let current = get_jornada_by_date(conn, colaborador.id, &date)?;

        gate::check(action, current.as_ref(), rules, ctx)?;

        let updated = match action {
            ClockAction::StartShift => insert_jornada_start(conn, colaborador.id, &ctx.now)?,
            other => {
                let j = current.ok_or_else(|| {
                    AppError::ActionNotAllowed(format!("'{}' needs a started jornada.", other.label()))
                })?;
                let field = match other {
                    ClockAction::StartLunch => ShiftField::LunchStart,
                    ClockAction::EndLunch => ShiftField::LunchEnd,
                    _ => ShiftField::ShiftEnd,
                };
                update_jornada_field(conn, j.id, field, &ctx.now)?
            }
        };

        // Audit trail (non-blocking)
        let target = format!("jornada {}", updated.id);
        let message = format!(
            "{} for {} at {}{}",
            action.as_str(),
            colaborador.full_name(),
            format_clock_secs(Some(&ctx.now)),
            if ctx.bypass { " (bypass)" } else { "" }
        );
        if let Err(e) = ttlog(conn, action.as_str(), &target, &message) {
            warning(format!("Failed to write internal log: {}", e));
        }

        Ok(updated)
    }

    /// Title and description of the confirmation shown after an action.
    pub fn toast(action: ClockAction, colaborador: &Colaborador) -> (&'static str, String) {
        match action {
            ClockAction::StartShift => (
                "Jornada Iniciada",
                format!("Se ha iniciado la jornada para {}.", colaborador.name),
            ),
            ClockAction::StartLunch => ("Descanso Iniciado", "¡Buen provecho!".to_string()),
            ClockAction::EndLunch => ("Descanso Finalizado", "¡De vuelta al trabajo!".to_string()),
            ClockAction::EndShift => (
                "Jornada Finalizada",
                format!("Se ha finalizado la jornada para {}.", colaborador.name),
            ),
        }
    }
}
