//! Self-service clock panel: the cached record of the day, the instant used
//! for gating, and the single outstanding mutation.

use crate::core::clock::ClockLogic;
use crate::core::gate::{self, ActionGate, GateContext, ShiftRules};
use crate::core::status::derive_status;
use crate::db::queries::get_jornada_by_date;
use crate::errors::{AppError, AppResult};
use crate::models::clock_action::ClockAction;
use crate::models::colaborador::Colaborador;
use crate::models::jornada::{Jornada, Timestamp};
use crate::models::shift_status::ShiftStatus;
use crate::utils::colors::{GREY, RESET, colorize_optional, colorize_status};
use crate::utils::formatting::bold;
use crate::utils::time::format_clock_secs;
use rusqlite::Connection;

pub struct ClockPanel {
    pub colaborador: Colaborador,
    pub bypass: bool,
    rules: ShiftRules,
    jornada: Option<Jornada>,
    now: Timestamp,
    in_flight: bool,
}

impl ClockPanel {
    /// Fetch the record of `now`'s date and build the panel.
    pub fn load(
        conn: &Connection,
        colaborador: Colaborador,
        rules: ShiftRules,
        bypass: bool,
        now: Timestamp,
    ) -> AppResult<Self> {
        let jornada = get_jornada_by_date(conn, colaborador.id, &now.date_naive())?;
        Ok(Self {
            colaborador,
            bypass,
            rules,
            jornada,
            now,
            in_flight: false,
        })
    }

    /// Move the panel clock forward. The record is not re-fetched.
    pub fn refresh_clock(&mut self, now: Timestamp) {
        self.now = now;
    }

    pub fn jornada(&self) -> Option<&Jornada> {
        self.jornada.as_ref()
    }

    pub fn now(&self) -> Timestamp {
        self.now
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    pub fn status(&self) -> ShiftStatus {
        derive_status(self.jornada.as_ref())
    }

    fn context(&self) -> GateContext {
        GateContext {
            now: self.now,
            bypass: self.bypass,
            in_flight: self.in_flight,
        }
    }

    /// Offered actions with their enabled flag, for the current instant.
    pub fn actions(&self) -> Vec<ActionGate> {
        gate::evaluate(self.jornada.as_ref(), &self.rules, &self.context())
    }

    /// Mark a write as pending. Only one may be outstanding.
    pub fn begin_mutation(&mut self) -> AppResult<()> {
        if self.in_flight {
            return Err(AppError::MutationInFlight);
        }
        self.in_flight = true;
        Ok(())
    }

    /// Close the pending write. On success the returned record replaces the
    /// cached one; on failure the previous state is kept.
    pub fn finish_mutation(&mut self, result: AppResult<Jornada>) -> AppResult<&Jornada> {
        self.in_flight = false;
        let j = self.jornada.insert(result?);
        Ok(&*j)
    }

    /// Run one action at the panel's current instant.
    pub fn perform(&mut self, conn: &Connection, action: ClockAction) -> AppResult<&Jornada> {
        self.begin_mutation()?;
        let ctx = GateContext {
            in_flight: false,
            ..self.context()
        };
        let result = ClockLogic::apply(conn, &self.colaborador, action, &self.rules, &ctx);
        self.finish_mutation(result)
    }

    /// Text rendering of the panel (header, times, actions).
    pub fn render(&self) -> String {
        let j = self.jornada.as_ref();
        let status = self.status();
        let mut out = String::new();

        out.push_str(&bold(&format!("Registro de: {}", self.colaborador.full_name())));
        out.push('\n');
        out.push_str(&format!(
            "Estado actual: {}\n\n",
            colorize_status(status, status.label())
        ));

        let rows = [
            ("Inicio Jornada:", j.and_then(|j| j.shift_start.as_ref())),
            ("Inicio Almuerzo:", j.and_then(|j| j.lunch_start.as_ref())),
            ("Fin Almuerzo:", j.and_then(|j| j.lunch_end.as_ref())),
            ("Fin Jornada:", j.and_then(|j| j.shift_end.as_ref())),
        ];
        for (label, ts) in rows {
            out.push_str(&format!(
                "  {:<18}{}\n",
                label,
                colorize_optional(&format_clock_secs(ts))
            ));
        }
        out.push('\n');

        let actions = self.actions();
        if actions.is_empty() {
            out.push_str("  ✔ Jornada completada.\n");
            return out;
        }

        for gate in actions {
            if gate.enabled {
                out.push_str(&format!("  ▶ {}\n", gate.action.label()));
            } else {
                out.push_str(&format!(
                    "  {}■ {}{} ({})\n",
                    GREY,
                    gate.action.label(),
                    RESET,
                    gate.reason.unwrap_or_default()
                ));
            }
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::initialize::init_db;
    use crate::db::queries::insert_colaborador;
    use chrono::{Local, TimeZone};

    fn at(h: u32, m: u32) -> Timestamp {
        Local.with_ymd_and_hms(2025, 9, 1, h, m, 0).unwrap()
    }

    fn setup() -> (Connection, Colaborador) {
        let conn = Connection::open_in_memory().unwrap();
        init_db(&conn).unwrap();
        let c = insert_colaborador(&conn, Some("u-1"), "Ana", "Pérez").unwrap();
        (conn, c)
    }

    #[test]
    fn refresh_enables_start_without_refetch() {
        let (conn, c) = setup();
        let mut panel = ClockPanel::load(&conn, c, ShiftRules::default(), false, at(9, 0)).unwrap();
        assert!(!panel.actions()[0].enabled);

        panel.refresh_clock(at(9, 30));
        assert!(panel.actions()[0].enabled);
        assert_eq!(panel.status(), ShiftStatus::Absent);
    }

    #[test]
    fn perform_updates_the_cached_record() {
        let (conn, c) = setup();
        let mut panel = ClockPanel::load(&conn, c, ShiftRules::default(), false, at(9, 45)).unwrap();

        panel.perform(&conn, ClockAction::StartShift).unwrap();
        assert_eq!(panel.status(), ShiftStatus::Working);
        assert!(!panel.is_in_flight());

        panel.refresh_clock(at(13, 5));
        panel.perform(&conn, ClockAction::StartLunch).unwrap();
        assert_eq!(panel.status(), ShiftStatus::OnLunch);
    }

    #[test]
    fn second_mutation_while_pending_is_rejected() {
        let (conn, c) = setup();
        let mut panel = ClockPanel::load(&conn, c, ShiftRules::default(), false, at(10, 0)).unwrap();

        panel.begin_mutation().unwrap();
        assert!(panel.actions().iter().all(|g| !g.enabled));
        assert!(matches!(
            panel.perform(&conn, ClockAction::StartShift),
            Err(AppError::MutationInFlight)
        ));

        panel.finish_mutation(Err(AppError::Other("boom".into()))).ok();
        assert!(!panel.is_in_flight());
        assert!(panel.jornada().is_none());
        assert!(panel.perform(&conn, ClockAction::StartShift).is_ok());
    }

    #[test]
    fn failed_action_keeps_previous_state() {
        let (conn, c) = setup();
        let mut panel = ClockPanel::load(&conn, c, ShiftRules::default(), false, at(9, 0)).unwrap();
        assert!(matches!(
            panel.perform(&conn, ClockAction::StartShift),
            Err(AppError::ActionNotAllowed(_))
        ));
        assert!(panel.jornada().is_none());
        assert!(!panel.is_in_flight());
    }

    #[test]
    fn closed_day_without_lunch_cannot_start_lunch() {
        let (conn, c) = setup();
        let mut panel = ClockPanel::load(&conn, c, ShiftRules::default(), false, at(9, 30)).unwrap();
        panel.perform(&conn, ClockAction::StartShift).unwrap();
        panel.refresh_clock(at(12, 0));
        panel.perform(&conn, ClockAction::EndShift).unwrap();

        panel.refresh_clock(at(13, 0));
        assert!(panel.actions().is_empty());
        assert!(matches!(
            panel.perform(&conn, ClockAction::StartLunch),
            Err(AppError::ActionNotAllowed(_))
        ));
        assert!(panel.jornada().unwrap().lunch_start.is_none());
        assert_eq!(panel.status(), ShiftStatus::Finished);
    }

    #[test]
    fn render_shows_completed_day() {
        let (conn, c) = setup();
        let mut panel = ClockPanel::load(&conn, c, ShiftRules::default(), true, at(9, 0)).unwrap();
        panel.perform(&conn, ClockAction::EndShift).ok();
        panel.perform(&conn, ClockAction::StartShift).unwrap();
        panel.perform(&conn, ClockAction::EndShift).unwrap();

        let text = panel.render();
        assert!(text.contains("Registro de: Ana Pérez"));
        assert!(text.contains("Jornada finalizada"));
        assert!(text.contains("Jornada completada."));
    }
}
