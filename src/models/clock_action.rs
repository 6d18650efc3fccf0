use serde::Serialize;

/// The four self-service actions of a shift, in happy-path order.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
pub enum ClockAction {
    StartShift,
    StartLunch,
    EndLunch,
    EndShift,
}

impl ClockAction {
    /// Button label of the clock panel.
    pub fn label(&self) -> &'static str {
        match self {
            ClockAction::StartShift => "Iniciar Jornada",
            ClockAction::StartLunch => "Iniciar Almuerzo",
            ClockAction::EndLunch => "Finalizar Almuerzo",
            ClockAction::EndShift => "Finalizar Jornada",
        }
    }

    /// Short key used in the audit log.
    pub fn as_str(&self) -> &'static str {
        match self {
            ClockAction::StartShift => "clock_in",
            ClockAction::StartLunch => "lunch_start",
            ClockAction::EndLunch => "lunch_end",
            ClockAction::EndShift => "clock_out",
        }
    }
}
