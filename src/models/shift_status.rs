use serde::Serialize;

/// Display status of a jornada, derived from its four timestamps.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ShiftStatus {
    Absent,
    Working,
    OnLunch,
    BackFromLunch,
    Finished,
}

impl ShiftStatus {
    /// Stable key (exports, JSON).
    pub fn as_str(&self) -> &'static str {
        match self {
            ShiftStatus::Absent => "absent",
            ShiftStatus::Working => "working",
            ShiftStatus::OnLunch => "on_lunch",
            ShiftStatus::BackFromLunch => "back_from_lunch",
            ShiftStatus::Finished => "finished",
        }
    }

    /// Label shown on the self-service clock panel.
    pub fn label(&self) -> &'static str {
        match self {
            ShiftStatus::Absent => "Fuera de servicio",
            ShiftStatus::Working | ShiftStatus::BackFromLunch => "Trabajando",
            ShiftStatus::OnLunch => "En almuerzo",
            ShiftStatus::Finished => "Jornada finalizada",
        }
    }

    /// Label shown in the admin table.
    pub fn admin_label(&self) -> &'static str {
        match self {
            ShiftStatus::Absent => "Ausente",
            ShiftStatus::Working | ShiftStatus::BackFromLunch => "Trabajando",
            ShiftStatus::OnLunch => "En Almuerzo",
            ShiftStatus::Finished => "Finalizada",
        }
    }
}
