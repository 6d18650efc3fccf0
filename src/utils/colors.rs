/// ANSI color helper utilities for terminal output.
use crate::models::shift_status::ShiftStatus;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";

/// Status color, following the clock panel:
/// finished → green, working → blue, lunch → yellow, absent → grey
pub fn color_for_status(status: ShiftStatus) -> &'static str {
    match status {
        ShiftStatus::Finished => GREEN,
        ShiftStatus::Working | ShiftStatus::BackFromLunch => BLUE,
        ShiftStatus::OnLunch => YELLOW,
        ShiftStatus::Absent => GREY,
    }
}

/// Grey out empty values ("--:--", "").
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() || value.trim() == "--:--" {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}

pub fn colorize_status(status: ShiftStatus, text: &str) -> String {
    format!("{}{}{}", color_for_status(status), text, RESET)
}
