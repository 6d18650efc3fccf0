//! Formatting utilities used for CLI and export outputs.

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Worked time as shown in the admin table: `8h 00m`, or `--:--` when
/// the shift is not closed.
pub fn worked_readable(mins: Option<i64>) -> String {
    match mins {
        Some(m) => format!("{}h {:02}m", m / 60, m % 60),
        None => "--:--".to_string(),
    }
}
