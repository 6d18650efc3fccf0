//! Business rules deciding which clock actions are offered and enabled.

use crate::errors::{AppError, AppResult};
use crate::models::clock_action::ClockAction;
use crate::models::jornada::{Jornada, Timestamp};
use chrono::NaiveTime;

/// Time windows and minimum lunch, built from the configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShiftRules {
    pub clock_in_from: NaiveTime,
    pub lunch_from: NaiveTime,
    /// Exclusive upper bound of the lunch window.
    pub lunch_until: NaiveTime,
    pub min_lunch_minutes: i64,
}

/// Literal `HH:MM` used by the defaults below.
fn hm(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).expect("literal time of day is valid")
}

impl Default for ShiftRules {
    fn default() -> Self {
        Self {
            clock_in_from: hm(9, 30),
            lunch_from: hm(13, 0),
            lunch_until: hm(15, 0),
            min_lunch_minutes: 30,
        }
    }
}

/// Inputs that change between evaluations of the same record.
#[derive(Debug, Clone, Copy)]
pub struct GateContext {
    pub now: Timestamp,
    /// Skip the time-of-day windows (admin-assisted entry).
    pub bypass: bool,
    /// A write is still pending: everything is disabled.
    pub in_flight: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionGate {
    pub action: ClockAction,
    pub enabled: bool,
    /// Why the action is disabled, if it is.
    pub reason: Option<String>,
}

/// `9:30 AM` style.
fn twelve_hour(t: NaiveTime) -> String {
    t.format("%-I:%M %p").to_string()
}

/// Actions offered for the current state of the record, in display order.
pub fn offered_actions(record: Option<&Jornada>) -> Vec<ClockAction> {
    match record {
        None => vec![ClockAction::StartShift],
        Some(j) if j.shift_end.is_some() => Vec::new(),
        Some(j) if j.lunch_start.is_none() => {
            vec![ClockAction::StartLunch, ClockAction::EndShift]
        }
        Some(j) if j.lunch_end.is_none() => vec![ClockAction::EndLunch],
        Some(j) if j.shift_end.is_none() => vec![ClockAction::EndShift],
        Some(_) => Vec::new(),
    }
}

pub fn can_start_shift(now: NaiveTime, rules: &ShiftRules, bypass: bool) -> bool {
    bypass || now >= rules.clock_in_from
}

pub fn can_start_lunch(now: NaiveTime, rules: &ShiftRules, bypass: bool) -> bool {
    bypass || (now >= rules.lunch_from && now < rules.lunch_until)
}

/// Whole minutes since lunch started (truncated).
pub fn lunch_minutes_elapsed(lunch_start: &Timestamp, now: &Timestamp) -> i64 {
    (*now - *lunch_start).num_minutes()
}

/// Time restriction for one action; `None` when the action is allowed.
fn restriction(
    action: ClockAction,
    record: Option<&Jornada>,
    rules: &ShiftRules,
    ctx: &GateContext,
) -> Option<String> {
    let now_time = ctx.now.time();

    match action {
        ClockAction::StartShift => (!can_start_shift(now_time, rules, ctx.bypass)).then(|| {
            format!(
                "Solo se puede iniciar jornada a partir de las {}.",
                twelve_hour(rules.clock_in_from)
            )
        }),
        ClockAction::StartLunch => (!can_start_lunch(now_time, rules, ctx.bypass)).then(|| {
            format!(
                "El almuerzo solo puede iniciar entre la {} y {}.",
                twelve_hour(rules.lunch_from),
                twelve_hour(rules.lunch_until)
            )
        }),
        // The minimum lunch applies even with bypass.
        ClockAction::EndLunch => {
            let start = record.and_then(|j| j.lunch_start.as_ref())?;
            let elapsed = lunch_minutes_elapsed(start, &ctx.now);
            (elapsed < rules.min_lunch_minutes).then(|| {
                format!(
                    "El descanso debe durar al menos {} minutos. Podrás finalizar en {} min.",
                    rules.min_lunch_minutes,
                    rules.min_lunch_minutes - elapsed
                )
            })
        }
        ClockAction::EndShift => None,
    }
}

/// Evaluate every offered action.
pub fn evaluate(record: Option<&Jornada>, rules: &ShiftRules, ctx: &GateContext) -> Vec<ActionGate> {
    offered_actions(record)
        .into_iter()
        .map(|action| {
            let reason = restriction(action, record, rules, ctx);
            let enabled = reason.is_none() && !ctx.in_flight;
            let reason = if ctx.in_flight && reason.is_none() {
                Some("Operación en curso.".to_string())
            } else {
                reason
            };
            ActionGate {
                action,
                enabled,
                reason,
            }
        })
        .collect()
}

/// Fail unless `action` is offered and enabled right now.
pub fn check(
    action: ClockAction,
    record: Option<&Jornada>,
    rules: &ShiftRules,
    ctx: &GateContext,
) -> AppResult<()> {
    if ctx.in_flight {
        return Err(AppError::MutationInFlight);
    }

    let gate = evaluate(record, rules, ctx)
        .into_iter()
        .find(|g| g.action == action)
        .ok_or_else(|| {
            AppError::ActionNotAllowed(format!(
                "'{}' is not available in the current state of the jornada.",
                action.label()
            ))
        })?;

    if gate.enabled {
        Ok(())
    } else {
        Err(AppError::ActionNotAllowed(
            gate.reason.unwrap_or_else(|| action.label().to_string()),
        ))
    }
}
