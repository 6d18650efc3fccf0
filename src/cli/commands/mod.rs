pub mod clock;
pub mod colaborador;
pub mod config;
pub mod db;
pub mod edit;
pub mod export;
pub mod history;
pub mod init;
pub mod list;
pub mod log;
pub mod status;
pub mod watch;

use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::db::queries::{get_colaborador, get_colaborador_profile};
use crate::errors::{AppError, AppResult};
use crate::models::colaborador::Colaborador;
use crate::models::jornada::Timestamp;
use crate::utils::date::{parse_date, today};
use crate::utils::time::parse_now;
use chrono::{Local, NaiveDate};

/// Open the configured database, bringing its schema up to date.
pub(crate) fn open_db(cfg: &Config) -> AppResult<DbPool> {
    let pool = DbPool::new(&cfg.database)?;
    init_db(&pool.conn)?;
    Ok(pool)
}

/// The instant used for gating: `--at` when given, wall clock otherwise.
pub(crate) fn now(cli: &Cli) -> AppResult<Timestamp> {
    match &cli.at {
        Some(s) => parse_now(s),
        None => Ok(Local::now()),
    }
}

pub(crate) fn reference_date(date: &Option<String>) -> AppResult<NaiveDate> {
    match date {
        Some(d) => parse_date(d).ok_or_else(|| AppError::InvalidDate(d.clone())),
        None => Ok(today()),
    }
}

/// Who the panel acts for, and whether time windows are bypassed.
///
/// `--for <id>` is admin-assisted entry (always bypassed); otherwise the
/// profile linked to the configured user identity.
pub(crate) fn resolve_colaborador(
    pool: &DbPool,
    cfg: &Config,
    for_id: Option<i64>,
) -> AppResult<(Colaborador, bool)> {
    if let Some(id) = for_id {
        let c = get_colaborador(&pool.conn, id)?
            .ok_or_else(|| AppError::ColaboradorNotFound(id.to_string()))?;
        return Ok((c, true));
    }

    let user_id = cfg.user_id.as_deref().ok_or_else(|| {
        AppError::ProfileNotLinked("no user identity configured (use --user or set user_id)".into())
    })?;

    let c = get_colaborador_profile(&pool.conn, user_id)?
        .ok_or_else(|| AppError::ProfileNotLinked(user_id.to_string()))?;

    Ok((c, cfg.bypass_time_restrictions))
}
