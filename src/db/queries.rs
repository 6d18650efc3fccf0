use crate::errors::{AppError, AppResult};
use crate::models::colaborador::Colaborador;
use crate::models::jornada::{Jornada, JornadaWithColaborador, ShiftTimes, Timestamp};
use crate::utils::time::{from_storage, to_storage};
use chrono::{Local, NaiveDate};
use rusqlite::{Connection, OptionalExtension, Row, params};

const JORNADA_COLUMNS: &str =
    "j.id, j.colaborador_id, j.date, j.shift_start, j.lunch_start, j.lunch_end, j.shift_end, j.created_at";

/// Single-field updates performed by the clock panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShiftField {
    LunchStart,
    LunchEnd,
    ShiftEnd,
}

impl ShiftField {
    fn column(&self) -> &'static str {
        match self {
            ShiftField::LunchStart => "lunch_start",
            ShiftField::LunchEnd => "lunch_end",
            ShiftField::ShiftEnd => "shift_end",
        }
    }
}

fn conversion_error(idx: usize, err: AppError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(idx, rusqlite::types::Type::Text, Box::new(err))
}

fn get_timestamp(row: &Row, idx: usize) -> rusqlite::Result<Option<Timestamp>> {
    let raw: Option<String> = row.get(idx)?;
    match raw {
        None => Ok(None),
        Some(s) if s.is_empty() => Ok(None),
        Some(s) => from_storage(&s).map(Some).map_err(|e| conversion_error(idx, e)),
    }
}

/// Map a row selected with `JORNADA_COLUMNS` (columns 0..=7).
pub fn map_jornada(row: &Row) -> rusqlite::Result<Jornada> {
    let date_str: String = row.get(2)?;
    let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d")
        .map_err(|_| conversion_error(2, AppError::InvalidDate(date_str.clone())))?;

    Ok(Jornada {
        id: row.get(0)?,
        colaborador_id: row.get(1)?,
        date,
        shift_start: get_timestamp(row, 3)?,
        lunch_start: get_timestamp(row, 4)?,
        lunch_end: get_timestamp(row, 5)?,
        shift_end: get_timestamp(row, 6)?,
        created_at: row.get(7)?,
    })
}

fn map_colaborador_at(row: &Row, offset: usize) -> rusqlite::Result<Colaborador> {
    Ok(Colaborador {
        id: row.get(offset)?,
        user_id: row.get(offset + 1)?,
        name: row.get(offset + 2)?,
        surname: row.get(offset + 3)?,
    })
}

pub fn map_colaborador(row: &Row) -> rusqlite::Result<Colaborador> {
    map_colaborador_at(row, 0)
}

fn opt_storage(ts: Option<&Timestamp>) -> Option<String> {
    ts.map(to_storage)
}

// ---------------------------
// Colaboradores
// ---------------------------

/// Profile linked to an auth identity. `None` when the identity is not linked.
pub fn get_colaborador_profile(conn: &Connection, user_id: &str) -> AppResult<Option<Colaborador>> {
    let c = conn
        .query_row(
            "SELECT id, user_id, name, surname FROM colaboradores WHERE user_id = ?1",
            [user_id],
            map_colaborador,
        )
        .optional()?;
    Ok(c)
}

pub fn get_colaborador(conn: &Connection, id: i64) -> AppResult<Option<Colaborador>> {
    let c = conn
        .query_row(
            "SELECT id, user_id, name, surname FROM colaboradores WHERE id = ?1",
            [id],
            map_colaborador,
        )
        .optional()?;
    Ok(c)
}

/// All colaboradores, ordered by name.
pub fn list_colaboradores(conn: &Connection) -> AppResult<Vec<Colaborador>> {
    let mut stmt = conn.prepare(
        "SELECT id, user_id, name, surname FROM colaboradores
         ORDER BY name ASC, surname ASC, id ASC",
    )?;
    let rows = stmt.query_map([], map_colaborador)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn insert_colaborador(
    conn: &Connection,
    user_id: Option<&str>,
    name: &str,
    surname: &str,
) -> AppResult<Colaborador> {
    conn.execute(
        "INSERT INTO colaboradores (user_id, name, surname) VALUES (?1, ?2, ?3)",
        params![user_id, name, surname],
    )?;
    let id = conn.last_insert_rowid();
    get_colaborador(conn, id)?.ok_or_else(|| AppError::ColaboradorNotFound(id.to_string()))
}

// ---------------------------
// Jornadas
// ---------------------------

pub fn get_jornada(conn: &Connection, id: i64) -> AppResult<Option<Jornada>> {
    let sql = format!("SELECT {JORNADA_COLUMNS} FROM registros_jornada j WHERE j.id = ?1");
    let j = conn.query_row(&sql, [id], map_jornada).optional()?;
    Ok(j)
}

/// The record of a colaborador for one date.
/// More than one match means the one-per-day rule was broken upstream.
pub fn get_jornada_by_date(
    conn: &Connection,
    colaborador_id: i64,
    date: &NaiveDate,
) -> AppResult<Option<Jornada>> {
    let date_str = date.format("%Y-%m-%d").to_string();
    let sql = format!(
        "SELECT {JORNADA_COLUMNS} FROM registros_jornada j
         WHERE j.colaborador_id = ?1 AND j.date = ?2
         ORDER BY j.id ASC"
    );
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(params![colaborador_id, &date_str], map_jornada)?;

    let mut found = Vec::new();
    for r in rows {
        found.push(r?);
    }

    if found.len() > 1 {
        return Err(AppError::DuplicateJornada {
            colaborador_id,
            date: date_str,
        });
    }
    Ok(found.pop())
}

/// Create the record of the day with its shift start.
/// The record date is the local date of `at`.
pub fn insert_jornada_start(conn: &Connection, colaborador_id: i64, at: &Timestamp) -> AppResult<Jornada> {
    conn.execute(
        "INSERT INTO registros_jornada (colaborador_id, date, shift_start, created_at)
         VALUES (?1, ?2, ?3, ?4)",
        params![
            colaborador_id,
            at.date_naive().format("%Y-%m-%d").to_string(),
            to_storage(at),
            Local::now().to_rfc3339(),
        ],
    )?;
    let id = conn.last_insert_rowid();
    get_jornada(conn, id)?.ok_or(AppError::JornadaNotFound(id))
}

/// Set one timestamp of an existing record.
pub fn update_jornada_field(
    conn: &Connection,
    id: i64,
    field: ShiftField,
    at: &Timestamp,
) -> AppResult<Jornada> {
    let sql = format!("UPDATE registros_jornada SET {} = ?1 WHERE id = ?2", field.column());
    let changed = conn.execute(&sql, params![to_storage(at), id])?;
    if changed == 0 {
        return Err(AppError::JornadaNotFound(id));
    }
    get_jornada(conn, id)?.ok_or(AppError::JornadaNotFound(id))
}

/// Overwrite all four timestamps (admin correction). No ordering checks.
pub fn overwrite_jornada_times(conn: &Connection, id: i64, times: &ShiftTimes) -> AppResult<Jornada> {
    let changed = conn.execute(
        "UPDATE registros_jornada
         SET shift_start = ?1, lunch_start = ?2, lunch_end = ?3, shift_end = ?4
         WHERE id = ?5",
        params![
            opt_storage(times.shift_start.as_ref()),
            opt_storage(times.lunch_start.as_ref()),
            opt_storage(times.lunch_end.as_ref()),
            opt_storage(times.shift_end.as_ref()),
            id,
        ],
    )?;
    if changed == 0 {
        return Err(AppError::JornadaNotFound(id));
    }
    get_jornada(conn, id)?.ok_or(AppError::JornadaNotFound(id))
}

/// Records in `[start, end]` (inclusive), optionally for one colaborador,
/// joined with the colaborador identity.
/// Ordered by date (newest first), then colaborador id.
pub fn list_jornadas(
    conn: &Connection,
    start: &NaiveDate,
    end: &NaiveDate,
    colaborador_id: Option<i64>,
) -> AppResult<Vec<JornadaWithColaborador>> {
    let sql = format!(
        "SELECT {JORNADA_COLUMNS}, c.id, c.user_id, c.name, c.surname
         FROM registros_jornada j
         LEFT JOIN colaboradores c ON c.id = j.colaborador_id
         WHERE j.date BETWEEN ?1 AND ?2
           AND (?3 IS NULL OR j.colaborador_id = ?3)
         ORDER BY j.date DESC, j.colaborador_id ASC, j.id ASC"
    );

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(
        params![
            start.format("%Y-%m-%d").to_string(),
            end.format("%Y-%m-%d").to_string(),
            colaborador_id,
        ],
        |row| {
            let jornada = map_jornada(row)?;
            let joined_id: Option<i64> = row.get(8)?;
            let colaborador = match joined_id {
                Some(_) => Some(map_colaborador_at(row, 8)?),
                None => None,
            };
            Ok(JornadaWithColaborador {
                jornada,
                colaborador,
            })
        },
    )?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// One page (1-based) of a colaborador's records, newest first.
pub fn jornada_history(
    conn: &Connection,
    colaborador_id: i64,
    page: u32,
    page_size: u32,
) -> AppResult<Vec<Jornada>> {
    let page = page.max(1);
    let offset = i64::from(page - 1) * i64::from(page_size);

    let sql = format!(
        "SELECT {JORNADA_COLUMNS} FROM registros_jornada j
         WHERE j.colaborador_id = ?1
         ORDER BY j.date DESC, j.id DESC
         LIMIT ?2 OFFSET ?3"
    );
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(params![colaborador_id, i64::from(page_size), offset], map_jornada)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
