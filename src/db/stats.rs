use crate::db::pool::DbPool;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use rusqlite::OptionalExtension;
use std::fs;

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> rusqlite::Result<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);

    //
    // 2) COUNTS
    //
    let colaboradores: i64 =
        pool.conn
            .query_row("SELECT COUNT(*) FROM colaboradores", [], |row| row.get(0))?;
    let jornadas: i64 =
        pool.conn
            .query_row("SELECT COUNT(*) FROM registros_jornada", [], |row| row.get(0))?;
    let open: i64 = pool.conn.query_row(
        "SELECT COUNT(*) FROM registros_jornada WHERE shift_end IS NULL",
        [],
        |row| row.get(0),
    )?;

    println!("{}• Colaboradores:{} {}{}{}", CYAN, RESET, GREEN, colaboradores, RESET);
    println!("{}• Jornadas:{} {}{}{}", CYAN, RESET, GREEN, jornadas, RESET);
    println!("{}• Open jornadas:{} {}", CYAN, RESET, open);

    //
    // 3) DATE RANGE
    //
    let (first, last): (Option<String>, Option<String>) = pool
        .conn
        .query_row(
            "SELECT MIN(date), MAX(date) FROM registros_jornada",
            [],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )
        .optional()?
        .unwrap_or((None, None));

    let dash = || format!("{GREY}--{RESET}");
    println!("{}• Date range:{}", CYAN, RESET);
    println!("    from: {}", first.unwrap_or_else(dash));
    println!("    to:   {}", last.unwrap_or_else(dash));

    println!();
    Ok(())
}
