use crate::cli::commands::open_db;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::admin::{AdminLogic, TimeEdits};
use crate::db::queries::list_jornadas;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};
use crate::utils::time::parse_edit_field;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit {
        id,
        shift_start,
        lunch_start,
        lunch_end,
        shift_end,
    } = cmd
    {
        let edits = TimeEdits {
            shift_start: parse_edit_field(shift_start.as_ref())?,
            lunch_start: parse_edit_field(lunch_start.as_ref())?,
            lunch_end: parse_edit_field(lunch_end.as_ref())?,
            shift_end: parse_edit_field(shift_end.as_ref())?,
        };

        if edits.is_empty() {
            warning("No field to change (use --in, --lunch-start, --lunch-end, --out).");
            return Ok(());
        }

        let pool = open_db(cfg)?;
        let updated = AdminLogic::edit(&pool.conn, *id, &edits)?;

        success("Registro actualizado correctamente.");

        // show the corrected row as the admin table does
        let rows: Vec<_> = list_jornadas(
            &pool.conn,
            &updated.date,
            &updated.date,
            Some(updated.colaborador_id),
        )?
        .into_iter()
        .filter(|r| r.jornada.id == updated.id)
        .collect();
        print!("{}", AdminLogic::render_table(&rows));
    }
    Ok(())
}
