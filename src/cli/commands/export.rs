use crate::cli::commands::{open_db, reference_date};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::range::DateRange;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        range,
        date,
        colaborador,
        force,
    } = cmd
    {
        let pool = open_db(cfg)?;
        let range = DateRange::around(reference_date(date)?, *range);
        ExportLogic::export(&pool, *format, file, &range, *colaborador, *force)?;
    }
    Ok(())
}
