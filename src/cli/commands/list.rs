use crate::cli::commands::{open_db, reference_date};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::admin::AdminLogic;
use crate::core::range::DateRange;
use crate::errors::AppResult;
use crate::utils::formatting::bold;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        range,
        date,
        colaborador,
    } = cmd
    {
        let pool = open_db(cfg)?;
        let range = DateRange::around(reference_date(date)?, *range);

        let rows = AdminLogic::query(&pool.conn, &range, *colaborador)?;

        println!("{}\n", bold(&range.describe()));
        print!("{}", AdminLogic::render_table(&rows));
    }
    Ok(())
}
