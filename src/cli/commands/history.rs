use crate::cli::commands::{open_db, resolve_colaborador};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::history::HistoryLogic;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::History {
        for_id,
        page,
        page_size,
    } = cmd
    {
        let pool = open_db(cfg)?;
        let (colaborador, _) = resolve_colaborador(&pool, cfg, *for_id)?;

        let size = page_size.unwrap_or(cfg.history_page_size);
        let history = HistoryLogic::page(&pool.conn, colaborador.id, *page, size)?;

        print!("{}", HistoryLogic::render(&colaborador, &history));
    }
    Ok(())
}
