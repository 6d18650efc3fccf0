use crate::cli::commands::{now, open_db, resolve_colaborador};
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::panel::ClockPanel;
use crate::errors::AppResult;

/// Print the clock panel of today.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Status { for_id } = &cli.command {
        let pool = open_db(cfg)?;
        let (colaborador, bypass) = resolve_colaborador(&pool, cfg, *for_id)?;
        let panel = ClockPanel::load(&pool.conn, colaborador, cfg.rules()?, bypass, now(cli)?)?;
        print!("{}", panel.render());
    }
    Ok(())
}
