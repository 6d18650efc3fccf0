use crate::cli::commands::{now, open_db, resolve_colaborador};
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::clock::ClockLogic;
use crate::core::panel::ClockPanel;
use crate::errors::AppResult;
use crate::models::clock_action::ClockAction;
use crate::ui::messages::toast;

/// Run one clock action and show the updated panel.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Clock { action, for_id } = &cli.command {
        let action = ClockAction::from(*action);

        let pool = open_db(cfg)?;
        let (colaborador, bypass) = resolve_colaborador(&pool, cfg, *for_id)?;
        let mut panel = ClockPanel::load(&pool.conn, colaborador, cfg.rules()?, bypass, now(cli)?)?;

        panel.perform(&pool.conn, action)?;

        let (title, description) = ClockLogic::toast(action, &panel.colaborador);
        toast(title, description);
        println!();
        print!("{}", panel.render());
    }
    Ok(())
}
