use crate::cli::commands::{now, open_db, resolve_colaborador};
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::panel::ClockPanel;
use crate::errors::AppResult;
use crate::ui::messages::info;
use chrono::Duration;
use std::thread;

/// Keep the panel on screen. Every `refresh_seconds` the clock moves on and
/// the enabled actions are re-evaluated; the record is not re-fetched.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let Commands::Watch { for_id, ticks } = &cli.command else {
        return Ok(());
    };

    let pool = open_db(cfg)?;
    let (colaborador, bypass) = resolve_colaborador(&pool, cfg, *for_id)?;
    let mut panel = ClockPanel::load(&pool.conn, colaborador, cfg.rules()?, bypass, now(cli)?)?;

    let period = std::time::Duration::from_secs(cfg.refresh_seconds.max(1));
    info(format!(
        "Refreshing every {}s (Ctrl+C to stop)",
        period.as_secs()
    ));
    print!("{}", panel.render());

    let mut done = 0u32;
    while ticks.is_none_or(|max| done < max) {
        thread::sleep(period);

        // a pinned instant advances by the refresh period
        let next = if cli.at.is_some() {
            panel.now() + Duration::seconds(period.as_secs() as i64)
        } else {
            now(cli)?
        };
        panel.refresh_clock(next);

        println!();
        print!("{}", panel.render());
        done += 1;
    }

    Ok(())
}
