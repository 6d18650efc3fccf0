use crate::cli::commands::open_db;
use crate::cli::parser::{ColaboradorCmd, Commands};
use crate::config::Config;
use crate::db::log::ttlog;
use crate::db::queries::{insert_colaborador, list_colaboradores};
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};
use crate::utils::colors::{GREY, RESET};
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Colaborador { action } = cmd else {
        return Ok(());
    };

    let pool = open_db(cfg)?;

    match action {
        ColaboradorCmd::Add {
            name,
            surname,
            user_id,
        } => {
            let c = insert_colaborador(&pool.conn, user_id.as_deref(), name, surname)?;

            if let Err(e) = ttlog(
                &pool.conn,
                "colaborador_add",
                &format!("colaborador {}", c.id),
                &format!("{} (user: {})", c.full_name(), c.user_id.as_deref().unwrap_or("-")),
            ) {
                warning(format!("Failed to write internal log: {}", e));
            }

            success(format!("Colaborador #{} added: {}", c.id, c.full_name()));
        }
        ColaboradorCmd::List => {
            let all = list_colaboradores(&pool.conn)?;
            if all.is_empty() {
                warning("No colaboradores registered.");
                return Ok(());
            }

            let mut table = Table::new(&["ID", "Nombre", "Usuario"]);
            for c in all {
                let user = c
                    .user_id
                    .clone()
                    .unwrap_or_else(|| format!("{GREY}-{RESET}"));
                table.add_row(vec![c.id.to_string(), c.full_name(), user]);
            }
            print!("{}", table.render());
        }
    }

    Ok(())
}
