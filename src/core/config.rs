use crate::config::Config;
use crate::config::migrate::{fill_missing_keys, missing_keys};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use std::fs;
use std::path::Path;
use std::process::Command;

pub struct ConfigLogic;

impl ConfigLogic {
    pub fn print(cfg: &Config) -> AppResult<()> {
        println!("📄 Current configuration:\n");
        println!("{}", serde_yaml::to_string(cfg)?);
        Ok(())
    }

    /// Open the config file with `editor`, $EDITOR, $VISUAL, or the platform default.
    pub fn edit(path: &Path, editor: &Option<String>) -> AppResult<()> {
        let ed = editor
            .clone()
            .or_else(|| std::env::var("EDITOR").ok())
            .or_else(|| std::env::var("VISUAL").ok())
            .unwrap_or_else(|| {
                if cfg!(target_os = "windows") {
                    "notepad".into()
                } else {
                    "nano".into()
                }
            });

        let status = Command::new(&ed)
            .arg(path)
            .status()
            .map_err(|e| AppError::Config(format!("cannot run '{}': {}", ed, e)))?;

        if !status.success() {
            return Err(AppError::Config(format!("editor '{}' exited with {}", ed, status)));
        }
        success(format!("Configuration file edited using '{}'", ed));
        Ok(())
    }

    /// Report missing keys; with `fix`, add them with default values.
    pub fn check(path: &Path, fix: bool) -> AppResult<()> {
        if !path.exists() {
            warning(format!("No configuration file at {} (defaults in use).", path.display()));
            return Ok(());
        }

        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        let missing = missing_keys(&content);

        if missing.is_empty() {
            success("Configuration file is complete.");
            return Ok(());
        }

        if fix {
            let added = fill_missing_keys(path)?;
            success(format!("Added missing keys: {}", added.join(", ")));
        } else {
            warning(format!("Missing keys: {}", missing.join(", ")));
            info("Run `jornada config --check --fix` to add them with default values.");
        }
        Ok(())
    }
}
