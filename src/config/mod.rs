use crate::core::gate::ShiftRules;
use crate::errors::{AppError, AppResult};
use crate::utils::time::{parse_lunch_window, parse_time};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

pub mod migrate; // use submodule at src/config/migrate.rs

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    /// Identity of the person using this terminal (links to `colaboradores.user_id`)
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default = "default_clock_in_from")]
    pub clock_in_from: String,
    #[serde(default = "default_lunch_window")]
    pub lunch_window: String,
    #[serde(default = "default_min_lunch")]
    pub min_lunch_minutes: i64,
    #[serde(default = "default_refresh_seconds")]
    pub refresh_seconds: u64,
    #[serde(default)]
    pub bypass_time_restrictions: bool,
    #[serde(default = "default_page_size")]
    pub history_page_size: u32,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_clock_in_from() -> String {
    "09:30".to_string()
}
fn default_lunch_window() -> String {
    "13:00-15:00".to_string()
}
fn default_min_lunch() -> i64 {
    30
}
fn default_refresh_seconds() -> u64 {
    30
}
fn default_page_size() -> u32 {
    10
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            user_id: None,
            clock_in_from: default_clock_in_from(),
            lunch_window: default_lunch_window(),
            min_lunch_minutes: default_min_lunch(),
            refresh_seconds: default_refresh_seconds(),
            bypass_time_restrictions: false,
            history_page_size: default_page_size(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("jornada")
        } else {
            let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
            home.join(".jornada")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("jornada.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("jornada.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if path.exists() {
            let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
            Ok(serde_yaml::from_str(&content)?)
        } else {
            Ok(Config::default())
        }
    }

    /// Typed business rules built from the textual settings.
    pub fn rules(&self) -> AppResult<ShiftRules> {
        let clock_in_from = parse_time(&self.clock_in_from).ok_or_else(|| {
            AppError::Config(format!("clock_in_from: '{}'", self.clock_in_from))
        })?;
        let (lunch_from, lunch_until) = parse_lunch_window(&self.lunch_window).ok_or_else(|| {
            AppError::Config(format!("lunch_window: '{}'", self.lunch_window))
        })?;

        if self.min_lunch_minutes < 0 {
            return Err(AppError::Config(format!(
                "min_lunch_minutes must not be negative (got {})",
                self.min_lunch_minutes
            )));
        }

        Ok(ShiftRules {
            clock_in_from,
            lunch_from,
            lunch_until,
            min_lunch_minutes: self.min_lunch_minutes,
        })
    }

    /// Initialize configuration and database files
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> AppResult<Config> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // DB path: user provided or default
        let db_path = if let Some(name) = custom_db {
            let p = crate::utils::path::expand_tilde(&name);
            if p.is_absolute() { p } else { dir.join(p) }
        } else {
            Self::database_file()
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        // Write config file
        if !is_test {
            let yaml = serde_yaml::to_string(&config)?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())
                .map_err(|_: io::Error| AppError::ConfigSave)?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let cfg: Config = serde_yaml::from_str("database: /tmp/x.sqlite\n").unwrap();
        assert_eq!(cfg.database, "/tmp/x.sqlite");
        assert_eq!(cfg.clock_in_from, "09:30");
        assert_eq!(cfg.lunch_window, "13:00-15:00");
        assert_eq!(cfg.min_lunch_minutes, 30);
        assert_eq!(cfg.refresh_seconds, 30);
        assert!(!cfg.bypass_time_restrictions);
        assert!(cfg.user_id.is_none());
    }

    #[test]
    fn rules_are_parsed_from_settings() {
        let cfg = Config {
            clock_in_from: "08:45".into(),
            lunch_window: "12:30-14:00".into(),
            min_lunch_minutes: 45,
            ..Config::default()
        };
        let rules = cfg.rules().unwrap();
        assert_eq!(rules.clock_in_from, NaiveTime::from_hms_opt(8, 45, 0).unwrap());
        assert_eq!(rules.lunch_from, NaiveTime::from_hms_opt(12, 30, 0).unwrap());
        assert_eq!(rules.lunch_until, NaiveTime::from_hms_opt(14, 0, 0).unwrap());
        assert_eq!(rules.min_lunch_minutes, 45);
    }

    #[test]
    fn bad_lunch_window_is_a_config_error() {
        let cfg = Config {
            lunch_window: "lunchtime".into(),
            ..Config::default()
        };
        assert!(matches!(cfg.rules(), Err(AppError::Config(_))));
    }
}
