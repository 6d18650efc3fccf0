use crate::core::range::RangeKind;
use crate::export::ExportFormat;
use crate::models::clock_action::ClockAction;
use clap::{Parser, Subcommand};

/// Command-line interface definition for jornada
/// Shift clock-in terminal and team records, backed by SQLite
#[derive(Parser)]
#[command(
    name = "jornada",
    version = env!("CARGO_PKG_VERSION"),
    about = "Clock in/out, lunch breaks and admin review of daily work shifts, stored in SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Identity of the person at the terminal (overrides `user_id` in config)
    #[arg(global = true, long = "user")]
    pub user: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Pin the current instant ("YYYY-MM-DD HH:MM" or RFC 3339)
    #[arg(global = true, long = "at", hide = true)]
    pub at: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view, edit or check)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "fix", requires = "check", help = "Add missing fields with defaults")]
        fix: bool,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Manage colaborador profiles
    Colaborador {
        #[command(subcommand)]
        action: ColaboradorCmd,
    },

    /// Show the clock panel for today
    Status {
        #[arg(long = "for", value_name = "ID", help = "Colaborador id (admin-assisted entry)")]
        for_id: Option<i64>,
    },

    /// Register a clock action for today
    Clock {
        #[command(subcommand)]
        action: ClockCmd,

        #[arg(
            long = "for",
            global = true,
            value_name = "ID",
            help = "Colaborador id (admin-assisted entry)"
        )]
        for_id: Option<i64>,
    },

    /// Keep the clock panel on screen, refreshing the enabled actions
    Watch {
        #[arg(long = "for", value_name = "ID", help = "Colaborador id (admin-assisted entry)")]
        for_id: Option<i64>,

        #[arg(long = "ticks", help = "Stop after N refreshes")]
        ticks: Option<u32>,
    },

    /// List team records (admin view)
    List {
        #[arg(long, value_enum, default_value = "day")]
        range: RangeKind,

        #[arg(long, value_name = "YYYY-MM-DD", help = "Reference date (default: today)")]
        date: Option<String>,

        #[arg(long, value_name = "ID", help = "Only records of this colaborador")]
        colaborador: Option<i64>,
    },

    /// Correct the times of a record (admin). Empty value or "-" clears a time.
    Edit {
        /// Record id
        id: i64,

        #[arg(long = "in", value_name = "HH:MM", help = "Shift start")]
        shift_start: Option<String>,

        #[arg(long = "lunch-start", value_name = "HH:MM")]
        lunch_start: Option<String>,

        #[arg(long = "lunch-end", value_name = "HH:MM")]
        lunch_end: Option<String>,

        #[arg(long = "out", value_name = "HH:MM", help = "Shift end")]
        shift_end: Option<String>,
    },

    /// Paginated history of one colaborador
    History {
        #[arg(long = "for", value_name = "ID", help = "Colaborador id (default: your profile)")]
        for_id: Option<i64>,

        #[arg(long, default_value_t = 1)]
        page: u32,

        #[arg(long = "page-size")]
        page_size: Option<u32>,
    },

    /// Export team records
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, value_enum, default_value = "day")]
        range: RangeKind,

        #[arg(long, value_name = "YYYY-MM-DD", help = "Reference date (default: today)")]
        date: Option<String>,

        #[arg(long, value_name = "ID")]
        colaborador: Option<i64>,

        #[arg(long, short = 'f')]
        force: bool,
    },
}

#[derive(Subcommand)]
pub enum ColaboradorCmd {
    /// Add a colaborador profile
    Add {
        name: String,

        #[arg(default_value = "")]
        surname: String,

        #[arg(long = "user-id", help = "Auth identity linked to this profile")]
        user_id: Option<String>,
    },

    /// List all colaboradores
    List,
}

#[derive(Subcommand, Clone, Copy)]
pub enum ClockCmd {
    /// Start the shift
    In,
    /// Start the lunch break
    Lunch,
    /// End the lunch break
    Back,
    /// End the shift
    Out,
}

impl From<ClockCmd> for ClockAction {
    fn from(cmd: ClockCmd) -> Self {
        match cmd {
            ClockCmd::In => ClockAction::StartShift,
            ClockCmd::Lunch => ClockAction::StartLunch,
            ClockCmd::Back => ClockAction::EndLunch,
            ClockCmd::Out => ClockAction::EndShift,
        }
    }
}
