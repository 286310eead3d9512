use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use expense_tracker::cli::{
    handle_config_command, handle_init_command, handle_summary_command, Prompter, Session,
};
use expense_tracker::config::{Settings, SettingsOverrides, TrackerPaths};
use expense_tracker::models::Money;

/// Environment variable holding a tracing filter directive
const LOG_ENV: &str = "EXPENSE_TRACKER_LOG";

#[derive(Parser)]
#[command(
    name = "expense-tracker",
    author = "Kaylee Beyene",
    version,
    about = "Log expenses and see how much of the monthly budget is left",
    long_about = "Prompts for an expense (name, amount, category), appends it to a \
                  CSV ledger and prints spending by category, the remaining \
                  monthly budget and a suggested daily spend."
)]
struct Cli {
    /// Ledger CSV file (overrides the settings file)
    #[arg(short, long, global = true, env = "EXPENSE_TRACKER_LEDGER")]
    file: Option<PathBuf>,

    /// Monthly budget, e.g. 2000 or 1500.50 (overrides the settings file)
    #[arg(short, long, global = true, value_parser = parse_budget)]
    budget: Option<Money>,

    /// Increase log output (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Record expenses interactively (the default)
    Add,

    /// Print the budget summary of the current ledger
    Summary,

    /// Show configuration paths and effective settings
    Config,

    /// Write a settings file with the current values
    Init,
}

fn parse_budget(s: &str) -> Result<Money, String> {
    Money::parse(s.trim()).map_err(|e| e.to_string())
}

fn init_logging(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };

    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let paths = TrackerPaths::new()?;
    let settings = Settings::load_or_create(&paths)?.with_overrides(SettingsOverrides {
        ledger_file: cli.file,
        monthly_budget: cli.budget,
    })?;

    let today = || chrono::Local::now().date_naive();

    match cli.command.unwrap_or(Commands::Add) {
        Commands::Add => {
            let mut prompter = Prompter::stdio();
            Session::new(&settings).run(&mut prompter, today)?;
        }
        Commands::Summary => handle_summary_command(&settings, today())?,
        Commands::Config => handle_config_command(&paths, &settings),
        Commands::Init => handle_init_command(&paths, &settings)?,
    }

    Ok(())
}
