use anyhow::Result;
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;

use udyampay::{logging, process, AppConfig, FieldKind, ValidationResult};
#[cfg(feature = "tui")]
use udyampay::{Theme, ThemeMode};

#[derive(Parser)]
#[command(name = "udyampay")]
#[command(about = "Payment app front end with keystroke-level field validation", long_about = None)]
#[command(version)]
struct Cli {
    /// JSON config file
    #[arg(long, env = "UDYAMPAY_CONFIG", global = true)]
    config: Option<PathBuf>,

    /// Start in dark mode
    #[arg(long, global = true)]
    dark: bool,

    /// Write logs here while the TUI is running
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the interactive terminal UI (default)
    Tui,

    /// Normalize and validate one value, printing the result as JSON
    Check {
        /// card_number, card_holder, expiry_date, cvv, upi_id, email, password, full_name, amount
        kind: FieldKind,

        value: String,

        /// Field value before this keystroke
        #[arg(long, default_value = "")]
        previous: String,
    },
}

#[derive(Serialize)]
struct CheckReport<'a> {
    #[serde(flatten)]
    result: &'a ValidationResult,
    message: Option<String>,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Check {
            kind,
            value,
            previous,
        }) => run_check(kind, &previous, &value),
        Some(Commands::Tui) | None => {
            run_ui_mode(cli.config, cli.dark, cli.log_file)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn run_check(kind: FieldKind, previous: &str, value: &str) -> Result<ExitCode> {
    logging::init_stderr(logging::DEFAULT_FILTER);

    let result = process(kind, previous, value);
    let report = CheckReport {
        result: &result,
        message: result.message(),
    };
    println!("{}", serde_json::to_string_pretty(&report)?);

    if result.is_valid() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}

#[cfg(feature = "tui")]
fn run_ui_mode(config: Option<PathBuf>, dark: bool, log_file: Option<PathBuf>) -> Result<()> {
    // Stderr belongs to the terminal UI, so logs only go to a file
    if let Some(path) = &log_file {
        logging::init_file(path, logging::DEFAULT_FILTER)?;
    }

    let config = AppConfig::load(config.as_deref())?;
    let mode = if config.dark_mode || dark {
        ThemeMode::DARK
    } else {
        ThemeMode::LIGHT
    };
    info!(mode = mode.name(), "starting ui");

    let mut app = udyampay::ui::App::new(config, Theme::new(mode));
    udyampay::ui::run_ui(&mut app)?;

    info!("ui closed");
    Ok(())
}

#[cfg(not(feature = "tui"))]
fn run_ui_mode(config: Option<PathBuf>, _dark: bool, _log_file: Option<PathBuf>) -> Result<()> {
    logging::init_stderr(logging::DEFAULT_FILTER);
    // Still surface a broken config file
    AppConfig::load(config.as_deref())?;
    info!("built without the tui feature");

    eprintln!("❌ TUI mode not available!");
    eprintln!("   Rebuild with: cargo build --features tui");
    eprintln!("   Or validate a single value: udyampay check <kind> <value>");
    std::process::exit(1);
}
