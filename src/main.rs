use std::io::{self, stderr};
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use ledger_cli::cli::{handle_add_command, handle_view_command, AddArgs, Shell, ViewArgs};
use ledger_cli::config::{LedgerPaths, Settings};
use ledger_cli::storage::LedgerStore;

#[derive(Parser)]
#[command(
    name = "ledger",
    version,
    about = "Terminal-based personal income and expense ledger",
    long_about = "ledger records dated income and expense entries in a CSV file, \
                  shows them by date range with totals, and charts daily income \
                  against expenses in the terminal."
)]
struct Cli {
    /// Ledger CSV file (overrides the configured location)
    #[arg(short, long, global = true, env = "LEDGER_CLI_FILE")]
    file: Option<PathBuf>,

    /// Log level: error, warn, info, debug, trace
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the ledger file and settings
    Init,

    /// Add a transaction
    Add(AddArgs),

    /// List transactions and totals within a date range
    View(ViewArgs),

    /// Interactive menu (the default)
    #[command(alias = "menu")]
    Shell,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = LedgerPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let log_level = cli.log_level.as_deref().unwrap_or(&settings.log_level);
    setup_logging(parse_log_level(log_level));

    // Resolved once; every command works against this one file
    let ledger_path = cli.file.unwrap_or_else(|| paths.ledger_file(&settings));
    let store = LedgerStore::new(ledger_path);

    match cli.command {
        Some(Commands::Init) => {
            store.initialize()?;
            settings.save(&paths)?;
            println!("Ledger initialized at: {}", store.path().display());
            println!("Settings saved to:     {}", paths.settings_file().display());
        }
        Some(Commands::Add(args)) => handle_add_command(&store, args)?,
        Some(Commands::View(args)) => handle_view_command(&store, &settings, args)?,
        Some(Commands::Config) => {
            println!("ledger configuration");
            println!("====================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Ledger file:    {}", store.path().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Log level:       {}", settings.log_level);
            println!("  Initialized:     {}", paths.is_initialized());
        }
        Some(Commands::Shell) | None => {
            let stdin = io::stdin();
            let mut shell = Shell::new(&store, &settings, stdin.lock(), io::stdout());
            shell.run()?;
        }
    }

    Ok(())
}

fn parse_log_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "info" => LevelFilter::INFO,
        "warn" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        "off" => LevelFilter::OFF,
        _ => {
            eprintln!("Invalid log level '{}', defaulting to 'warn'", level);
            LevelFilter::WARN
        }
    }
}

fn setup_logging(level: LevelFilter) {
    // stdout carries listings and prompts, so logs go to stderr
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry().with(terminal_log).init();
}
