use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use sportstream::backend::BackendSettings;
use sportstream::commands;
use sportstream::config::{self, TimeZoneSetting};
use sportstream::dashboard::Dashboard;
use sportstream::tui;
use sportstream::view::MatchView;

// Default Configuration Constants
/// Default log level when not specified
const DEFAULT_LOG_LEVEL: &str = "info";

/// Default log file path (no logging to file)
const DEFAULT_LOG_FILE: &str = "/dev/null";

#[derive(Parser)]
#[command(name = "sportstream")]
#[command(about = "Live football match dashboard", long_about = "Live football match dashboard\n\nIf no command is specified, the program starts in interactive mode.")]
struct Cli {
    /// Set log level (trace, debug, info, warn, error)
    #[arg(short = 'L', long, global = true, default_value = DEFAULT_LOG_LEVEL)]
    log_level: String,

    /// Log file path (default: /dev/null for no logging)
    #[arg(short = 'F', long, global = true, default_value = DEFAULT_LOG_FILE)]
    log_file: String,

    /// Load matches from a TOML file instead of the built-in list
    #[arg(short = 'm', long = "matches", global = true, value_name = "FILE")]
    matches_file: Option<PathBuf>,

    /// Zone for kick-off times: local, utc or an offset like +02:00
    #[arg(short = 'z', long, global = true, value_name = "ZONE")]
    time_zone: Option<TimeZoneSetting>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print every match card and exit
    Matches,
    /// Display current configuration
    Config,
}

fn init_logging(log_level: &str, log_file: &str) {
    let level = match log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };
    let file = match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
    {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Failed to open log file {}: {}", log_file, e);
            return;
        }
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
    }
}

/// Handle the config command - display current configuration
fn handle_config_command(cfg: &config::Config) {
    let (path_str, exists) = match config::get_config_path() {
        Some(path) => {
            let exists = path.exists();
            (path.display().to_string(), exists)
        }
        None => ("Unable to determine config path".to_string(), false),
    };

    println!("Configuration File: {} (Exists: {})", path_str, if exists { "yes" } else { "no" });
    println!();
    println!("Current Configuration:");
    println!("=====================");
    println!("log_level: {}", cfg.log_level);
    println!("log_file: {}", cfg.log_file);
    println!("time_zone: {}", cfg.time_zone);
    println!("use_unicode: {}", cfg.use_unicode);
    match &cfg.matches_file {
        Some(path) => println!("matches_file: {}", path.display()),
        None => println!("matches_file: (built-in sample matches)"),
    }
    println!();
    println!("[theme]");
    println!("accent_fg: {:?}", cfg.theme.accent_fg);
    println!("selection_fg: {:?}", cfg.theme.selection_fg);
    println!();
    println!("[backend]");
    println!("status: {}", BackendSettings::from_env_and_config(&cfg.backend).status());
}

/// Resolve log configuration from CLI args and config file
/// CLI arguments take precedence over config file
fn resolve_log_config<'a>(cli: &'a Cli, config: &'a config::Config) -> (&'a str, &'a str) {
    let log_level = if cli.log_level != DEFAULT_LOG_LEVEL {
        cli.log_level.as_str()
    } else {
        config.log_level.as_str()
    };

    let log_file = if cli.log_file != DEFAULT_LOG_FILE {
        cli.log_file.as_str()
    } else {
        config.log_file.as_str()
    };

    (log_level, log_file)
}

/// Fold the data-source flags into the file configuration
fn apply_cli_overrides(cli: &Cli, config: &mut config::Config) {
    if let Some(path) = &cli.matches_file {
        config.matches_file = Some(path.clone());
    }
    if let Some(zone) = cli.time_zone {
        config.time_zone = zone;
    }
}

fn build_dashboard(config: &config::Config) -> anyhow::Result<Dashboard> {
    let store = commands::load_store(config.matches_file.as_deref())?;
    let view = MatchView::new(Box::new(store), config.time_zone);
    let settings = BackendSettings::from_env_and_config(&config.backend);
    Ok(Dashboard::new(view).with_backend_settings(&settings))
}

/// Execute a CLI command by routing it to the appropriate command handler
fn execute_command(config: &config::Config, command: Option<Commands>) -> anyhow::Result<()> {
    if let Some(Commands::Config) = command {
        handle_config_command(config);
        return Ok(());
    }

    let dashboard = build_dashboard(config)?;
    let display = config.display();
    match command {
        Some(Commands::Matches) => commands::matches::run(&dashboard, &display),
        _ => tui::run(&dashboard, &display)
            .map_err(|e| anyhow::anyhow!("Error running TUI: {}", e)),
    }
}

fn main() {
    let mut config = config::read();
    let cli = Cli::parse();

    // Resolve and initialize logging
    let (log_level, log_file) = resolve_log_config(&cli, &config);
    if log_file != DEFAULT_LOG_FILE {
        init_logging(log_level, log_file);
    }

    apply_cli_overrides(&cli, &mut config);

    if let Err(e) = execute_command(&config, cli.command) {
        eprintln!("Error: {:#}", e);
        tracing::error!("Command failed: {:#}", e);
        std::process::exit(1);
    }
}
