use anyhow::Context;
use clap::Parser;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use numfield::config::{self, FieldConfig};
use numfield::controller::NumericValueController;
use numfield::tui::{self, NumericField};

// Default Configuration Constants
/// Default log level when not specified
const DEFAULT_LOG_LEVEL: &str = "info";

/// Default log file path (no logging to file)
const DEFAULT_LOG_FILE: &str = "/dev/null";

#[derive(Parser)]
#[command(name = "numfield")]
#[command(about = "Integer text field demo form", long_about = "Integer text field demo form\n\nA small form of bounded integer fields: Enter edits, digits and a sign type, Up/Down step, Enter commits, Esc restores, Tab moves focus.")]
struct Cli {
    /// Set log level (trace, debug, info, warn, error)
    #[arg(short = 'L', long, default_value = DEFAULT_LOG_LEVEL)]
    log_level: String,

    /// Log file path (default: /dev/null for no logging)
    #[arg(short = 'F', long, default_value = DEFAULT_LOG_FILE)]
    log_file: String,

    /// Override the configured lower bound (enables min clamping)
    #[arg(long)]
    min: Option<i32>,

    /// Override the configured upper bound (enables max clamping)
    #[arg(long)]
    max: Option<i32>,

    /// Disable the smart typing clamp (hard-clamp every keystroke)
    #[arg(long)]
    strict: bool,
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

/// The configured field plus fixed examples covering other bound shapes
fn build_fields(field_config: &FieldConfig) -> Vec<NumericField> {
    let configured = NumericValueController::from_config(field_config);

    let mut percent = NumericValueController::new();
    percent.set_min_value(0);
    percent.set_max_value(100);
    percent.set_value(50);

    let mut offset = NumericValueController::new();
    offset.set_min_value(-1000);
    offset.set_max_value(1000);

    // Min clamp at 0, no upper bound (the controller default)
    let count = NumericValueController::new();

    vec![
        NumericField::new("Configured", configured),
        NumericField::new("Percent", percent),
        NumericField::new("Offset", offset),
        NumericField::new("Count", count),
    ]
}

fn main() -> anyhow::Result<()> {
    let mut config = config::read();
    let cli = Cli::parse();

    // Resolve and initialize logging
    let (log_level, log_file) = resolve_log_config(&cli, &config);
    if log_file != DEFAULT_LOG_FILE {
        init_logging(log_level, log_file);
    }

    // CLI bound overrides; inverted pairs are repaired on construction
    if let Some(min) = cli.min {
        config.field.min_value = min;
        config.field.clamp_min = true;
    }
    if let Some(max) = cli.max {
        config.field.max_value = max;
        config.field.clamp_max = true;
    }
    if cli.strict {
        config.field.smart_typing_clamp = false;
    }

    tui::run(build_fields(&config.field)).context("running TUI")?;
    Ok(())
}
