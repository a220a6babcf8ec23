use std::fs;
use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use tracing::{debug, info};

use gardencal::cli::Cli;
use gardencal::config::Config;
use gardencal::{OutputFormat, PlanOptions, load_plants, plan};

fn setup_logging(cli_log_level: Option<&str>, config_log_level: Option<&str>) -> Result<()> {
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("gardencal")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    // Priority: CLI --log-level > config file > INFO
    let level = match cli_log_level.or(config_log_level).map(|s| s.to_uppercase()) {
        Some(s) => match s.as_str() {
            "TRACE" => tracing::Level::TRACE,
            "DEBUG" => tracing::Level::DEBUG,
            "INFO" => tracing::Level::INFO,
            "WARN" | "WARNING" => tracing::Level::WARN,
            "ERROR" => tracing::Level::ERROR,
            _ => {
                eprintln!("Warning: Unknown log-level '{}', defaulting to INFO", s);
                tracing::Level::INFO
            }
        },
        None => tracing::Level::INFO,
    };

    let log_file = fs::File::create(log_dir.join("gardencal.log")).context("Failed to create log file")?;

    tracing_subscriber::fmt()
        .with_writer(log_file)
        .with_ansi(false)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();

    info!("Logging initialized (level: {:?})", level);
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Log level comes from config, so peek at it before the full load
    let config_log_level = Config::load_log_level(cli.config.as_ref());
    setup_logging(cli.log_level.as_deref(), config_log_level.as_deref()).context("Failed to setup logging")?;

    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    info!("gardencal starting");

    let mut views = cli.views();
    if views.is_empty() {
        debug!(views = ?config.views, "main: no view flags, using config");
        views = config.views.clone();
    }
    let format = if cli.ical || config.ical {
        OutputFormat::Ical
    } else {
        OutputFormat::Text
    };
    let options = PlanOptions::new(&views, format, &config);

    let specs = load_plants(&cli.file).context(format!("Failed to load plants from {}", cli.file.display()))?;
    let output = plan(specs, &options)?;

    match cli.output {
        Some(path) => {
            fs::write(&path, &output).context(format!("Failed to write {}", path.display()))?;
            eprintln!("{} Wrote calendar to {}", "✓".green(), path.display().to_string().cyan());
        }
        None => {
            std::io::stdout()
                .write_all(output.as_bytes())
                .context("Failed to write to stdout")?;
        }
    }

    Ok(())
}
