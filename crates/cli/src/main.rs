//! Bitacora - construction site activity log
//!
//! Main entry point for the console application.

use std::io;
use std::path::PathBuf;

use anyhow::Context;
use bitacora_cli::utils::logging::init_tracing;
use bitacora_cli::{AppContext, Menu};
use bitacora_domain::Config;
use clap::Parser;
use tracing::{info, warn};

#[derive(Debug, Parser)]
#[command(name = "bitacora", version, about = "Record and report daily site activities")]
pub struct Args {
    /// JSON or TOML configuration file (skips environment/probe loading)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// SQLite database file
    #[arg(short = 'D', long, env = "BITACORA_DB_PATH")]
    db_path: Option<String>,

    /// File holding the logged-in user between runs
    #[arg(long)]
    session_file: Option<String>,

    /// Directory reports are written into
    #[arg(long)]
    reports_dir: Option<String>,

    /// Tracing filter directive, e.g. `debug` or `bitacora_core=trace`
    #[arg(long)]
    log_level: Option<String>,
}

impl Args {
    fn apply_overrides(self, config: &mut Config) {
        if let Some(path) = self.db_path {
            config.database.path = path;
        }
        if let Some(path) = self.session_file {
            config.session.path = path;
        }
        if let Some(dir) = self.reports_dir {
            config.report.output_dir = dir;
        }
        if let Some(level) = self.log_level {
            config.logging.level = level;
        }
    }
}

fn load_config(path: Option<PathBuf>) -> anyhow::Result<(Config, Option<String>)> {
    if let Some(path) = path {
        let config = bitacora_infra::config::load_from_file(Some(path))
            .context("failed to load configuration file")?;
        return Ok((config, None));
    }

    // Tracing is not installed yet, so the fallback reason is logged later.
    match bitacora_infra::config::load() {
        Ok(config) => Ok((config, None)),
        Err(err) => Ok((Config::default(), Some(err.to_string()))),
    }
}

fn main() -> anyhow::Result<()> {
    let dotenv = dotenvy::dotenv();

    let mut args = Args::parse();
    let (mut config, fallback_reason) = load_config(args.config.take())?;
    args.apply_overrides(&mut config);

    init_tracing(&config.logging)?;

    match dotenv {
        Ok(path) => info!(path = %path.display(), "Loaded .env"),
        Err(e) => tracing::debug!(error = %e, "No .env file loaded"),
    }
    if let Some(reason) = fallback_reason {
        warn!(reason = %reason, "Using default configuration");
    }

    info!("Bitacora starting...");
    let ctx = AppContext::new(config).context("failed to initialize application")?;
    let session = ctx.restore_session();

    let stdin = io::stdin();
    let mut menu = Menu::new(&ctx, session, stdin.lock(), io::stdout().lock());
    menu.run().context("console I/O failed")?;

    info!("Bitacora stopped");
    Ok(())
}
