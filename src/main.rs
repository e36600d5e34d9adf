use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use consciousness_sandbox::config::SandboxConfig;
use consciousness_sandbox::tui::runner::run_sandbox;

#[derive(Parser)]
#[command(name = "sandbox", about = "A terminal sandbox for pattern and thought-stream experiments.")]
struct Cli {
    /// Config file (defaults to .sandbox/config.yaml if present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Seed for pattern sampling (overrides config)
    #[arg(long)]
    seed: Option<u64>,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,
}

/// The dashboard owns the terminal, so logs go to a file when asked and
/// only warnings reach stderr otherwise.
fn init_tracing(log_file: Option<&Path>) -> Result<()> {
    let level = if log_file.is_some() { "info" } else { "warn" };
    let filter = EnvFilter::from_default_env()
        .add_directive(format!("consciousness_sandbox={level}").parse()?)
        .add_directive(format!("sandbox={level}").parse()?);

    match log_file {
        Some(path) => {
            let file = std::fs::File::create(path)
                .with_context(|| format!("failed to create log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_file.as_deref())?;

    let mut config = SandboxConfig::load(cli.config.as_deref())?;
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }

    info!(?config, "sandbox starting");
    run_sandbox(&config).await
}
