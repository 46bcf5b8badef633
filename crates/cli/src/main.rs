use clap::Parser;
use dns_override_infrastructure::{lifecycle, ConfigSource};
use std::path::PathBuf;
use tracing::info;

mod bootstrap;
mod commands;
mod di;

#[derive(Parser)]
#[command(name = "dns-override")]
#[command(version)]
#[command(about = "DNS override harness - resolve names through the configured override")]
struct Cli {
    /// Configuration file path (overrides DNS_OVERRIDE_CONFIG)
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long)]
    log_json: bool,

    #[command(subcommand)]
    command: commands::Command,
}

// Not #[tokio::main]: the resolution provider owns its own runtime, which
// must be dropped outside any async context.
fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let source = match cli.config {
        Some(path) => ConfigSource::from_path(path),
        None => ConfigSource::locate(),
    };

    bootstrap::init_logging(
        cli.log_level.as_deref(),
        cli.log_json,
        bootstrap::peek_debug(&source),
    );

    info!("Starting dns-override v{}", env!("CARGO_PKG_VERSION"));

    let config = lifecycle::init_with(source);
    let services = di::Services::new(config)?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    let outcome = runtime.block_on(commands::run(cli.command, &services));
    drop(runtime);
    drop(services);

    lifecycle::shutdown();
    outcome
}
