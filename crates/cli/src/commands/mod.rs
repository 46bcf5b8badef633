mod bench;
mod host;
mod lookup;
mod multi;
mod show_config;

use crate::di::Services;
use clap::Subcommand;
use lookup::FamilyArg;

#[derive(Subcommand)]
pub enum Command {
    /// Address-info lookup with the override applied
    Lookup {
        host: String,

        /// Service name or port number
        #[arg(short, long)]
        service: Option<String>,

        #[arg(short, long, value_enum, default_value_t = FamilyArg::Any)]
        family: FamilyArg,

        /// Print the records as JSON
        #[arg(long)]
        json: bool,
    },

    /// Legacy host lookup (IPv4 only, no result rewriting)
    Host { host: String },

    /// Repeated host lookups with timing
    Bench {
        host: String,

        #[arg(short = 'n', long, default_value_t = 10)]
        iterations: u32,
    },

    /// Concurrent host lookups
    Multi {
        /// Defaults to a set of well-known domains
        hosts: Vec<String>,
    },

    /// Print the effective configuration
    ShowConfig {
        #[arg(long)]
        json: bool,
    },
}

pub async fn run(command: Command, services: &Services) -> anyhow::Result<()> {
    match command {
        Command::Lookup {
            host,
            service,
            family,
            json,
        } => lookup::run(services, host, service, family, json).await,
        Command::Host { host } => host::run(services, host).await,
        Command::Bench { host, iterations } => bench::run(services, host, iterations).await,
        Command::Multi { hosts } => multi::run(services, hosts).await,
        Command::ShowConfig { json } => show_config::run(services, json),
    }
}
