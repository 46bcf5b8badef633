use serde::Serialize;
use std::net::Ipv4Addr;

use super::dns64::Dns64Config;
use super::server::{ServerEntry, DEFAULT_DNS_PORT};

pub const MAX_DNS_SERVERS: usize = 8;
pub const DEFAULT_TIMEOUT_MS: u64 = 5000;

/// Resolver override policy for the whole process.
///
/// Built once and never mutated afterwards. `servers` is kept in file order,
/// which is also the priority order handed to the resolution provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Config {
    pub timeout_ms: u64,

    pub use_tcp: bool,

    pub debug: bool,

    /// Drop native IPv6 results before DNS64 synthesis
    pub filter_aaaa: bool,

    /// Drop IPv4 results after DNS64 synthesis
    pub filter_a: bool,

    // Tables last so the TOML rendering stays valid.
    pub dns64: Dns64Config,

    /// Upstream servers, at most [`MAX_DNS_SERVERS`], never empty
    pub servers: Vec<ServerEntry>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            servers: Self::default_servers(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            use_tcp: false,
            debug: false,
            dns64: Dns64Config::default(),
            filter_aaaa: false,
            filter_a: false,
        }
    }
}

impl Config {
    /// Built-in servers used when nothing valid was configured
    pub fn default_servers() -> Vec<ServerEntry> {
        vec![
            ServerEntry::ipv4(Ipv4Addr::new(8, 8, 8, 8), DEFAULT_DNS_PORT),
            ServerEntry::ipv4(Ipv4Addr::new(1, 1, 1, 1), DEFAULT_DNS_PORT),
        ]
    }

    pub fn uses_default_servers(&self) -> bool {
        self.servers == Self::default_servers()
    }

    /// True when any result-rewriting stage is switched on
    pub fn rewrites_results(&self) -> bool {
        self.filter_aaaa || self.dns64.enabled || self.filter_a
    }
}
