use crate::config::Config;
use std::net::{SocketAddr, SocketAddrV4, SocketAddrV6};
use std::time::Duration;

/// Nameserver slots per family in a classic resolver state.
pub const MAXNS: usize = 3;

/// Retry count installed alongside the configured timeout.
pub const DEFAULT_ATTEMPTS: usize = 2;

/// Resolver configuration installed for the duration of one call.
///
/// Immutable once built; the resolution provider receives it by value and
/// hands back the one it replaced.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResolverSettings {
    pub ipv4_servers: Vec<SocketAddrV4>,

    pub ipv6_servers: Vec<SocketAddrV6>,

    /// `None` keeps the provider's own default
    pub timeout: Option<Duration>,

    pub attempts: usize,

    pub use_tcp: bool,
}

impl ResolverSettings {
    /// Splits `config.servers` by family, keeping file order within each
    /// family and at most `max_per_family` entries of each.
    pub fn from_config(config: &Config, max_per_family: usize) -> Self {
        let mut ipv4_servers = Vec::new();
        let mut ipv6_servers = Vec::new();

        for server in &config.servers {
            match server.socket_addr() {
                SocketAddr::V4(addr) if ipv4_servers.len() < max_per_family => {
                    ipv4_servers.push(addr)
                }
                SocketAddr::V6(addr) if ipv6_servers.len() < max_per_family => {
                    ipv6_servers.push(addr)
                }
                _ => {}
            }
        }

        Self {
            ipv4_servers,
            ipv6_servers,
            timeout: Some(Duration::from_millis(config.timeout_ms)),
            attempts: DEFAULT_ATTEMPTS,
            use_tcp: config.use_tcp,
        }
    }

    /// True for the ambient "use whatever the system has" state
    pub fn is_ambient(&self) -> bool {
        self.ipv4_servers.is_empty() && self.ipv6_servers.is_empty()
    }

    pub fn server_count(&self) -> usize {
        self.ipv4_servers.len() + self.ipv6_servers.len()
    }

    /// Servers in priority order, IPv4 slots first.
    pub fn servers(&self) -> impl Iterator<Item = SocketAddr> + '_ {
        self.ipv4_servers
            .iter()
            .copied()
            .map(SocketAddr::V4)
            .chain(self.ipv6_servers.iter().copied().map(SocketAddr::V6))
    }

    /// Worst-case time one call may block when every server is unreachable.
    pub fn worst_case_latency(&self) -> Option<Duration> {
        let per_try = self.timeout?;
        let tries = (self.attempts.max(1) * self.server_count().max(1)) as u32;
        Some(per_try * tries)
    }
}
