use dns_override_domain::{Config, ConfigError, ConfigLoader, LoadReport};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

pub const CONFIG_ENV_VAR: &str = "DNS_OVERRIDE_CONFIG";
pub const DEFAULT_CONFIG_PATH: &str = "/tmp/dns_override.conf";

/// Where the override configuration is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigSource {
    pub path: PathBuf,

    /// True when the path came from [`CONFIG_ENV_VAR`]
    pub from_env: bool,
}

impl ConfigSource {
    /// `DNS_OVERRIDE_CONFIG` if set and non-empty, else the default path.
    pub fn locate() -> Self {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) if !path.is_empty() => Self {
                path: PathBuf::from(path),
                from_env: true,
            },
            _ => Self::from_path(DEFAULT_CONFIG_PATH),
        }
    }

    pub fn from_path(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            from_env: false,
        }
    }

    pub fn read(&self) -> Result<String, ConfigError> {
        std::fs::read_to_string(&self.path)
            .map_err(|e| ConfigError::FileRead(self.path.display().to_string(), e.to_string()))
    }

    /// Reads and parses the source. Never fails: an unreadable source or a
    /// source without any usable server yields the built-in defaults.
    pub fn load(&self) -> LoadReport {
        let report = match self.read() {
            Ok(contents) => ConfigLoader::parse(&contents),
            Err(e) => {
                warn!(error = %e, "Config source unreadable, using defaults");
                LoadReport::fallback()
            }
        };

        for warning in &report.warnings {
            warn!(path = %self.path.display(), "{}", warning);
        }

        log_config(&report.config);

        if report.used_fallback {
            warn!(
                servers = %format_servers(&report.config),
                "No valid DNS servers configured, using defaults"
            );
        }

        report
    }
}

fn log_config(config: &Config) {
    for server in &config.servers {
        debug!(server = %server, family = %server.family(), "Accepted DNS server");
    }
    info!(
        servers = config.servers.len(),
        timeout_ms = config.timeout_ms,
        use_tcp = config.use_tcp,
        dns64 = config.dns64.enabled,
        dns64_prefix = %config.dns64.prefix,
        filter_aaaa = config.filter_aaaa,
        filter_a = config.filter_a,
        rewrites_results = config.rewrites_results(),
        default_servers = config.uses_default_servers(),
        "Config loaded"
    );
}

fn format_servers(config: &Config) -> String {
    config
        .servers
        .iter()
        .map(|s| s.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
