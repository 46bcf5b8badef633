use super::errors::ConfigWarning;
use super::root::{Config, MAX_DNS_SERVERS};
use super::server::ServerEntry;
use crate::dns64::Dns64Synthesizer;

/// Outcome of parsing one configuration source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadReport {
    pub config: Config,

    /// Lines that were skipped, in file order
    pub warnings: Vec<ConfigWarning>,

    /// True when no server was accepted and the built-in pair was substituted
    pub used_fallback: bool,
}

impl LoadReport {
    /// Report for a source that could not be read at all.
    pub fn fallback() -> Self {
        Self {
            config: Config::default(),
            warnings: vec![],
            used_fallback: true,
        }
    }
}

/// Parser for the line-oriented `key value` override format.
///
/// `#` lines and blank lines are comments, unknown keys are ignored and every
/// malformed line is skipped with a [`ConfigWarning`].
pub struct ConfigLoader;

impl ConfigLoader {
    pub fn parse(contents: &str) -> LoadReport {
        let mut config = Config {
            servers: Vec::new(),
            ..Config::default()
        };
        let mut warnings = Vec::new();

        for (index, raw) in contents.lines().enumerate() {
            let line = index + 1;
            let trimmed = raw.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            let mut parts = trimmed.split_whitespace();
            let Some(key) = parts.next() else {
                continue;
            };
            let Some(value) = parts.next() else {
                warnings.push(ConfigWarning::MissingValue {
                    line,
                    key: key.to_string(),
                });
                continue;
            };

            match key {
                "dns_server" => {
                    if config.servers.len() >= MAX_DNS_SERVERS {
                        warnings.push(ConfigWarning::ServerCapacityExceeded {
                            line,
                            token: value.to_string(),
                            limit: MAX_DNS_SERVERS,
                        });
                        continue;
                    }
                    match value.parse::<ServerEntry>() {
                        Ok(server) => config.servers.push(server),
                        Err(reason) => warnings.push(ConfigWarning::InvalidServer {
                            line,
                            token: value.to_string(),
                            reason,
                        }),
                    }
                }
                "timeout" => match value.parse::<u64>() {
                    Ok(ms) => config.timeout_ms = ms,
                    Err(_) => warnings.push(ConfigWarning::InvalidTimeout {
                        line,
                        value: value.to_string(),
                    }),
                },
                "use_tcp" => config.use_tcp = parse_flag(value),
                "debug" => config.debug = parse_flag(value),
                "enable_dns64" => config.dns64.enabled = parse_flag(value),
                "dns64_prefix" => match Dns64Synthesizer::new(value).validate() {
                    Ok(()) => config.dns64.prefix = value.to_string(),
                    Err(reason) => warnings.push(ConfigWarning::InvalidDns64Prefix {
                        line,
                        value: value.to_string(),
                        reason,
                    }),
                },
                "filter_aaaa" => config.filter_aaaa = parse_flag(value),
                "filter_a" => config.filter_a = parse_flag(value),
                _ => {}
            }
        }

        let used_fallback = config.servers.is_empty();
        if used_fallback {
            config.servers = Config::default_servers();
        }

        LoadReport {
            config,
            warnings,
            used_fallback,
        }
    }
}

fn parse_flag(value: &str) -> bool {
    value == "true" || value == "1"
}
