use super::errors::classify_resolve_error;
use super::records::{expand_records, passive_or_loopback};
use super::service::service_port;
use dns_override_application::ports::ResolutionProvider;
use dns_override_domain::{
    AddrInfoHints, AddressChain, AddressFamily, AddressRecord, DomainError, ResolverSettings,
    SocketType,
};
use hickory_resolver::config::{LookupIpStrategy, NameServerConfig, ResolverConfig, ResolverOpts};
use hickory_resolver::name_server::TokioConnectionProvider;
use hickory_resolver::proto::rr::RecordType;
use hickory_resolver::proto::xfer::Protocol;
use hickory_resolver::TokioResolver;
use std::net::IpAddr;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::runtime::Runtime;
use tracing::{debug, warn};

struct Installed {
    settings: ResolverSettings,
    resolver: Arc<TokioResolver>,
}

/// Resolution provider backed by hickory-resolver.
///
/// The ambient state is the system resolver configuration. Installing
/// explicit settings builds a dedicated resolver for them, which is dropped
/// again when the previous settings are restored. Lookups are driven on a
/// private current-thread runtime so the port stays synchronous.
pub struct HickoryResolutionProvider {
    system: Arc<TokioResolver>,
    installed: Mutex<Installed>,
    // Last, so resolvers are dropped before the runtime that drove them.
    runtime: Runtime,
}

impl HickoryResolutionProvider {
    pub fn new() -> Result<Self, DomainError> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| DomainError::ConfigError(format!("Failed to start resolver runtime: {}", e)))?;

        let system = {
            let _rt = runtime.enter();
            Arc::new(system_resolver())
        };

        Ok(Self {
            installed: Mutex::new(Installed {
                settings: ResolverSettings::default(),
                resolver: Arc::clone(&system),
            }),
            system,
            runtime,
        })
    }

    fn lock_installed(&self) -> MutexGuard<'_, Installed> {
        self.installed.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn build_resolver(&self, settings: &ResolverSettings) -> TokioResolver {
        let (config, opts) = resolver_config(settings);
        let _rt = self.runtime.enter();
        TokioResolver::builder_with_config(config, TokioConnectionProvider::default())
            .with_options(opts)
            .build()
    }

    /// Looks `host` up with the installed resolver. Returns the addresses in
    /// answer order and the owner name of the first address record.
    fn lookup_ip(&self, host: &str) -> Result<(Vec<IpAddr>, Option<String>), DomainError> {
        let resolver = Arc::clone(&self.lock_installed().resolver);

        let lookup = self
            .runtime
            .block_on(resolver.lookup_ip(host))
            .map_err(|e| {
                debug!(host = %host, error = %e, "Lookup failed");
                classify_resolve_error(host, &e)
            })?;

        let canonical_name = lookup
            .as_lookup()
            .records()
            .iter()
            .find(|r| matches!(r.record_type(), RecordType::A | RecordType::AAAA))
            .map(|r| r.name().to_utf8().trim_end_matches('.').to_string());

        let addresses: Vec<IpAddr> = lookup.iter().collect();
        debug!(host = %host, count = addresses.len(), "Lookup complete");
        Ok((addresses, canonical_name))
    }
}

/// Translates per-call settings into hickory configuration.
pub fn resolver_config(settings: &ResolverSettings) -> (ResolverConfig, ResolverOpts) {
    let protocol = if settings.use_tcp {
        Protocol::Tcp
    } else {
        Protocol::Udp
    };

    let mut config = ResolverConfig::new();
    for server in settings.servers() {
        config.add_name_server(NameServerConfig::new(server, protocol));
    }

    let mut opts = ResolverOpts::default();
    if let Some(timeout) = settings.timeout {
        opts.timeout = timeout;
    }
    opts.attempts = settings.attempts;
    opts.ip_strategy = LookupIpStrategy::Ipv4AndIpv6;

    (config, opts)
}

fn system_resolver() -> TokioResolver {
    let mut builder = match TokioResolver::builder_tokio() {
        Ok(builder) => {
            debug!("Using system DNS configuration");
            builder
        }
        Err(e) => {
            warn!(error = %e, "Failed to read system DNS config, using defaults");
            TokioResolver::builder_with_config(
                ResolverConfig::default(),
                TokioConnectionProvider::default(),
            )
        }
    };
    builder.options_mut().ip_strategy = LookupIpStrategy::Ipv4AndIpv6;
    builder.build()
}

impl ResolutionProvider for HickoryResolutionProvider {
    fn ambient_settings(&self) -> ResolverSettings {
        self.lock_installed().settings.clone()
    }

    fn install_settings(&self, settings: ResolverSettings) -> ResolverSettings {
        let resolver = if settings.is_ambient() {
            Arc::clone(&self.system)
        } else {
            Arc::new(self.build_resolver(&settings))
        };

        let previous = std::mem::replace(
            &mut *self.lock_installed(),
            Installed { settings, resolver },
        );
        previous.settings
    }

    fn restore_settings(&self, settings: ResolverSettings) {
        // The swap drops the per-call resolver; its settings are not needed.
        drop(self.install_settings(settings));
    }

    fn resolve_by_name(&self, hostname: &str) -> Result<AddressChain, DomainError> {
        if let Ok(address) = hostname.parse::<IpAddr>() {
            return match address {
                IpAddr::V4(_) => {
                    Ok(vec![AddressRecord::new(address, 0, SocketType::Unspecified)].into())
                }
                IpAddr::V6(_) => Err(DomainError::NameNotFound(hostname.to_string())),
            };
        }

        let (addresses, _) = self.lookup_ip(hostname)?;
        let chain: AddressChain = addresses
            .into_iter()
            .filter(IpAddr::is_ipv4)
            .map(|a| AddressRecord::new(a, 0, SocketType::Unspecified))
            .collect();

        if chain.is_empty() {
            return Err(DomainError::NameNotFound(hostname.to_string()));
        }
        Ok(chain)
    }

    fn resolve_addr_info(
        &self,
        node: Option<&str>,
        service: Option<&str>,
        hints: &AddrInfoHints,
    ) -> Result<AddressChain, DomainError> {
        let port = service_port(service)?;
        let has_service = service.is_some();

        let Some(node) = node else {
            let addresses = passive_or_loopback(hints);
            return Ok(expand_records(&addresses, port, has_service, hints, None));
        };

        if let Ok(address) = node.parse::<IpAddr>() {
            let family = AddressFamily::of(&address);
            if !hints.accepts(family) {
                return Err(DomainError::UnsupportedFamily(format!("{} is {}", node, family)));
            }
            let canonical_name = hints.canonical_name.then_some(node);
            return Ok(expand_records(&[address], port, has_service, hints, canonical_name));
        }

        let (addresses, canonical_name) = self.lookup_ip(node)?;
        let addresses: Vec<IpAddr> = addresses
            .into_iter()
            .filter(|a| hints.accepts(AddressFamily::of(a)))
            .collect();
        if addresses.is_empty() {
            return Err(DomainError::NameNotFound(node.to_string()));
        }

        let canonical_name = hints
            .canonical_name
            .then(|| canonical_name.as_deref().unwrap_or(node));
        Ok(expand_records(&addresses, port, has_service, hints, canonical_name))
    }
}
