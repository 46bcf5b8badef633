use dns_override_application::ports::ResolutionProvider;
use dns_override_application::use_cases::{ResolveAddrInfoUseCase, ResolveByNameUseCase};
use dns_override_domain::Config;
use dns_override_infrastructure::HickoryResolutionProvider;
use std::sync::Arc;
use tracing::info;

pub struct Services {
    pub config: Arc<Config>,
    pub resolve_addr_info: Arc<ResolveAddrInfoUseCase>,
    pub resolve_by_name: Arc<ResolveByNameUseCase>,
}

impl Services {
    pub fn new(config: Arc<Config>) -> anyhow::Result<Self> {
        let provider: Arc<dyn ResolutionProvider> = Arc::new(HickoryResolutionProvider::new()?);
        info!(
            servers = config.servers.len(),
            max_per_family = provider.max_nameservers(),
            "Resolution provider ready"
        );

        Ok(Self {
            resolve_addr_info: Arc::new(ResolveAddrInfoUseCase::new(
                Arc::clone(&provider),
                Arc::clone(&config),
            )),
            resolve_by_name: Arc::new(ResolveByNameUseCase::new(provider, Arc::clone(&config))),
            config,
        })
    }
}
