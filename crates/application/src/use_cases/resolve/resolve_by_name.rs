use super::dump_chain;
use crate::ports::ResolutionProvider;
use crate::scope::ResolutionScope;
use dns_override_domain::{AddressChain, Config, DomainError};
use std::sync::Arc;

/// Legacy host lookup through the configured servers.
///
/// Results are returned as the provider produced them; the result pipeline
/// only applies to address-info lookups.
pub struct ResolveByNameUseCase {
    provider: Arc<dyn ResolutionProvider>,
    config: Arc<Config>,
}

impl ResolveByNameUseCase {
    pub fn new(provider: Arc<dyn ResolutionProvider>, config: Arc<Config>) -> Self {
        Self { provider, config }
    }

    pub fn execute(&self, hostname: &str) -> Result<AddressChain, DomainError> {
        let chain = ResolutionScope::run(self.provider.as_ref(), &self.config, |provider| {
            provider.resolve_by_name(hostname)
        })?;

        if self.config.debug {
            dump_chain(hostname, &chain);
        }
        Ok(chain)
    }
}
