use super::dump_chain;
use crate::pipeline::ResultPipeline;
use crate::ports::ResolutionProvider;
use crate::scope::ResolutionScope;
use dns_override_domain::{AddrInfoHints, AddressChain, Config, DomainError};
use std::sync::Arc;
use tracing::warn;

/// Address-info lookup with the override applied: configured servers for the
/// duration of the call, then the result pipeline.
pub struct ResolveAddrInfoUseCase {
    provider: Arc<dyn ResolutionProvider>,
    config: Arc<Config>,
    pipeline: ResultPipeline,
}

impl ResolveAddrInfoUseCase {
    pub fn new(provider: Arc<dyn ResolutionProvider>, config: Arc<Config>) -> Self {
        let pipeline = ResultPipeline::from_config(&config);
        Self {
            provider,
            config,
            pipeline,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn execute(
        &self,
        node: Option<&str>,
        service: Option<&str>,
        hints: &AddrInfoHints,
    ) -> Result<AddressChain, DomainError> {
        let scope = ResolutionScope::enter(self.provider.as_ref(), &self.config);

        let chain = scope.provider().resolve_addr_info(node, service, hints)?;

        // Service-only lookups and empty answers have nothing to rewrite.
        let Some(host) = node else {
            return Ok(chain);
        };
        if chain.is_empty() {
            return Ok(chain);
        }

        let output = self.pipeline.run(chain).map_err(|failure| {
            warn!(
                host = %host,
                stage = %failure.stage,
                records = failure.input.len(),
                "Result pipeline failed, discarding results"
            );
            failure.into_error()
        })?;

        if self.config.debug {
            dump_chain(host, &output.chain);
        }

        drop(scope);
        Ok(output.chain)
    }
}
