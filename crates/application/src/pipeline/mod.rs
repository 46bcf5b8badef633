//! Result pipeline: drop-AAAA, DNS64 synthesis, drop-A, always in that order.
//!
//! Every stage takes its input chain by value and returns either a new chain,
//! the same chain untouched (stage off or nothing to do), or a
//! [`StageFailure`] carrying the untouched input back. A partially rebuilt
//! chain is never observable.

mod builder;
mod filter;
mod synthesize;

#[cfg(test)]
pub(crate) use builder::fault;

use dns_override_domain::{AddressChain, Config, Dns64Synthesizer, DomainError};
use std::fmt;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    DropAaaa,
    Synthesize,
    DropA,
}

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::DropAaaa => "drop-aaaa",
            Stage::Synthesize => "dns64",
            Stage::DropA => "drop-a",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A stage could not rebuild its chain.
///
/// `input` is exactly what the failing stage received; dropping it releases
/// every record of the call.
#[derive(Debug, thiserror::Error)]
#[error("{stage} stage failed: {error}")]
pub struct StageFailure {
    pub stage: Stage,
    #[source]
    pub error: DomainError,
    pub input: AddressChain,
}

impl StageFailure {
    pub(crate) fn new(stage: Stage, error: DomainError, input: AddressChain) -> Self {
        Self {
            stage,
            error,
            input,
        }
    }

    /// Releases the carried chain and keeps the error.
    pub fn into_error(self) -> DomainError {
        self.error
    }
}

pub(crate) struct StageOutput {
    pub(crate) chain: AddressChain,
    /// Records removed or appended
    pub(crate) affected: usize,
}

impl StageOutput {
    pub(crate) fn unchanged(chain: AddressChain) -> Self {
        Self { chain, affected: 0 }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PipelineReport {
    pub aaaa_removed: usize,
    pub synthesized: usize,
    pub a_removed: usize,
}

impl PipelineReport {
    pub fn is_unchanged(&self) -> bool {
        self.aaaa_removed == 0 && self.synthesized == 0 && self.a_removed == 0
    }
}

#[derive(Debug)]
pub struct PipelineOutput {
    pub chain: AddressChain,
    pub report: PipelineReport,
}

/// The three result stages, configured once from a [`Config`].
#[derive(Debug, Clone)]
pub struct ResultPipeline {
    filter_aaaa: bool,
    synthesizer: Option<Dns64Synthesizer>,
    filter_a: bool,
    debug: bool,
}

impl ResultPipeline {
    pub fn from_config(config: &Config) -> Self {
        Self {
            filter_aaaa: config.filter_aaaa,
            synthesizer: config
                .dns64
                .enabled
                .then(|| Dns64Synthesizer::new(&config.dns64.prefix)),
            filter_a: config.filter_a,
            debug: config.debug,
        }
    }

    /// True when every stage is switched off.
    pub fn is_passthrough(&self) -> bool {
        !self.filter_aaaa && self.synthesizer.is_none() && !self.filter_a
    }

    pub fn run(&self, chain: AddressChain) -> Result<PipelineOutput, StageFailure> {
        let mut report = PipelineReport::default();
        let mut chain = chain;

        if self.filter_aaaa {
            let output = filter::drop_aaaa(chain)?;
            report.aaaa_removed = output.affected;
            chain = output.chain;
            if self.debug {
                debug!(removed = report.aaaa_removed, remaining = chain.len(), "Filtered AAAA records");
            }
        }

        if let Some(synthesizer) = &self.synthesizer {
            let output = synthesize::append_synthesized(chain, synthesizer)?;
            report.synthesized = output.affected;
            chain = output.chain;
            if self.debug {
                debug!(
                    synthesized = report.synthesized,
                    prefix = synthesizer.base(),
                    "Appended DNS64 records"
                );
            }
        }

        if self.filter_a {
            let output = filter::drop_a(chain)?;
            report.a_removed = output.affected;
            chain = output.chain;
            if self.debug {
                debug!(removed = report.a_removed, remaining = chain.len(), "Filtered A records");
            }
        }

        Ok(PipelineOutput { chain, report })
    }
}
