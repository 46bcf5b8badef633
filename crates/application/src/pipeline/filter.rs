use super::builder::ChainBuilder;
use super::{Stage, StageFailure, StageOutput};
use dns_override_domain::{AddressChain, AddressFamily};

/// Rebuilds `chain` without any record of `family`, keeping relative order.
///
/// A chain with nothing to remove is passed through without a copy.
pub(crate) fn drop_family(
    chain: AddressChain,
    family: AddressFamily,
    stage: Stage,
) -> Result<StageOutput, StageFailure> {
    let removed = chain.count(family);
    if removed == 0 {
        return Ok(StageOutput::unchanged(chain));
    }

    let mut builder = match ChainBuilder::try_with_capacity(chain.len() - removed) {
        Ok(builder) => builder,
        Err(error) => return Err(StageFailure::new(stage, error, chain)),
    };
    builder.extend(chain.into_iter().filter(|r| r.family() != family));

    Ok(StageOutput {
        chain: builder.finish(),
        affected: removed,
    })
}

/// Drop-AAAA stage: keeps only IPv4 records.
pub(crate) fn drop_aaaa(chain: AddressChain) -> Result<StageOutput, StageFailure> {
    drop_family(chain, AddressFamily::Ipv6, Stage::DropAaaa)
}

/// Drop-A stage: keeps only IPv6 records, synthesized ones included.
pub(crate) fn drop_a(chain: AddressChain) -> Result<StageOutput, StageFailure> {
    drop_family(chain, AddressFamily::Ipv4, Stage::DropA)
}
