use super::builder::ChainBuilder;
use super::{Stage, StageFailure, StageOutput};
use dns_override_domain::{AddressChain, AddressRecord, Dns64Synthesizer};
use std::net::IpAddr;
use tracing::warn;

/// Appends one synthesized IPv6 record per IPv4 record, after all existing
/// records and in the order of their sources. IPv4 records are kept.
pub(crate) fn append_synthesized(
    chain: AddressChain,
    synthesizer: &Dns64Synthesizer,
) -> Result<StageOutput, StageFailure> {
    let sources = chain.iter().filter(|r| r.is_ipv4()).count();
    if sources == 0 {
        return Ok(StageOutput::unchanged(chain));
    }

    let originals = chain.len();
    let mut builder = match ChainBuilder::try_with_capacity(originals + sources) {
        Ok(builder) => builder,
        Err(error) => return Err(StageFailure::new(Stage::Synthesize, error, chain)),
    };
    builder.extend(chain);

    for index in 0..originals {
        let Some(record) = builder
            .get(index)
            .and_then(|source| synthesized_record(source, synthesizer))
        else {
            continue;
        };
        builder.push(record);
    }

    let affected = builder.len() - originals;
    Ok(StageOutput {
        chain: builder.finish(),
        affected,
    })
}

/// Copies port, socket type and protocol from `source`. Canonical names are
/// not carried over.
fn synthesized_record(
    source: &AddressRecord,
    synthesizer: &Dns64Synthesizer,
) -> Option<AddressRecord> {
    let IpAddr::V4(ipv4) = source.address else {
        return None;
    };

    match synthesizer.synthesize(ipv4) {
        Ok(ipv6) => Some(AddressRecord {
            socket_type: source.socket_type,
            protocol: source.protocol,
            address: IpAddr::V6(ipv6),
            port: source.port,
            canonical_name: None,
        }),
        Err(e) => {
            warn!(error = %e, source = %ipv4, "Skipping DNS64 synthesis");
            None
        }
    }
}
