mod resolve_addr_info;
mod resolve_by_name;

pub use resolve_addr_info::ResolveAddrInfoUseCase;
pub use resolve_by_name::ResolveByNameUseCase;

use dns_override_domain::AddressChain;
use tracing::debug;

/// Final record dump, one line per record.
fn dump_chain(host: &str, chain: &AddressChain) {
    debug!(host = %host, total = chain.len(), "Final results");
    for (index, record) in chain.iter().enumerate() {
        debug!(host = %host, "{}. {}", index + 1, record);
    }
}
