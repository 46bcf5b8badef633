use dns_override_domain::{AddrInfoHints, AddressChain, AddressFamily, AddressRecord, SocketType};
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::sync::Arc;

/// Addresses returned for a lookup without a node: wildcard when the caller
/// wants to bind, loopback otherwise.
pub fn passive_or_loopback(hints: &AddrInfoHints) -> Vec<IpAddr> {
    let candidates = if hints.passive {
        [IpAddr::V4(Ipv4Addr::UNSPECIFIED), IpAddr::V6(Ipv6Addr::UNSPECIFIED)]
    } else {
        [IpAddr::V4(Ipv4Addr::LOCALHOST), IpAddr::V6(Ipv6Addr::LOCALHOST)]
    };
    candidates
        .into_iter()
        .filter(|a| hints.accepts(AddressFamily::of(a)))
        .collect()
}

/// Builds one record per address and socket type.
///
/// Without a socket type hint every address yields a stream and a datagram
/// record, plus a raw one when no service was asked for. The canonical name,
/// if any, goes on the first record only.
pub fn expand_records(
    addresses: &[IpAddr],
    port: u16,
    has_service: bool,
    hints: &AddrInfoHints,
    canonical_name: Option<&str>,
) -> AddressChain {
    let socket_types: &[SocketType] = match hints.socket_type {
        Some(SocketType::Stream) => &[SocketType::Stream],
        Some(SocketType::Datagram) => &[SocketType::Datagram],
        Some(SocketType::Raw) => &[SocketType::Raw],
        Some(SocketType::Unspecified) | None if has_service => {
            &[SocketType::Stream, SocketType::Datagram]
        }
        Some(SocketType::Unspecified) | None => {
            &[SocketType::Stream, SocketType::Datagram, SocketType::Raw]
        }
    };

    let mut records = Vec::with_capacity(addresses.len() * socket_types.len());
    for &address in addresses {
        for &socket_type in socket_types {
            let mut record = AddressRecord::new(address, port, socket_type);
            if hints.protocol != 0 {
                record.protocol = hints.protocol;
            }
            records.push(record);
        }
    }

    if let (Some(name), Some(first)) = (canonical_name, records.first_mut()) {
        first.canonical_name = Some(Arc::from(name));
    }

    AddressChain::from_records(records)
}
