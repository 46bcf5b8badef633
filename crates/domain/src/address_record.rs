use serde::Serialize;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AddressFamily {
    Ipv4,
    Ipv6,
}

impl AddressFamily {
    pub fn of(address: &IpAddr) -> Self {
        match address {
            IpAddr::V4(_) => AddressFamily::Ipv4,
            IpAddr::V6(_) => AddressFamily::Ipv6,
        }
    }

    pub fn as_raw(&self) -> i32 {
        match self {
            AddressFamily::Ipv4 => libc::AF_INET,
            AddressFamily::Ipv6 => libc::AF_INET6,
        }
    }

    /// Byte length of an address of this family.
    pub fn address_len(&self) -> usize {
        match self {
            AddressFamily::Ipv4 => 4,
            AddressFamily::Ipv6 => 16,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AddressFamily::Ipv4 => "IPv4",
            AddressFamily::Ipv6 => "IPv6",
        }
    }
}

impl fmt::Display for AddressFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum SocketType {
    #[default]
    Unspecified,
    Stream,
    Datagram,
    Raw,
}

impl SocketType {
    pub fn as_raw(&self) -> i32 {
        match self {
            SocketType::Unspecified => 0,
            SocketType::Stream => libc::SOCK_STREAM,
            SocketType::Datagram => libc::SOCK_DGRAM,
            SocketType::Raw => libc::SOCK_RAW,
        }
    }

    /// Protocol number a resolver reports for this socket type.
    pub fn default_protocol(&self) -> i32 {
        match self {
            SocketType::Stream => libc::IPPROTO_TCP,
            SocketType::Datagram => libc::IPPROTO_UDP,
            SocketType::Unspecified | SocketType::Raw => 0,
        }
    }
}

/// One entry of a resolution result.
///
/// The family is derived from `address`, so a record can never carry an
/// IPv4 family with 16 address bytes or the reverse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddressRecord {
    pub socket_type: SocketType,
    pub protocol: i32,
    pub address: IpAddr,
    pub port: u16,
    pub canonical_name: Option<Arc<str>>,
}

impl AddressRecord {
    pub fn new(address: IpAddr, port: u16, socket_type: SocketType) -> Self {
        Self {
            socket_type,
            protocol: socket_type.default_protocol(),
            address,
            port,
            canonical_name: None,
        }
    }

    pub fn with_canonical_name(mut self, name: impl Into<Arc<str>>) -> Self {
        self.canonical_name = Some(name.into());
        self
    }

    pub fn family(&self) -> AddressFamily {
        AddressFamily::of(&self.address)
    }

    pub fn is_ipv4(&self) -> bool {
        self.address.is_ipv4()
    }

    pub fn is_ipv6(&self) -> bool {
        self.address.is_ipv6()
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.address, self.port)
    }

    /// Address in network byte order, 4 or 16 bytes long.
    pub fn address_bytes(&self) -> Vec<u8> {
        match self.address {
            IpAddr::V4(v4) => v4.octets().to_vec(),
            IpAddr::V6(v6) => v6.octets().to_vec(),
        }
    }
}

impl fmt::Display for AddressRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.family(), self.address)?;
        if self.port > 0 {
            write!(f, ":{}", self.port)?;
        }
        Ok(())
    }
}
