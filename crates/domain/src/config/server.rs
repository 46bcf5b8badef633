use crate::address_record::AddressFamily;
use serde::Serialize;
use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr};
use std::str::FromStr;
use thiserror::Error;

pub const DEFAULT_DNS_PORT: u16 = 53;

/// One upstream server accepted from the configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ServerEntry {
    pub address: IpAddr,
    pub port: u16,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServerParseError {
    #[error("missing closing ']' in '{0}'")]
    UnterminatedBracket(String),

    #[error("invalid port '{port}' in '{token}'")]
    InvalidPort { token: String, port: String },

    #[error("'{address}' is not a valid {family} address")]
    InvalidAddress {
        address: String,
        family: AddressFamily,
    },
}

impl ServerEntry {
    pub fn new(address: IpAddr, port: u16) -> Self {
        Self { address, port }
    }

    pub fn ipv4(address: Ipv4Addr, port: u16) -> Self {
        Self::new(IpAddr::V4(address), port)
    }

    pub fn ipv6(address: Ipv6Addr, port: u16) -> Self {
        Self::new(IpAddr::V6(address), port)
    }

    pub fn family(&self) -> AddressFamily {
        AddressFamily::of(&self.address)
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.address, self.port)
    }

    /// Splits a server token into address text, port and assumed family.
    ///
    /// Family is decided by shape alone: a leading `[` means IPv6 with an
    /// optional `]:port`; more than one colon means a bare IPv6 literal with
    /// no port; exactly one colon means `IPv4:port`. A bare IPv6 literal that
    /// happens to contain a single colon is read as `IPv4:port` and then
    /// fails validation.
    pub fn split_token(token: &str) -> Result<(&str, u16, AddressFamily), ServerParseError> {
        if let Some(rest) = token.strip_prefix('[') {
            let end = rest
                .find(']')
                .ok_or_else(|| ServerParseError::UnterminatedBracket(token.to_string()))?;
            let address = &rest[..end];
            let port = match rest[end + 1..].strip_prefix(':') {
                Some(port) => parse_port(token, port)?,
                None => DEFAULT_DNS_PORT,
            };
            return Ok((address, port, AddressFamily::Ipv6));
        }

        if token.matches(':').count() > 1 {
            return Ok((token, DEFAULT_DNS_PORT, AddressFamily::Ipv6));
        }

        match token.split_once(':') {
            Some((address, port)) => Ok((address, parse_port(token, port)?, AddressFamily::Ipv4)),
            None => Ok((token, DEFAULT_DNS_PORT, AddressFamily::Ipv4)),
        }
    }
}

fn parse_port(token: &str, port: &str) -> Result<u16, ServerParseError> {
    port.parse::<u16>()
        .map_err(|_| ServerParseError::InvalidPort {
            token: token.to_string(),
            port: port.to_string(),
        })
}

impl FromStr for ServerEntry {
    type Err = ServerParseError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let (address, port, family) = Self::split_token(token)?;

        let invalid = || ServerParseError::InvalidAddress {
            address: address.to_string(),
            family,
        };

        let address = match family {
            AddressFamily::Ipv4 => IpAddr::V4(address.parse::<Ipv4Addr>().map_err(|_| invalid())?),
            AddressFamily::Ipv6 => IpAddr::V6(address.parse::<Ipv6Addr>().map_err(|_| invalid())?),
        };

        Ok(Self { address, port })
    }
}

impl fmt::Display for ServerEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.socket_addr())
    }
}
