//! DNS64 address synthesis.
//!
//! Only the `/96` suffix-append form is produced: the IPv4 address becomes the
//! last two 16-bit groups after the configured prefix. Other RFC 6052 prefix
//! lengths are not embedded.

use crate::errors::DomainError;
use std::net::{Ipv4Addr, Ipv6Addr};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dns64Synthesizer {
    base: String,
}

impl Dns64Synthesizer {
    /// Accepts `64:ff9b::`, `64:ff9b` or `64:ff9b::/96`.
    pub fn new(prefix: &str) -> Self {
        let prefix = prefix.trim();
        let prefix = prefix.strip_suffix("/96").unwrap_or(prefix);
        let base = prefix.strip_suffix("::").unwrap_or(prefix);
        Self {
            base: base.to_string(),
        }
    }

    /// Prefix with any trailing `::` and `/96` removed.
    pub fn base(&self) -> &str {
        &self.base
    }

    /// Textual synthesis, `base::HHHH:LLLL` in lowercase hex without padding.
    ///
    /// Fails with `InvalidDns64Prefix` when the text is not an IPv6 address,
    /// which is how a prefix of any length other than `/96` shows up.
    pub fn synthesize_text(&self, ipv4: &str) -> Result<String, DomainError> {
        let ipv4 = ipv4
            .parse::<Ipv4Addr>()
            .map_err(|_| DomainError::InvalidIpAddress(ipv4.to_string()))?;
        self.checked(ipv4).map(|(text, _)| text)
    }

    /// Synthesizes and validates the resulting IPv6 address.
    pub fn synthesize(&self, ipv4: Ipv4Addr) -> Result<Ipv6Addr, DomainError> {
        self.checked(ipv4).map(|(_, address)| address)
    }

    /// Checks that the prefix yields valid addresses at all.
    pub fn validate(&self) -> Result<(), DomainError> {
        self.checked(Ipv4Addr::new(192, 0, 2, 1)).map(|_| ())
    }

    fn checked(&self, ipv4: Ipv4Addr) -> Result<(String, Ipv6Addr), DomainError> {
        let text = self.format(ipv4);
        match text.parse::<Ipv6Addr>() {
            Ok(address) => Ok((text, address)),
            Err(_) => Err(DomainError::InvalidDns64Prefix(format!(
                "{} (from {})",
                text, ipv4
            ))),
        }
    }

    fn format(&self, ipv4: Ipv4Addr) -> String {
        let value = u32::from(ipv4);
        let high = (value >> 16) & 0xffff;
        let low = value & 0xffff;
        format!("{}::{:x}:{:x}", self.base, high, low)
    }
}

/// One-shot form of [`Dns64Synthesizer::synthesize_text`].
pub fn synthesize(ipv4: &str, prefix: &str) -> Result<String, DomainError> {
    Dns64Synthesizer::new(prefix).synthesize_text(ipv4)
}
