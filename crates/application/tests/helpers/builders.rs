#![allow(dead_code)]
use dns_override_domain::{AddressChain, AddressRecord, Config, SocketType};
use std::net::IpAddr;

pub fn record(address: &str, port: u16) -> AddressRecord {
    AddressRecord::new(address.parse::<IpAddr>().unwrap(), port, SocketType::Stream)
}

/// Stream records on `port`, one per address, in order.
pub fn chain_of(addresses: &[&str], port: u16) -> AddressChain {
    addresses.iter().map(|a| record(a, port)).collect()
}

pub fn addresses(chain: &AddressChain) -> Vec<String> {
    chain.iter().map(|r| r.address.to_string()).collect()
}

pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    pub fn servers(mut self, tokens: &[&str]) -> Self {
        self.config.servers = tokens.iter().map(|t| t.parse().unwrap()).collect();
        self
    }

    pub fn timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.config.timeout_ms = timeout_ms;
        self
    }

    pub fn filter_aaaa(mut self) -> Self {
        self.config.filter_aaaa = true;
        self
    }

    pub fn filter_a(mut self) -> Self {
        self.config.filter_a = true;
        self
    }

    pub fn dns64(mut self, prefix: &str) -> Self {
        self.config.dns64.enabled = true;
        self.config.dns64.prefix = prefix.to_string();
        self
    }

    pub fn debug(mut self) -> Self {
        self.config.debug = true;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
