#![allow(dead_code)]
use dns_override_domain::{AddressChain, AddressRecord, SocketType};
use std::net::IpAddr;
use std::str::FromStr;
use std::sync::Arc;

pub struct AddressRecordBuilder {
    address: IpAddr,
    port: u16,
    socket_type: SocketType,
    protocol: Option<i32>,
    canonical_name: Option<Arc<str>>,
}

impl AddressRecordBuilder {
    pub fn new() -> Self {
        Self {
            address: IpAddr::from_str("192.0.2.1").unwrap(),
            port: 0,
            socket_type: SocketType::Stream,
            protocol: None,
            canonical_name: None,
        }
    }

    pub fn address(mut self, address: &str) -> Self {
        self.address = IpAddr::from_str(address).unwrap();
        self
    }

    pub fn port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn socket_type(mut self, socket_type: SocketType) -> Self {
        self.socket_type = socket_type;
        self
    }

    pub fn protocol(mut self, protocol: i32) -> Self {
        self.protocol = Some(protocol);
        self
    }

    pub fn canonical_name(mut self, name: &str) -> Self {
        self.canonical_name = Some(name.into());
        self
    }

    pub fn build(self) -> AddressRecord {
        let mut record = AddressRecord::new(self.address, self.port, self.socket_type);
        if let Some(protocol) = self.protocol {
            record.protocol = protocol;
        }
        record.canonical_name = self.canonical_name;
        record
    }
}

impl Default for AddressRecordBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Chain of stream records on `port`, one per address, in the given order.
pub fn chain_of(addresses: &[&str], port: u16) -> AddressChain {
    addresses
        .iter()
        .map(|a| AddressRecordBuilder::new().address(a).port(port).build())
        .collect()
}
