use crate::address_record::{AddressFamily, SocketType};

/// Caller preferences for an address-info lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddrInfoHints {
    /// `None` accepts both families
    pub family: Option<AddressFamily>,

    /// `None` returns one record per socket type
    pub socket_type: Option<SocketType>,

    pub protocol: i32,

    /// Report the canonical name on the first record
    pub canonical_name: bool,

    /// With no node, return wildcard instead of loopback addresses
    pub passive: bool,
}

impl AddrInfoHints {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_family(mut self, family: AddressFamily) -> Self {
        self.family = Some(family);
        self
    }

    pub fn with_socket_type(mut self, socket_type: SocketType) -> Self {
        self.socket_type = Some(socket_type);
        self
    }

    pub fn with_canonical_name(mut self) -> Self {
        self.canonical_name = true;
        self
    }

    pub fn with_passive(mut self) -> Self {
        self.passive = true;
        self
    }

    pub fn accepts(&self, family: AddressFamily) -> bool {
        self.family.is_none_or(|f| f == family)
    }
}
