mod resolution_provider;

pub use resolution_provider::ResolutionProvider;

// Re-export for convenience
pub use dns_override_domain::{AddrInfoHints, AddressChain, ResolverSettings};
