//! DNS Override Domain Layer
pub mod addr_info_hints;
pub mod address_chain;
pub mod address_record;
pub mod config;
pub mod dns64;
pub mod errors;
pub mod resolver_settings;

pub use addr_info_hints::AddrInfoHints;
pub use address_chain::AddressChain;
pub use address_record::{AddressFamily, AddressRecord, SocketType};
pub use config::{Config, ConfigError, ConfigLoader, ConfigWarning, LoadReport, ServerEntry};
pub use dns64::Dns64Synthesizer;
pub use errors::DomainError;
pub use resolver_settings::{ResolverSettings, MAXNS};
