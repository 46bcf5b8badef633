mod errors;
mod hickory_provider;
mod records;
mod service;

pub use errors::classify_resolve_error;
pub use hickory_provider::{resolver_config, HickoryResolutionProvider};
pub use records::{expand_records, passive_or_loopback};
pub use service::service_port;
