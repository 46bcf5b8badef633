pub mod dns64;
pub mod errors;
pub mod loader;
pub mod root;
pub mod server;

pub use dns64::Dns64Config;
pub use errors::{ConfigError, ConfigWarning};
pub use loader::{ConfigLoader, LoadReport};
pub use root::{Config, DEFAULT_TIMEOUT_MS, MAX_DNS_SERVERS};
pub use server::{ServerEntry, ServerParseError, DEFAULT_DNS_PORT};
