pub mod config_source;
pub mod lifecycle;
pub mod resolver;

pub use config_source::{ConfigSource, CONFIG_ENV_VAR, DEFAULT_CONFIG_PATH};
pub use resolver::HickoryResolutionProvider;
