use serde::Serialize;

pub const DEFAULT_DNS64_PREFIX: &str = "64:ff9b::";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dns64Config {
    pub enabled: bool,

    pub prefix: String,
}

impl Default for Dns64Config {
    fn default() -> Self {
        Self {
            enabled: false,
            prefix: DEFAULT_DNS64_PREFIX.to_string(),
        }
    }
}
