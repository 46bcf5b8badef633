mod logging;

pub use logging::init_logging;

use dns_override_domain::ConfigLoader;
use dns_override_infrastructure::ConfigSource;

/// Whether the source asks for debug output, read before logging exists so
/// the load itself can be logged at the right level.
pub fn peek_debug(source: &ConfigSource) -> bool {
    source
        .read()
        .map(|contents| ConfigLoader::parse(&contents).config.debug)
        .unwrap_or(false)
}
