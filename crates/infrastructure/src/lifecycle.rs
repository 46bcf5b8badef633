//! Process-wide configuration lifecycle.
//!
//! The override is configured once per process: the first [`init`] reads and
//! parses the source, every later call returns the same [`Config`] until
//! [`shutdown`] clears it. Readers never block; [`current`] is a single
//! atomic load.

use crate::config_source::ConfigSource;
use arc_swap::ArcSwapOption;
use dns_override_domain::Config;
use std::sync::{Arc, LazyLock, Mutex, PoisonError};
use tracing::info;

static CURRENT: LazyLock<ArcSwapOption<Config>> = LazyLock::new(ArcSwapOption::empty);

/// Held while building or tearing down, so the source is read at most once.
static INIT_LOCK: Mutex<()> = Mutex::new(());

/// Loads from [`ConfigSource::locate`] on first use.
pub fn init() -> Arc<Config> {
    init_with(ConfigSource::locate())
}

/// Loads from `source` on first use; later calls ignore `source`.
pub fn init_with(source: ConfigSource) -> Arc<Config> {
    if let Some(config) = CURRENT.load_full() {
        return config;
    }

    let _guard = INIT_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(config) = CURRENT.load_full() {
        return config;
    }

    let report = source.load();
    let config = Arc::new(report.config);
    CURRENT.store(Some(Arc::clone(&config)));

    info!(
        path = %source.path.display(),
        from_env = source.from_env,
        fallback = report.used_fallback,
        "DNS override loaded"
    );
    config
}

pub fn current() -> Option<Arc<Config>> {
    CURRENT.load_full()
}

pub fn is_initialized() -> bool {
    CURRENT.load().is_some()
}

/// Drops the process configuration. Returns false if nothing was loaded.
///
/// Callers still holding an `Arc<Config>` keep a valid copy; the next
/// [`init`] reads the source again.
pub fn shutdown() -> bool {
    let _guard = INIT_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
    let previous = CURRENT.swap(None);
    if previous.is_some() {
        info!("DNS override unloaded");
    }
    previous.is_some()
}
