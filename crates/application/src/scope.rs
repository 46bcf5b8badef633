use crate::ports::ResolutionProvider;
use dns_override_domain::{Config, ResolverSettings};
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::debug;

/// Serializes install → resolve → restore across the whole process.
static SCOPE_LOCK: Mutex<()> = Mutex::new(());

/// Per-call resolver settings installed on a provider.
///
/// Entering takes the process-wide scope lock, installs the servers and
/// timeouts derived from a [`Config`] and keeps the settings they replaced.
/// Dropping the scope puts those back and only then releases the lock, so
/// the restore runs on every exit path, `?` and unwinding included.
pub struct ResolutionScope<'a> {
    provider: &'a dyn ResolutionProvider,
    saved: Option<ResolverSettings>,
    // Declared last: released after `drop` has restored.
    _guard: MutexGuard<'static, ()>,
}

impl<'a> ResolutionScope<'a> {
    pub fn enter(provider: &'a dyn ResolutionProvider, config: &Config) -> Self {
        // A panic inside another scope leaves nothing half-installed: its
        // Drop already restored before the lock was poisoned.
        let guard = SCOPE_LOCK.lock().unwrap_or_else(PoisonError::into_inner);

        let settings = ResolverSettings::from_config(config, provider.max_nameservers());
        debug!(
            ipv4_servers = settings.ipv4_servers.len(),
            ipv6_servers = settings.ipv6_servers.len(),
            timeout_ms = config.timeout_ms,
            use_tcp = settings.use_tcp,
            "Installing resolver settings"
        );
        let saved = provider.install_settings(settings);

        Self {
            provider,
            saved: Some(saved),
            _guard: guard,
        }
    }

    /// Enters a scope, runs `f` against the configured provider and restores.
    pub fn run<T>(
        provider: &'a dyn ResolutionProvider,
        config: &Config,
        f: impl FnOnce(&dyn ResolutionProvider) -> T,
    ) -> T {
        let scope = Self::enter(provider, config);
        f(scope.provider())
    }

    pub fn provider(&self) -> &'a dyn ResolutionProvider {
        self.provider
    }
}

impl Drop for ResolutionScope<'_> {
    fn drop(&mut self) {
        if let Some(saved) = self.saved.take() {
            self.provider.restore_settings(saved);
            debug!("Restored ambient resolver settings");
        }
    }
}
