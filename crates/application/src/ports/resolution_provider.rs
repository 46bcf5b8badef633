use dns_override_domain::{AddrInfoHints, AddressChain, DomainError, ResolverSettings, MAXNS};

/// The underlying name-resolution facility being configured and delegated to.
///
/// A provider owns one piece of ambient state: the [`ResolverSettings`] every
/// lookup uses. Callers never touch that state directly; they go through
/// [`crate::scope::ResolutionScope`], which serializes install, lookup and
/// restore across threads.
pub trait ResolutionProvider: Send + Sync {
    /// Nameserver slots available per address family.
    fn max_nameservers(&self) -> usize {
        MAXNS
    }

    /// Settings currently in effect.
    fn ambient_settings(&self) -> ResolverSettings;

    /// Makes `settings` current and returns the settings it replaced.
    fn install_settings(&self, settings: ResolverSettings) -> ResolverSettings;

    /// Puts back settings previously returned by [`install_settings`],
    /// releasing whatever the installed ones held.
    ///
    /// [`install_settings`]: ResolutionProvider::install_settings
    fn restore_settings(&self, settings: ResolverSettings);

    /// Legacy host lookup, IPv4 entries only.
    fn resolve_by_name(&self, hostname: &str) -> Result<AddressChain, DomainError>;

    fn resolve_addr_info(
        &self,
        node: Option<&str>,
        service: Option<&str>,
        hints: &AddrInfoHints,
    ) -> Result<AddressChain, DomainError>;
}
