#![allow(dead_code)]

use dns_override_application::ports::ResolutionProvider;
use dns_override_domain::{
    AddrInfoHints, AddressChain, AddressRecord, DomainError, ResolverSettings, MAXNS,
};
use std::net::SocketAddrV4;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

type Response = Result<Vec<AddressRecord>, DomainError>;

/// Settings the mock starts with, distinguishable from anything a Config
/// produces.
pub fn system_settings() -> ResolverSettings {
    ResolverSettings {
        ipv4_servers: vec![SocketAddrV4::new([192, 0, 2, 53].into(), 53)],
        ..ResolverSettings::default()
    }
}

/// In-memory provider that records what was installed around each call.
pub struct MockResolutionProvider {
    current: Mutex<ResolverSettings>,
    addr_info_response: Mutex<Response>,
    by_name_response: Mutex<Response>,
    seen_during_call: Mutex<Vec<ResolverSettings>>,
    seen_nodes: Mutex<Vec<Option<String>>>,
    max_nameservers: usize,
    delay: Option<Duration>,
    installs: AtomicUsize,
    restores: AtomicUsize,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
}

impl MockResolutionProvider {
    pub fn new() -> Self {
        Self {
            current: Mutex::new(system_settings()),
            addr_info_response: Mutex::new(Ok(vec![])),
            by_name_response: Mutex::new(Ok(vec![])),
            seen_during_call: Mutex::new(vec![]),
            seen_nodes: Mutex::new(vec![]),
            max_nameservers: MAXNS,
            delay: None,
            installs: AtomicUsize::new(0),
            restores: AtomicUsize::new(0),
            in_flight: AtomicUsize::new(0),
            max_in_flight: AtomicUsize::new(0),
        }
    }

    pub fn with_max_nameservers(mut self, max: usize) -> Self {
        self.max_nameservers = max;
        self
    }

    /// Every lookup sleeps this long while holding its settings.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn set_addr_info_response(&self, chain: AddressChain) {
        *self.addr_info_response.lock().unwrap() = Ok(chain.into_records());
    }

    pub fn set_addr_info_error(&self, error: DomainError) {
        *self.addr_info_response.lock().unwrap() = Err(error);
    }

    pub fn set_by_name_response(&self, chain: AddressChain) {
        *self.by_name_response.lock().unwrap() = Ok(chain.into_records());
    }

    pub fn set_by_name_error(&self, error: DomainError) {
        *self.by_name_response.lock().unwrap() = Err(error);
    }

    pub fn installs(&self) -> usize {
        self.installs.load(Ordering::SeqCst)
    }

    pub fn restores(&self) -> usize {
        self.restores.load(Ordering::SeqCst)
    }

    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }

    /// Settings that were current while each lookup ran, in call order.
    pub fn seen_during_call(&self) -> Vec<ResolverSettings> {
        self.seen_during_call.lock().unwrap().clone()
    }

    pub fn seen_nodes(&self) -> Vec<Option<String>> {
        self.seen_nodes.lock().unwrap().clone()
    }

    fn lookup(&self, response: &Mutex<Response>) -> Result<AddressChain, DomainError> {
        let running = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(running, Ordering::SeqCst);

        self.seen_during_call
            .lock()
            .unwrap()
            .push(self.current.lock().unwrap().clone());
        if let Some(delay) = self.delay {
            std::thread::sleep(delay);
        }
        let result = response.lock().unwrap().clone().map(AddressChain::from);

        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        result
    }
}

impl Default for MockResolutionProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl ResolutionProvider for MockResolutionProvider {
    fn max_nameservers(&self) -> usize {
        self.max_nameservers
    }

    fn ambient_settings(&self) -> ResolverSettings {
        self.current.lock().unwrap().clone()
    }

    fn install_settings(&self, settings: ResolverSettings) -> ResolverSettings {
        self.installs.fetch_add(1, Ordering::SeqCst);
        std::mem::replace(&mut *self.current.lock().unwrap(), settings)
    }

    fn restore_settings(&self, settings: ResolverSettings) {
        self.restores.fetch_add(1, Ordering::SeqCst);
        *self.current.lock().unwrap() = settings;
    }

    fn resolve_by_name(&self, hostname: &str) -> Result<AddressChain, DomainError> {
        self.seen_nodes
            .lock()
            .unwrap()
            .push(Some(hostname.to_string()));
        self.lookup(&self.by_name_response)
    }

    fn resolve_addr_info(
        &self,
        node: Option<&str>,
        _service: Option<&str>,
        _hints: &AddrInfoHints,
    ) -> Result<AddressChain, DomainError> {
        self.seen_nodes
            .lock()
            .unwrap()
            .push(node.map(str::to_string));
        self.lookup(&self.addr_info_response)
    }
}
