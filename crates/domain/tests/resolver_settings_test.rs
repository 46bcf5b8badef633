use dns_override_domain::resolver_settings::DEFAULT_ATTEMPTS;
use dns_override_domain::{Config, ConfigLoader, ResolverSettings, MAXNS};
use std::net::SocketAddr;
use std::time::Duration;

fn config(contents: &str) -> Config {
    ConfigLoader::parse(contents).config
}

#[test]
fn test_default_settings_are_ambient() {
    let settings = ResolverSettings::default();
    assert!(settings.is_ambient());
    assert_eq!(settings.server_count(), 0);
    assert!(settings.timeout.is_none());
}

#[test]
fn test_from_config_splits_by_family_in_order() {
    let config = config(
        "dns_server 9.9.9.9\ndns_server [2620:fe::fe]\ndns_server 1.1.1.1:5353\ndns_server 2606:4700::1111\n",
    );
    let settings = ResolverSettings::from_config(&config, MAXNS);

    let v4: Vec<String> = settings.ipv4_servers.iter().map(|s| s.to_string()).collect();
    let v6: Vec<String> = settings.ipv6_servers.iter().map(|s| s.to_string()).collect();
    assert_eq!(v4, vec!["9.9.9.9:53", "1.1.1.1:5353"]);
    assert_eq!(v6, vec!["[2620:fe::fe]:53", "[2606:4700::1111]:53"]);
    assert!(!settings.is_ambient());
}

#[test]
fn test_from_config_caps_each_family() {
    let contents: String = (1..=5)
        .map(|i| format!("dns_server 10.0.0.{}\ndns_server 2001:db8::{}\n", i, i))
        .collect();
    let settings = ResolverSettings::from_config(&config(&contents), MAXNS);

    assert_eq!(settings.ipv4_servers.len(), MAXNS);
    assert_eq!(settings.ipv6_servers.len(), MAXNS);
    assert_eq!(settings.ipv4_servers[0].to_string(), "10.0.0.1:53");
    assert_eq!(settings.ipv4_servers[2].to_string(), "10.0.0.3:53");
}

#[test]
fn test_from_config_carries_timeout_and_transport() {
    let settings = ResolverSettings::from_config(&config("dns_server 8.8.8.8\ntimeout 2500\nuse_tcp 1\n"), MAXNS);

    assert_eq!(settings.timeout, Some(Duration::from_millis(2500)));
    assert_eq!(settings.attempts, DEFAULT_ATTEMPTS);
    assert!(settings.use_tcp);
}

#[test]
fn test_servers_lists_ipv4_first() {
    let settings = ResolverSettings::from_config(&config("dns_server [2001:db8::1]\ndns_server 8.8.8.8\n"), MAXNS);
    let servers: Vec<SocketAddr> = settings.servers().collect();

    assert!(servers[0].is_ipv4());
    assert!(servers[1].is_ipv6());
}

#[test]
fn test_worst_case_latency() {
    let settings = ResolverSettings::from_config(&config("dns_server 8.8.8.8\ndns_server 1.1.1.1\ntimeout 1000\n"), MAXNS);
    assert_eq!(settings.worst_case_latency(), Some(Duration::from_secs(4)));
    assert_eq!(ResolverSettings::default().worst_case_latency(), None);
}
