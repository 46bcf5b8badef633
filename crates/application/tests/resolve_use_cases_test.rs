mod helpers;

use dns_override_application::ports::ResolutionProvider;
use dns_override_application::use_cases::{ResolveAddrInfoUseCase, ResolveByNameUseCase};
use dns_override_domain::{AddrInfoHints, Config, DomainError};
use helpers::{addresses, chain_of, system_settings, ConfigBuilder, MockResolutionProvider};
use std::sync::Arc;

fn addr_info_use_case(
    provider: &Arc<MockResolutionProvider>,
    config: Config,
) -> ResolveAddrInfoUseCase {
    ResolveAddrInfoUseCase::new(provider.clone(), Arc::new(config))
}

// ── address-info path ──────────────────────────────────────────────────────

#[test]
fn test_addr_info_applies_pipeline() {
    let provider = Arc::new(MockResolutionProvider::new());
    provider.set_addr_info_response(chain_of(&["1.2.3.4", "2001:db8::1"], 80));
    let use_case = addr_info_use_case(
        &provider,
        ConfigBuilder::new().filter_aaaa().dns64("64:ff9b::").build(),
    );

    let chain = use_case
        .execute(Some("example.com"), Some("80"), &AddrInfoHints::default())
        .unwrap();

    assert_eq!(addresses(&chain), vec!["1.2.3.4", "64:ff9b::102:304"]);
    assert_eq!(provider.ambient_settings(), system_settings());
}

#[test]
fn test_addr_info_uses_config_servers_during_call() {
    let provider = Arc::new(MockResolutionProvider::new());
    provider.set_addr_info_response(chain_of(&["1.2.3.4"], 0));
    let use_case = addr_info_use_case(
        &provider,
        ConfigBuilder::new().servers(&["9.9.9.9"]).debug().build(),
    );

    use_case
        .execute(Some("example.com"), None, &AddrInfoHints::default())
        .unwrap();

    let seen = provider.seen_during_call();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].ipv4_servers[0].to_string(), "9.9.9.9:53");
}

#[test]
fn test_addr_info_provider_error_is_propagated_and_settings_restored() {
    let provider = Arc::new(MockResolutionProvider::new());
    provider.set_addr_info_error(DomainError::TemporaryFailure("timed out".into()));
    let use_case = addr_info_use_case(&provider, ConfigBuilder::new().filter_a().build());

    let err = use_case
        .execute(Some("example.com"), None, &AddrInfoHints::default())
        .unwrap_err();

    assert_eq!(err, DomainError::TemporaryFailure("timed out".into()));
    assert_eq!(err.gai_code(), libc::EAI_AGAIN);
    assert_eq!(provider.restores(), 1);
    assert_eq!(provider.ambient_settings(), system_settings());
}

#[test]
fn test_addr_info_without_node_skips_pipeline() {
    let provider = Arc::new(MockResolutionProvider::new());
    provider.set_addr_info_response(chain_of(&["127.0.0.1", "::1"], 8080));
    let use_case = addr_info_use_case(&provider, ConfigBuilder::new().filter_aaaa().filter_a().build());

    let chain = use_case
        .execute(None, Some("8080"), &AddrInfoHints::default())
        .unwrap();

    assert_eq!(addresses(&chain), vec!["127.0.0.1", "::1"]);
    assert_eq!(provider.seen_nodes(), vec![None]);
}

#[test]
fn test_addr_info_empty_result_is_returned_empty() {
    let provider = Arc::new(MockResolutionProvider::new());
    let use_case = addr_info_use_case(&provider, ConfigBuilder::new().dns64("64:ff9b::").build());

    let chain = use_case
        .execute(Some("empty.test"), None, &AddrInfoHints::default())
        .unwrap();

    assert!(chain.is_empty());
}

// ── by-name path ───────────────────────────────────────────────────────────

#[test]
fn test_by_name_returns_provider_result_without_pipeline() {
    let provider = Arc::new(MockResolutionProvider::new());
    provider.set_by_name_response(chain_of(&["93.184.216.34"], 0));
    let config = ConfigBuilder::new().dns64("64:ff9b::").filter_a().build();
    let use_case = ResolveByNameUseCase::new(provider.clone(), Arc::new(config));

    let chain = use_case.execute("example.com").unwrap();

    assert_eq!(addresses(&chain), vec!["93.184.216.34"]);
    assert_eq!(provider.installs(), 1);
    assert_eq!(provider.restores(), 1);
}

#[test]
fn test_by_name_error_restores_settings() {
    let provider = Arc::new(MockResolutionProvider::new());
    provider.set_by_name_error(DomainError::NameNotFound("nope.invalid".into()));
    let use_case = ResolveByNameUseCase::new(provider.clone(), Arc::new(Config::default()));

    let err = use_case.execute("nope.invalid").unwrap_err();

    assert_eq!(err.gai_code(), libc::EAI_NONAME);
    assert_eq!(provider.ambient_settings(), system_settings());
}
