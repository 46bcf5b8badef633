use crate::di::Services;
use std::sync::Arc;
use tokio::task::JoinSet;

const DEFAULT_HOSTS: &[&str] = &[
    "google.com",
    "github.com",
    "stackoverflow.com",
    "reddit.com",
    "wikipedia.org",
    "cloudflare.com",
];

pub async fn run(services: &Services, hosts: Vec<String>) -> anyhow::Result<()> {
    let hosts = if hosts.is_empty() {
        DEFAULT_HOSTS.iter().map(|h| h.to_string()).collect()
    } else {
        hosts
    };

    let mut tasks = JoinSet::new();
    for (index, host) in hosts.into_iter().enumerate() {
        let use_case = Arc::clone(&services.resolve_by_name);
        tasks.spawn_blocking(move || {
            let result = use_case.execute(&host);
            (index, host, result)
        });
    }

    let mut results = Vec::with_capacity(tasks.len());
    while let Some(joined) = tasks.join_next().await {
        results.push(joined?);
    }
    results.sort_by_key(|(index, _, _)| *index);

    let mut failures = 0;
    for (_, host, result) in results {
        match result {
            Ok(chain) => {
                let first = chain
                    .first()
                    .map(|r| r.address.to_string())
                    .unwrap_or_default();
                println!("  {:<20} {} ({} addresses)", host, first, chain.len());
            }
            Err(e) => {
                failures += 1;
                println!("  {:<20} failed: {}", host, e);
            }
        }
    }

    anyhow::ensure!(failures == 0, "{} lookups failed", failures);
    Ok(())
}
