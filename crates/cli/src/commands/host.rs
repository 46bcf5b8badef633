use crate::di::Services;
use anyhow::Context;
use std::sync::Arc;

pub async fn run(services: &Services, host: String) -> anyhow::Result<()> {
    let use_case = Arc::clone(&services.resolve_by_name);
    let name = host.clone();
    let chain = tokio::task::spawn_blocking(move || use_case.execute(&name))
        .await
        .context("lookup task panicked")??;

    println!("Host entries for {}:", host);
    for record in chain.iter() {
        println!("  {}", record.address);
    }
    Ok(())
}
