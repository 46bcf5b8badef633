use crate::di::Services;
use anyhow::Context;
use clap::ValueEnum;
use dns_override_domain::{AddrInfoHints, AddressFamily, SocketType};
use std::sync::Arc;
use std::time::Instant;
use tracing::error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FamilyArg {
    Any,
    Ipv4,
    Ipv6,
}

impl FamilyArg {
    fn family(self) -> Option<AddressFamily> {
        match self {
            FamilyArg::Any => None,
            FamilyArg::Ipv4 => Some(AddressFamily::Ipv4),
            FamilyArg::Ipv6 => Some(AddressFamily::Ipv6),
        }
    }
}

pub async fn run(
    services: &Services,
    host: String,
    service: Option<String>,
    family: FamilyArg,
    json: bool,
) -> anyhow::Result<()> {
    let mut hints = AddrInfoHints::new().with_socket_type(SocketType::Stream);
    hints.family = family.family();

    let use_case = Arc::clone(&services.resolve_addr_info);
    let node = host.clone();
    let started = Instant::now();
    let result = tokio::task::spawn_blocking(move || {
        use_case.execute(Some(&node), service.as_deref(), &hints)
    })
    .await
    .context("lookup task panicked")?;
    let elapsed = started.elapsed();

    let chain = match result {
        Ok(chain) => chain,
        Err(e) => {
            error!(host = %host, code = e.gai_code(), error = %e, "Lookup failed");
            println!("getaddrinfo failed for {}: {} (code {})", host, e, e.gai_code());
            return Err(e.into());
        }
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&chain)?);
        return Ok(());
    }

    println!("Addresses for {}:", host);
    for record in chain.iter() {
        println!("  {}: {}", record.family(), record.socket_addr());
    }
    println!("Total addresses found: {}", chain.len());
    println!("Query time: {:.2} ms", elapsed.as_secs_f64() * 1000.0);
    Ok(())
}
