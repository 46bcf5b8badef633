use crate::di::Services;
use anyhow::Context;
use std::sync::Arc;
use std::time::{Duration, Instant};

const PAUSE: Duration = Duration::from_millis(100);
const DETAILED_QUERIES: u32 = 3;

pub async fn run(services: &Services, host: String, iterations: u32) -> anyhow::Result<()> {
    anyhow::ensure!(iterations > 0, "iterations must be at least 1");

    println!("Benchmarking {} with {} queries", host, iterations);

    let mut succeeded = 0u32;
    let mut total = Duration::ZERO;

    for i in 0..iterations {
        let use_case = Arc::clone(&services.resolve_by_name);
        let name = host.clone();

        let started = Instant::now();
        let result = tokio::task::spawn_blocking(move || use_case.execute(&name))
            .await
            .context("lookup task panicked")?;
        let elapsed = started.elapsed();
        total += elapsed;

        match result {
            Ok(chain) => {
                succeeded += 1;
                if i < DETAILED_QUERIES {
                    let first = chain
                        .first()
                        .map(|r| r.address.to_string())
                        .unwrap_or_default();
                    println!(
                        "  query {}: {} ({:.2} ms)",
                        i + 1,
                        first,
                        elapsed.as_secs_f64() * 1000.0
                    );
                }
            }
            Err(e) => println!("  query {}: failed: {}", i + 1, e),
        }

        if i + 1 < iterations {
            tokio::time::sleep(PAUSE).await;
        }
    }

    let average = total / iterations;
    println!(
        "Success rate: {}/{} ({:.1}%)",
        succeeded,
        iterations,
        f64::from(succeeded) * 100.0 / f64::from(iterations)
    );
    println!("Average time: {:.2} ms", average.as_secs_f64() * 1000.0);
    println!("Total time: {:.2} ms", total.as_secs_f64() * 1000.0);
    Ok(())
}
