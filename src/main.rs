/// CLI entry point: fetch and summarize wallet activity for one chain
use chrono::{Duration, Local};
use std::sync::Arc;
use tracing::info;

use walletpulse::{
    activity::{day_key, ActivityTracker},
    analytics::compute_score,
    chains::{resolve_chain, supported_chains},
    config::load_or_default,
    provider::{AlchemyClient, TransferFetcher},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 3 {
        eprintln!("Usage: walletpulse <address> <chain> [--refresh]");
        eprintln!(
            "Supported chains: {}",
            supported_chains().collect::<Vec<_>>().join(", ")
        );
        std::process::exit(1);
    }

    let address = &args[1];
    let chain = &args[2];
    let refresh = args.iter().any(|arg| arg == "--refresh");

    // Load configuration
    let config = load_or_default("config.toml")?;

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(config.log_level.clone())
        .init();

    info!("Starting activity tracker...");

    let fetcher = Arc::new(AlchemyClient::new(
        config.alchemy_api_key.clone(),
        config.max_transfers,
        config.request_timeout_secs,
    )?) as Arc<dyn TransferFetcher>;

    let tracker = ActivityTracker::new(fetcher);

    let histogram = if refresh {
        tracker.refresh_activity(address, chain).await?
    } else {
        tracker.get_activity(address, chain).await?
    };

    let score = compute_score(&histogram);
    let chain_config = resolve_chain(chain)?;

    println!("📊 Wallet Activity — {} on {}", address, chain_config.label);
    println!("=============================================\n");

    // Last 30 days, oldest first
    let today = Local::now().date_naive();
    println!("Last 30 days:");
    for offset in (0..30).rev() {
        let key = day_key(today - Duration::days(offset));
        let count = histogram.get(&key).copied().unwrap_or(0);
        if count > 0 {
            println!("  {}  {}", key, "▪".repeat(count.min(40) as usize));
        }
    }

    let active_days = histogram.values().filter(|&&count| count > 0).count();
    println!("\nActive days (365d): {}", active_days);
    println!("Total score:        {}", score.total);
    println!("Level:              {}", score.level.as_str());
    println!("Explorer:           {}/address/{}", chain_config.explorer_url, address);

    Ok(())
}
