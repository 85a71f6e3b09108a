/// Activity aggregation orchestrator with per-(address, chain) memoization
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::activity::fallback::generate_fallback;
use crate::activity::transform::bucket_transfers;
use crate::activity::window::ActivityWindow;
use crate::chains::resolve_chain;
use crate::error::{Result, TrackerError};
use crate::provider::TransferFetcher;
use crate::types::ActivityHistogram;
use crate::utils::is_valid_address;

/// Full-history block range for the bounded transfer fetch
const FROM_BLOCK: &str = "0x0";
const TO_BLOCK: &str = "latest";

type CacheKey = (String, String);

/// Tracks daily transaction activity per wallet and chain.
///
/// Results are memoized for the process lifetime; every failure mode except
/// an unknown chain selector resolves to a valid (possibly synthetic)
/// histogram, so callers always have something to render.
pub struct ActivityTracker {
    fetcher: Arc<dyn TransferFetcher>,
    cache: RwLock<HashMap<CacheKey, ActivityHistogram>>,
}

impl ActivityTracker {
    pub fn new(fetcher: Arc<dyn TransferFetcher>) -> Self {
        ActivityTracker {
            fetcher,
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// Get the trailing-365-day activity histogram for an address on a chain.
    ///
    /// Served from cache when possible. Invalid addresses and upstream fetch
    /// failures degrade to synthetic fallback data; an unrecognized chain
    /// selector is a configuration error and propagates.
    pub async fn get_activity(&self, address: &str, chain: &str) -> Result<ActivityHistogram> {
        let cache_key = (address.to_string(), chain.to_string());

        {
            let cache = self.cache.read().await;
            if let Some(histogram) = cache.get(&cache_key) {
                debug!("Cache hit for {} on {}", address, chain);
                return Ok(histogram.clone());
            }
        }

        self.build_and_cache(address, chain, cache_key).await
    }

    /// Rebuild the histogram, bypassing the cache read. The result is still
    /// written through the same cache key, so subsequent reads see it.
    pub async fn refresh_activity(&self, address: &str, chain: &str) -> Result<ActivityHistogram> {
        let cache_key = (address.to_string(), chain.to_string());
        self.build_and_cache(address, chain, cache_key).await
    }

    /// Drop all cached histograms
    pub async fn clear_cache(&self) {
        self.cache.write().await.clear();
    }

    async fn build_and_cache(
        &self,
        address: &str,
        chain: &str,
        cache_key: CacheKey,
    ) -> Result<ActivityHistogram> {
        if !is_valid_address(address) {
            warn!("Invalid wallet address: {:?}, serving fallback data", address);
            let histogram = generate_fallback(&ActivityWindow::current());
            self.store(cache_key, histogram.clone()).await;
            return Ok(histogram);
        }

        // Unknown chain is a configuration mistake, never masked by fallback
        let chain_config = resolve_chain(chain)?;

        info!("Fetching activity for {} on {}", address, chain_config.label);

        let histogram = match self
            .fetcher
            .fetch_transfers(address, chain_config.network, FROM_BLOCK, TO_BLOCK)
            .await
        {
            Ok(transfers) => {
                let window = ActivityWindow::current();
                let histogram = bucket_transfers(&window, &transfers);
                info!(
                    "Aggregated {} transfers for {} on {}",
                    transfers.len(),
                    address,
                    chain_config.label
                );
                histogram
            }
            Err(e) => {
                warn!(
                    "Transfer fetch failed ({}): {}, serving fallback data",
                    e.error_code(),
                    e
                );
                generate_fallback(&ActivityWindow::current())
            }
        };

        self.store(cache_key, histogram.clone()).await;
        Ok(histogram)
    }

    async fn store(&self, key: CacheKey, histogram: ActivityHistogram) {
        let mut cache = self.cache.write().await;
        let _ = cache.insert(key, histogram);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::{Duration, Local};
    use std::sync::atomic::{AtomicUsize, Ordering};

    use crate::activity::window::day_key;
    use crate::types::{TimestampValue, TransferRecord};

    /// Scripted upstream: serves a fixed record list (or a fixed failure)
    /// and counts invocations.
    struct MockFetcher {
        records: Option<Vec<TransferRecord>>,
        calls: AtomicUsize,
    }

    impl MockFetcher {
        fn serving(records: Vec<TransferRecord>) -> Self {
            MockFetcher {
                records: Some(records),
                calls: AtomicUsize::new(0),
            }
        }

        fn failing() -> Self {
            MockFetcher {
                records: None,
                calls: AtomicUsize::new(0),
            }
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl TransferFetcher for MockFetcher {
        async fn fetch_transfers(
            &self,
            _address: &str,
            _network: &str,
            _from_block: &str,
            _to_block: &str,
        ) -> Result<Vec<TransferRecord>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match &self.records {
                Some(records) => Ok(records.clone()),
                None => Err(TrackerError::UpstreamApiError {
                    code: "503".to_string(),
                    message: "upstream down".to_string(),
                }),
            }
        }
    }

    fn valid_address() -> String {
        format!("0x{}", "a".repeat(40))
    }

    fn record_days_ago(days: i64) -> TransferRecord {
        let seconds = (Local::now() - Duration::days(days)).timestamp();
        TransferRecord::with_timestamp(TimestampValue::Seconds(seconds))
    }

    #[tokio::test]
    async fn test_real_transfers_are_bucketed_by_day() {
        let fetcher = Arc::new(MockFetcher::serving(vec![
            record_days_ago(10),
            record_days_ago(20),
        ]));
        let tracker = ActivityTracker::new(Arc::clone(&fetcher) as Arc<dyn TransferFetcher>);

        let histogram = tracker
            .get_activity(&valid_address(), "ethereum")
            .await
            .unwrap();

        assert_eq!(histogram.len(), 365);

        let key_10 = day_key(Local::now().date_naive() - Duration::days(10));
        let key_20 = day_key(Local::now().date_naive() - Duration::days(20));
        assert_eq!(histogram[&key_10], 1);
        assert_eq!(histogram[&key_20], 1);

        let total: u64 = histogram.values().map(|&c| c as u64).sum();
        assert_eq!(total, 2);
    }

    #[tokio::test]
    async fn test_second_call_is_served_from_cache() {
        let fetcher = Arc::new(MockFetcher::serving(vec![record_days_ago(1)]));
        let tracker = ActivityTracker::new(Arc::clone(&fetcher) as Arc<dyn TransferFetcher>);
        let address = valid_address();

        let first = tracker.get_activity(&address, "base").await.unwrap();
        let second = tracker.get_activity(&address, "base").await.unwrap();

        assert_eq!(first, second);
        assert_eq!(fetcher.call_count(), 1);
    }

    #[tokio::test]
    async fn test_distinct_chains_are_cached_separately() {
        let fetcher = Arc::new(MockFetcher::serving(vec![record_days_ago(2)]));
        let tracker = ActivityTracker::new(Arc::clone(&fetcher) as Arc<dyn TransferFetcher>);
        let address = valid_address();

        tracker.get_activity(&address, "ethereum").await.unwrap();
        tracker.get_activity(&address, "arbitrum").await.unwrap();

        assert_eq!(fetcher.call_count(), 2);
    }

    #[tokio::test]
    async fn test_invalid_address_yields_fallback_without_fetching() {
        let fetcher = Arc::new(MockFetcher::serving(vec![]));
        let tracker = ActivityTracker::new(Arc::clone(&fetcher) as Arc<dyn TransferFetcher>);

        let histogram = tracker
            .get_activity("not-an-address", "ethereum")
            .await
            .unwrap();

        assert_eq!(histogram.len(), 365);
        assert_eq!(fetcher.call_count(), 0);
    }

    #[tokio::test]
    async fn test_unknown_chain_is_a_configuration_error() {
        let fetcher = Arc::new(MockFetcher::serving(vec![]));
        let tracker = ActivityTracker::new(Arc::clone(&fetcher) as Arc<dyn TransferFetcher>);

        let err = tracker
            .get_activity(&valid_address(), "unknownchain")
            .await
            .unwrap_err();

        assert!(matches!(err, TrackerError::UnsupportedChain(_)));
        assert_eq!(fetcher.call_count(), 0);
    }

    #[tokio::test]
    async fn test_fetch_failure_degrades_to_fallback() {
        let fetcher = Arc::new(MockFetcher::failing());
        let tracker = ActivityTracker::new(Arc::clone(&fetcher) as Arc<dyn TransferFetcher>);

        let histogram = tracker
            .get_activity(&valid_address(), "optimism")
            .await
            .unwrap();

        assert_eq!(histogram.len(), 365);
        assert_eq!(fetcher.call_count(), 1);

        // The fallback is cached too: no second upstream attempt
        tracker
            .get_activity(&valid_address(), "optimism")
            .await
            .unwrap();
        assert_eq!(fetcher.call_count(), 1);
    }

    #[tokio::test]
    async fn test_refresh_bypasses_cache_read_but_writes_through() {
        let fetcher = Arc::new(MockFetcher::serving(vec![record_days_ago(4)]));
        let tracker = ActivityTracker::new(Arc::clone(&fetcher) as Arc<dyn TransferFetcher>);
        let address = valid_address();

        tracker.get_activity(&address, "ethereum").await.unwrap();
        let refreshed = tracker.refresh_activity(&address, "ethereum").await.unwrap();
        assert_eq!(fetcher.call_count(), 2);

        // Subsequent reads serve the refreshed value from cache
        let cached = tracker.get_activity(&address, "ethereum").await.unwrap();
        assert_eq!(cached, refreshed);
        assert_eq!(fetcher.call_count(), 2);
    }

    #[tokio::test]
    async fn test_clear_cache_forces_a_refetch() {
        let fetcher = Arc::new(MockFetcher::serving(vec![record_days_ago(7)]));
        let tracker = ActivityTracker::new(Arc::clone(&fetcher) as Arc<dyn TransferFetcher>);
        let address = valid_address();

        tracker.get_activity(&address, "base").await.unwrap();
        tracker.clear_cache().await;
        tracker.get_activity(&address, "base").await.unwrap();

        assert_eq!(fetcher.call_count(), 2);
    }

    #[tokio::test]
    async fn test_all_values_are_within_window_domain() {
        let fetcher = Arc::new(MockFetcher::serving(vec![
            record_days_ago(0),
            record_days_ago(364),
            record_days_ago(500),
        ]));
        let tracker = ActivityTracker::new(Arc::clone(&fetcher) as Arc<dyn TransferFetcher>);

        let histogram = tracker
            .get_activity(&valid_address(), "bnbchain")
            .await
            .unwrap();

        let window = ActivityWindow::current();
        assert_eq!(histogram.len(), window.keys().len());
        for key in window.keys() {
            assert!(histogram.contains_key(key));
        }

        // The 500-day-old record is outside the window
        let total: u64 = histogram.values().map(|&c| c as u64).sum();
        assert_eq!(total, 2);
    }
}
