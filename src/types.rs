/// Core type definitions for the activity tracker
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Day-keyed activity histogram: `YYYY-MM-DD` -> transaction count.
/// The domain is always exactly the 365 trailing calendar-day keys.
pub type ActivityHistogram = HashMap<String, u32>;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Alchemy API key used by the transfer fetcher
    pub alchemy_api_key: String,

    /// HTTP timeout for upstream requests, in seconds
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Maximum transfers fetched per request (upstream cap is 1000)
    #[serde(default = "default_max_transfers")]
    pub max_transfers: u32,

    /// Log filter, e.g. "walletpulse=debug,info"
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_request_timeout_secs() -> u64 {
    30
}

fn default_max_transfers() -> u32 {
    1000
}

fn default_log_level() -> String {
    "walletpulse=debug,info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            alchemy_api_key: String::new(),
            request_timeout_secs: default_request_timeout_secs(),
            max_transfers: default_max_transfers(),
            log_level: default_log_level(),
        }
    }
}

/// Block timestamp as delivered upstream: either epoch seconds as a JSON
/// number, or a string carrying decimal or 0x-prefixed hex seconds.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TimestampValue {
    Seconds(i64),
    Text(String),
}

/// A single raw transfer record from the upstream provider. Only the
/// timestamp participates in aggregation; the remaining fields are kept
/// for diagnostics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransferRecord {
    #[serde(rename = "timeStamp", alias = "timestamp", default)]
    pub timestamp: Option<TimestampValue>,

    #[serde(rename = "hash", default)]
    pub tx_hash: Option<String>,

    #[serde(rename = "from", default)]
    pub from_address: Option<String>,

    #[serde(rename = "to", default)]
    pub to_address: Option<String>,

    #[serde(default)]
    pub category: Option<String>,
}

impl TransferRecord {
    pub fn with_timestamp(ts: TimestampValue) -> Self {
        TransferRecord {
            timestamp: Some(ts),
            tx_hash: None,
            from_address: None,
            to_address: None,
            category: None,
        }
    }
}
