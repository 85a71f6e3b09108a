pub mod alchemy;

pub use alchemy::AlchemyClient;

use async_trait::async_trait;

use crate::error::Result;
use crate::types::TransferRecord;

/// Upstream transaction-history source.
///
/// Implementations fetch all transfer records for an address on one network
/// within a block range. Callers treat any failure as "data unavailable" and
/// degrade to fallback; retries and timeouts are the implementation's
/// concern.
#[async_trait]
pub trait TransferFetcher: Send + Sync {
    async fn fetch_transfers(
        &self,
        address: &str,
        network: &str,
        from_block: &str,
        to_block: &str,
    ) -> Result<Vec<TransferRecord>>;
}
