/// Alchemy JSON-RPC transfer-history client
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{Result, TrackerError};
use crate::provider::TransferFetcher;
use crate::types::TransferRecord;

#[derive(Debug, Serialize)]
struct TransfersRequest {
    jsonrpc: &'static str,
    id: u32,
    method: &'static str,
    params: Vec<TransfersParams>,
}

#[derive(Debug, Serialize)]
struct TransfersParams {
    #[serde(rename = "fromBlock")]
    from_block: String,
    #[serde(rename = "toBlock")]
    to_block: String,
    #[serde(rename = "fromAddress")]
    from_address: String,
    category: Vec<&'static str>,
    #[serde(rename = "maxCount")]
    max_count: String,
}

#[derive(Debug, Deserialize)]
struct TransfersResponse {
    result: Option<TransfersResult>,
    error: Option<RpcError>,
}

#[derive(Debug, Deserialize)]
struct TransfersResult {
    #[serde(default)]
    transfers: Vec<TransferRecord>,
}

#[derive(Debug, Deserialize)]
struct RpcError {
    code: i64,
    message: String,
}

/// Transfer categories counted as wallet activity
const TRANSFER_CATEGORIES: [&str; 5] = ["external", "internal", "erc20", "erc721", "erc1155"];

/// Alchemy transfer-history client
pub struct AlchemyClient {
    client: Client,
    api_key: String,
    max_transfers: u32,
}

impl AlchemyClient {
    pub fn new(api_key: String, max_transfers: u32, timeout_secs: u64) -> Result<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .build()
            .map_err(TrackerError::HttpError)?;

        Ok(AlchemyClient {
            client,
            api_key,
            max_transfers,
        })
    }

    fn endpoint(&self, network: &str) -> String {
        format!("https://{}.g.alchemy.com/v2/{}", network, self.api_key)
    }
}

#[async_trait]
impl TransferFetcher for AlchemyClient {
    async fn fetch_transfers(
        &self,
        address: &str,
        network: &str,
        from_block: &str,
        to_block: &str,
    ) -> Result<Vec<TransferRecord>> {
        let request = TransfersRequest {
            jsonrpc: "2.0",
            id: 1,
            method: "alchemy_getAssetTransfers",
            params: vec![TransfersParams {
                from_block: from_block.to_string(),
                to_block: to_block.to_string(),
                from_address: address.to_string(),
                category: TRANSFER_CATEGORIES.to_vec(),
                max_count: format!("{:#x}", self.max_transfers),
            }],
        };

        debug!("Fetching transfers for {} on {}", address, network);

        let response = self
            .client
            .post(self.endpoint(network))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            warn!("Transfer fetch failed with HTTP {} on {}", status, network);
            return Err(TrackerError::UpstreamApiError {
                code: status.as_u16().to_string(),
                message: format!("Non-success response from {}", network),
            });
        }

        let body: TransfersResponse = response.json().await?;

        if let Some(rpc_error) = body.error {
            return Err(TrackerError::UpstreamApiError {
                code: rpc_error.code.to_string(),
                message: rpc_error.message,
            });
        }

        let transfers = body
            .result
            .ok_or_else(|| TrackerError::MissingData("Empty RPC result".to_string()))?
            .transfers;

        debug!("Retrieved {} transfers for {}", transfers.len(), address);
        Ok(transfers)
    }
}
