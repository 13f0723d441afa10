//! JSON-RPC client seam.
//!
//! `EthRpc` is the only door to the network. `AlloyRpc` talks to a real endpoint through
//! an alloy HTTP provider; tests plug a mock in its place.

use std::sync::Arc;
use std::time::Duration;

use alloy::{
    eips::{BlockId, BlockNumberOrTag},
    providers::{DynProvider, Provider, ProviderBuilder},
    rpc::types::{TransactionReceipt, TransactionRequest},
    transports::http::reqwest::Url,
};
use alloy_primitives::{Address, Bytes, TxHash};
use async_trait::async_trait;
use tokio::time::{sleep, timeout};

use super::error::{external_err, BoxError, ExternalError, HelperError, HelperResult};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EthRpc: Send + Sync {
    /// Base fee per gas of the latest block header.
    async fn base_fee(&self) -> HelperResult<u128>;

    /// Transaction count of `address`, pending transactions included.
    async fn pending_nonce_at(&self, address: Address) -> HelperResult<u64>;

    /// Simulates `request` against the current state and returns the gas it needs.
    async fn estimate_gas(&self, request: TransactionRequest) -> HelperResult<u64>;

    /// Submits a signed, EIP-2718 encoded transaction.
    async fn send_raw_transaction(&self, raw: &[u8]) -> HelperResult<TxHash>;

    /// Receipt of a mined transaction, `None` while it is still pending.
    async fn transaction_receipt(&self, tx_hash: TxHash) -> HelperResult<Option<TransactionReceipt>>;

    /// Read-only `eth_call` at the given block.
    async fn call(&self, request: TransactionRequest, block: BlockNumberOrTag) -> HelperResult<Bytes>;

    async fn latest_block_number(&self) -> HelperResult<u64>;
}

/// Shared handle to an RPC client
pub type SharedRpc = Arc<dyn EthRpc>;

/// `EthRpc` backed by an alloy HTTP provider
#[derive(Clone)]
pub struct AlloyRpc {
    provider: DynProvider,
}

impl AlloyRpc {
    /// Builds a provider for `endpoint`.
    /// Nothing is sent over the wire until the first request.
    pub fn connect(endpoint: &str) -> HelperResult<Self> {
        let url = Url::parse(endpoint).map_err(|err| {
            HelperError::Config(format!("invalid rpc endpoint \"{}\": {}", endpoint, err))
        })?;
        let provider = ProviderBuilder::new().connect_http(url);

        Ok(Self {
            provider: provider.erased(),
        })
    }
}

#[async_trait]
impl EthRpc for AlloyRpc {
    async fn base_fee(&self) -> HelperResult<u128> {
        let block = self
            .provider
            .get_block_by_number(BlockNumberOrTag::Latest)
            .await
            .map_err(|err| external_err(err, "failed to request last block header"))?
            .ok_or_else(|| {
                HelperError::from(ExternalError::new("latest block header is missing", None))
            })?;

        block
            .header
            .base_fee_per_gas
            .map(u128::from)
            .ok_or_else(|| {
                ExternalError::new("latest block header has no base fee (pre-London network?)", None)
                    .into()
            })
    }

    async fn pending_nonce_at(&self, address: Address) -> HelperResult<u64> {
        self.provider
            .get_transaction_count(address)
            .pending()
            .await
            .map_err(|err| external_err(err, "failed to get nonce"))
    }

    async fn estimate_gas(&self, request: TransactionRequest) -> HelperResult<u64> {
        self.provider
            .estimate_gas(request)
            .await
            .map_err(|err| external_err(err, "failed to estimate gas limit for given operation"))
    }

    async fn send_raw_transaction(&self, raw: &[u8]) -> HelperResult<TxHash> {
        // Possible errors:
        // 1. insufficient funds for gas * price + value
        // 2. replacement transaction underpriced
        let pending = self
            .provider
            .send_raw_transaction(raw)
            .await
            .map_err(|err| external_err(err, "failed to send transaction"))?;

        Ok(*pending.tx_hash())
    }

    async fn transaction_receipt(&self, tx_hash: TxHash) -> HelperResult<Option<TransactionReceipt>> {
        self.provider
            .get_transaction_receipt(tx_hash)
            .await
            .map_err(|err| external_err(err, format!("failed to get receipt of {}", tx_hash)))
    }

    async fn call(&self, request: TransactionRequest, block: BlockNumberOrTag) -> HelperResult<Bytes> {
        self.provider
            .call(request)
            .block(BlockId::Number(block))
            .await
            .map_err(|err| external_err(err, "failed to perform eth_call"))
    }

    async fn latest_block_number(&self) -> HelperResult<u64> {
        self.provider
            .get_block_number()
            .await
            .map_err(|err| external_err(err, "failed to get latest block number"))
    }
}

/// Polls for the receipt of `tx_hash` until it is mined or `wait` elapses.
///
/// A receipt with a failed status is still a receipt: callers must check `status()`.
pub async fn wait_mined(
    rpc: &dyn EthRpc,
    tx_hash: TxHash,
    wait: Duration,
    poll_interval: Duration,
) -> HelperResult<TransactionReceipt> {
    let polling = async {
        loop {
            if let Some(receipt) = rpc.transaction_receipt(tx_hash).await? {
                return Ok::<_, HelperError>(receipt);
            }
            sleep(poll_interval).await;
        }
    };

    match timeout(wait, polling).await {
        Ok(result) => result,
        Err(elapsed) => Err(ExternalError::timeout(
            "transaction probably has not been mined (timeout?)",
            Some(Box::new(elapsed) as BoxError),
        )
        .with_context(format!("tx hash {}", tx_hash))
        .into()),
    }
}
