//! Transaction builder (and sender) that talks to the JSON-RPC endpoint

use std::time::Duration;

use alloy::{consensus::TxEip1559, rpc::types::TransactionReceipt, signers::local::PrivateKeySigner};
use alloy_primitives::{Address, Bytes, U256};

use crate::constants::{DEFAULT_POLL_INTERVAL_MILLIS, DEFAULT_RECEIPT_TIMEOUT_SECS};

use super::{
    common::{public_address_from_private_key, tx_kind},
    error::HelperResult,
    evm_rpc::{wait_mined, EthRpc},
    gas::FeeEstimates,
    signer::sign_eip1559_transaction,
};

/// Transaction builder struct
///
/// The nonce is not a field on purpose: it is fetched as the pending transaction count
/// right before signing, on every `send`. Two concurrent sends from the same key can pick
/// the same nonce, and the network then rejects one of them.
pub struct TransactionBuilder {
    to: Option<Address>,
    data: Bytes,
    value: U256,
    chain_id: u64,
    fees: FeeEstimates,
    receipt_timeout: Duration,
    poll_interval: Duration,
}

impl Default for TransactionBuilder {
    fn default() -> Self {
        Self {
            to: None,
            data: Bytes::new(),
            value: U256::ZERO,
            chain_id: 1,
            fees: FeeEstimates::default(),
            receipt_timeout: Duration::from_secs(DEFAULT_RECEIPT_TIMEOUT_SECS),
            poll_interval: Duration::from_millis(DEFAULT_POLL_INTERVAL_MILLIS),
        }
    }
}

impl TransactionBuilder {
    /// Sets the `to` field. `None` deploys a contract.
    pub fn to(mut self, to: Option<Address>) -> Self {
        self.to = to;
        self
    }

    /// Sets the `data` field
    pub fn data(mut self, data: Bytes) -> Self {
        self.data = data;
        self
    }

    /// Sets the `value` field
    pub fn value(mut self, value: U256) -> Self {
        self.value = value;
        self
    }

    /// Sets the `chain_id` field
    pub fn chain_id(mut self, chain_id: u64) -> Self {
        self.chain_id = chain_id;
        self
    }

    /// Sets the fee envelope
    pub fn fees(mut self, fees: FeeEstimates) -> Self {
        self.fees = fees;
        self
    }

    /// Sets how long to wait for the transaction to be mined
    pub fn receipt_timeout(mut self, receipt_timeout: Duration) -> Self {
        self.receipt_timeout = receipt_timeout;
        self
    }

    /// Sets the delay between two receipt polls
    pub fn poll_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = poll_interval;
        self
    }

    fn build(&self, nonce: u64) -> TxEip1559 {
        TxEip1559 {
            chain_id: self.chain_id,
            nonce,
            gas_limit: self.fees.gas_limit,
            max_fee_per_gas: self.fees.max_fee_per_gas,
            max_priority_fee_per_gas: self.fees.max_priority_fee_per_gas,
            to: tx_kind(self.to),
            value: self.value,
            access_list: Default::default(),
            input: self.data.clone(),
        }
    }

    /// Builds the TransactionBuilder into a signed transaction, sends it and waits for the receipt.
    ///
    /// A reverted transaction is returned as a receipt with a failed status, not as an error.
    /// Nothing is retried: "replacement transaction underpriced" and friends are surfaced as
    /// external errors and the retry policy belongs to the caller.
    pub async fn send(
        self,
        rpc: &dyn EthRpc,
        signer: &PrivateKeySigner,
    ) -> HelperResult<TransactionReceipt> {
        let from = public_address_from_private_key(signer);
        let nonce = rpc.pending_nonce_at(from).await?;

        let signed_transaction = sign_eip1559_transaction(self.build(nonce), signer)?;
        let tx_hash = rpc.send_raw_transaction(&signed_transaction.raw).await?;
        log::debug!("sent tx {} from {} with nonce {}", tx_hash, from, nonce);

        wait_mined(rpc, tx_hash, self.receipt_timeout, self.poll_interval).await
    }
}
