//! EIP-1559 transaction helper bound to a single JSON-RPC endpoint.

use std::sync::Arc;
use std::time::Duration;

use alloy::{
    dyn_abi::DynSolValue,
    eips::BlockNumberOrTag,
    json_abi::JsonAbi,
    rpc::types::{Log, TransactionReceipt},
    signers::local::PrivateKeySigner,
};
use alloy_primitives::{Address, Bytes, U256};

use crate::{
    config::HelperConfig,
    contract::{self, AbiValue},
    log_filter::{filter_transaction_logs, LogFilterQuery},
    utils::{
        common,
        error::HelperResult,
        evm_rpc::{AlloyRpc, SharedRpc},
        gas::{estimate_transaction_fees, FeeEstimates},
        transaction_builder::TransactionBuilder,
    },
};

/// Prices, signs and submits EIP-1559 transactions against one endpoint.
///
/// The configuration is frozen at creation. Instances are meant to be shared through
/// [`crate::registry::HelperRegistry`], one per endpoint.
pub struct Eip1559TxHelper {
    endpoint: String,
    rpc: SharedRpc,
    gas_tip_cap: u128,
    /// Receipt handed out instead of sending, when emulating
    emulation: Option<TransactionReceipt>,
    receipt_timeout: Duration,
    poll_interval: Duration,
}

impl Eip1559TxHelper {
    /// Creates a helper talking to `config.endpoint` over HTTP.
    pub fn connect(config: &HelperConfig) -> HelperResult<Self> {
        let rpc = AlloyRpc::connect(&config.endpoint)?;
        Self::with_rpc(config, Arc::new(rpc))
    }

    /// Creates a helper on top of an existing client.
    pub fn with_rpc(config: &HelperConfig, rpc: SharedRpc) -> HelperResult<Self> {
        Ok(Self {
            endpoint: config.endpoint.clone(),
            rpc,
            gas_tip_cap: config.effective_gas_tip_cap(),
            emulation: config.emulated_receipt()?,
            receipt_timeout: config.receipt_timeout(),
            poll_interval: config.poll_interval(),
        })
    }

    /// Prices a transaction: `max_fee_per_gas = 2 * base_fee + tip`, tip from the config,
    /// gas limit from `eth_estimateGas`.
    ///
    /// Emulation returns a zero envelope without touching the network.
    pub async fn gas_parameters(
        &self,
        from: Address,
        to: Option<Address>,
        value: U256,
        data: Bytes,
    ) -> HelperResult<FeeEstimates> {
        if self.emulation.is_some() {
            return Ok(FeeEstimates::zero());
        }

        estimate_transaction_fees(self.rpc.as_ref(), self.gas_tip_cap, from, to, value, data).await
    }

    /// Signs and submits a transaction, then waits until it is mined.
    ///
    /// `to = None` deploys a contract. A mined but reverted transaction is returned as
    /// a receipt with a failed status. Emulation returns the configured receipt.
    pub async fn send_transaction(
        &self,
        signer: &PrivateKeySigner,
        to: Option<Address>,
        chain_id: u64,
        fees: FeeEstimates,
        value: U256,
        data: Bytes,
    ) -> HelperResult<TransactionReceipt> {
        if let Some(receipt) = &self.emulation {
            log::debug!("emulated send to {:?} on {}", to, self.endpoint);
            return Ok(receipt.clone());
        }

        TransactionBuilder::default()
            .to(to)
            .chain_id(chain_id)
            .fees(fees)
            .value(value)
            .data(data)
            .receipt_timeout(self.receipt_timeout)
            .poll_interval(self.poll_interval)
            .send(self.rpc.as_ref(), signer)
            .await
    }

    /// Keeps the logs of either `receipt` or `logs` that match `query`, in their original order.
    pub fn filter_transaction_log(
        &self,
        receipt: Option<&TransactionReceipt>,
        logs: Option<&[Log]>,
        query: &LogFilterQuery,
    ) -> HelperResult<Vec<Log>> {
        filter_transaction_logs(receipt, logs, query)
    }

    /// Base fee per gas of the latest block.
    pub async fn base_fee(&self) -> HelperResult<u128> {
        self.rpc.base_fee().await
    }

    pub async fn latest_block_number(&self) -> HelperResult<u64> {
        self.rpc.latest_block_number().await
    }

    pub async fn contract_function_call(
        &self,
        address: Address,
        abi: &JsonAbi,
        block: BlockNumberOrTag,
        method: &str,
        args: Vec<AbiValue>,
    ) -> HelperResult<Vec<DynSolValue>> {
        contract::contract_function_call(self.rpc.as_ref(), address, abi, block, method, args).await
    }

    pub async fn contract_function_call_no_arguments(
        &self,
        address: Address,
        abi: &JsonAbi,
        block: BlockNumberOrTag,
        method: &str,
    ) -> HelperResult<Vec<DynSolValue>> {
        contract::contract_function_call_no_arguments(self.rpc.as_ref(), address, abi, block, method)
            .await
    }

    pub fn public_address_from_private_key(&self, signer: &PrivateKeySigner) -> Address {
        common::public_address_from_private_key(signer)
    }

    pub fn rpc(&self) -> &SharedRpc {
        &self.rpc
    }

    pub fn rpc_url(&self) -> &str {
        &self.endpoint
    }

    /// The tip in use, after the default fallback.
    pub fn gas_tip_cap(&self) -> u128 {
        self.gas_tip_cap
    }

    pub fn is_emulation(&self) -> bool {
        self.emulation.is_some()
    }
}
