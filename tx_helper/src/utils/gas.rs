//! Makes gas estimations and is used to submit a transaction through the TransactionBuilder
//!
//! Fee math follows https://www.blocknative.com/blog/eip-1559-fees:
//! `max_fee_per_gas = 2 * base_fee + max_priority_fee_per_gas`

use alloy_primitives::{Address, Bytes, U256};

use crate::constants::BASE_FEE_MULTIPLIER;

use super::common::call_request;
use super::error::HelperResult;
use super::evm_rpc::EthRpc;

/// Priced EIP-1559 fee envelope. Built fresh for every transaction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FeeEstimates {
    /// a.k.a. `maxFeePerGas`
    pub max_fee_per_gas: u128,
    /// a.k.a. `maxPriorityFeePerGas`, the tip
    pub max_priority_fee_per_gas: u128,
    pub gas_limit: u64,
}

impl FeeEstimates {
    /// Zero-valued envelope handed out in emulation mode
    pub fn zero() -> Self {
        Self::default()
    }
}

/// `2 * base_fee + tip`. Never substitute the raw base fee here.
pub fn max_fee_per_gas(base_fee: u128, tip: u128) -> u128 {
    base_fee
        .saturating_mul(BASE_FEE_MULTIPLIER)
        .saturating_add(tip)
}

/// Fetches the latest base fee and the gas limit of the call, and prices the envelope.
/// Any RPC failure aborts the estimation; no partial envelope is returned.
pub async fn estimate_transaction_fees(
    rpc: &dyn EthRpc,
    tip: u128,
    from: Address,
    to: Option<Address>,
    value: U256,
    data: Bytes,
) -> HelperResult<FeeEstimates> {
    let base_fee = rpc.base_fee().await?;
    let max_fee_per_gas = max_fee_per_gas(base_fee, tip);

    let gas_limit = rpc
        .estimate_gas(call_request(Some(from), to, value, data))
        .await?;

    log::debug!(
        "priced tx from {}: base fee {}, tip {}, max fee {}, gas limit {}",
        from,
        base_fee,
        tip,
        max_fee_per_gas,
        gas_limit
    );

    Ok(FeeEstimates {
        max_fee_per_gas,
        max_priority_fee_per_gas: tip,
        gas_limit,
    })
}
