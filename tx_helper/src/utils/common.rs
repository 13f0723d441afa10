//! Common utility and helper functions that are used across the project

use std::str::FromStr;

use alloy::{
    rpc::types::{TransactionInput, TransactionRequest},
    signers::local::PrivateKeySigner,
};
use alloy_primitives::{Address, Bytes, TxKind, U256};

use super::error::{HelperError, HelperResult};

/// Parses a hex encoded secp256k1 private key, with or without the `0x` prefix.
pub fn signer_from_private_key(private_key: &str) -> HelperResult<PrivateKeySigner> {
    PrivateKeySigner::from_str(private_key.trim())
        .map_err(|err| HelperError::KeyDerivation(format!("invalid private key: {}", err)))
}

/// Returns the address derived from the public component of the key.
pub fn public_address_from_private_key(signer: &PrivateKeySigner) -> Address {
    signer.address()
}

/// A missing recipient means contract creation.
pub fn tx_kind(to: Option<Address>) -> TxKind {
    match to {
        Some(address) => TxKind::Call(address),
        None => TxKind::Create,
    }
}

/// Request used for `eth_estimateGas` and `eth_call`
pub fn call_request(
    from: Option<Address>,
    to: Option<Address>,
    value: U256,
    data: Bytes,
) -> TransactionRequest {
    TransactionRequest {
        from,
        to: Some(tx_kind(to)),
        value: Some(value),
        input: TransactionInput::new(data),
        ..Default::default()
    }
}
