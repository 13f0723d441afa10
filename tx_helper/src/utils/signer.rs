//! Local signing of EIP-1559 transactions. No network round-trip happens here.

use alloy::{
    consensus::{SignableTransaction, Signed, TxEip1559, TxEnvelope},
    eips::eip2718::Encodable2718,
    network::TxSignerSync,
    signers::{local::PrivateKeySigner, Signer},
};
use alloy_primitives::Bytes;

use super::error::{HelperError, HelperResult};

/// A signed transaction ready for `eth_sendRawTransaction`
#[derive(Clone, Debug)]
pub struct SignedTransaction {
    pub signed: Signed<TxEip1559>,
    /// EIP-2718 encoding (`0x02 || rlp(...)`)
    pub raw: Bytes,
}

/// Signs `request` with a signer scoped to the transaction's chain id.
pub fn sign_eip1559_transaction(
    mut request: TxEip1559,
    signer: &PrivateKeySigner,
) -> HelperResult<SignedTransaction> {
    let signer = signer.clone().with_chain_id(Some(request.chain_id));

    let signature = signer
        .sign_transaction_sync(&mut request)
        .map_err(|err| HelperError::Signing(err.to_string()))?;

    let signed = request.into_signed(signature);
    let raw = Bytes::from(TxEnvelope::from(signed.clone()).encoded_2718());

    Ok(SignedTransaction { signed, raw })
}
