//! Utility and helper functions needed for:
//! - Transaction signing, gas estimation, and submission
//! - Interacting with the JSON-RPC endpoint
//! - Error handling
//! - Key and address parsing

pub mod common;
pub mod error;
pub mod evm_rpc;
pub mod gas;
pub mod signer;
pub mod transaction_builder;
