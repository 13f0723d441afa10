pub mod config;
pub mod constants;
pub mod contract;
pub mod helper;
pub mod log_filter;
pub mod registry;
pub mod utils;

#[cfg(test)]
pub(crate) mod fixtures;

pub use config::HelperConfig;
pub use contract::AbiValue;
pub use helper::Eip1559TxHelper;
pub use log_filter::LogFilterQuery;
pub use registry::HelperRegistry;
pub use utils::{
    error::{ExternalError, HelperError, HelperResult},
    evm_rpc::{AlloyRpc, EthRpc, SharedRpc},
    gas::FeeEstimates,
};
