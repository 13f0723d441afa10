//! Helper configuration, read once at creation time

use std::time::Duration;

use alloy::rpc::types::TransactionReceipt;
use serde::Deserialize;

use crate::{
    constants::{DEFAULT_GAS_TIP_CAP, DEFAULT_POLL_INTERVAL_MILLIS, DEFAULT_RECEIPT_TIMEOUT_SECS},
    utils::error::{HelperError, HelperResult},
};

/// Settings of one helper instance.
/// Only the first configuration registered for an endpoint is ever used.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct HelperConfig {
    /// JSON-RPC endpoint, also the registry key
    pub endpoint: String,
    /// Tip (max priority fee per gas) in wei. `<= 0` falls back to [`DEFAULT_GAS_TIP_CAP`],
    /// which is too high for L2s.
    pub gas_tip_cap: i64,
    /// Skip pricing and sending, hand out `receipt_mock` instead
    pub emulation: bool,
    /// Receipt returned by every send when `emulation` is on
    pub receipt_mock: Option<TransactionReceipt>,
    /// How long to wait for a transaction to be mined, in seconds
    pub receipt_timeout_secs: u64,
    /// Delay between two receipt polls, in milliseconds
    pub poll_interval_millis: u64,
}

impl Default for HelperConfig {
    fn default() -> Self {
        Self {
            endpoint: String::new(),
            gas_tip_cap: 0,
            emulation: false,
            receipt_mock: None,
            receipt_timeout_secs: DEFAULT_RECEIPT_TIMEOUT_SECS,
            poll_interval_millis: DEFAULT_POLL_INTERVAL_MILLIS,
        }
    }
}

impl HelperConfig {
    pub fn new<S: Into<String>>(endpoint: S) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..Default::default()
        }
    }

    /// Loads the configuration from JSON. Missing fields take their default value.
    pub fn from_json_str(json: &str) -> HelperResult<Self> {
        serde_json::from_str(json)
            .map_err(|err| HelperError::Config(format!("could not decode helper config: {}", err)))
    }

    /// Sets the endpoint.
    pub fn endpoint<S: Into<String>>(&mut self, endpoint: S) -> &mut Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Sets the tip, `<= 0` means the default one.
    pub fn gas_tip_cap(&mut self, gas_tip_cap: i64) -> &mut Self {
        self.gas_tip_cap = gas_tip_cap;
        self
    }

    /// Turns emulation on with the receipt every send will return.
    pub fn emulate(&mut self, receipt_mock: TransactionReceipt) -> &mut Self {
        self.emulation = true;
        self.receipt_mock = Some(receipt_mock);
        self
    }

    /// Sets the receipt wait timeout, in seconds.
    pub fn receipt_timeout_secs(&mut self, receipt_timeout_secs: u64) -> &mut Self {
        self.receipt_timeout_secs = receipt_timeout_secs;
        self
    }

    /// Sets the delay between receipt polls, in milliseconds.
    pub fn poll_interval_millis(&mut self, poll_interval_millis: u64) -> &mut Self {
        self.poll_interval_millis = poll_interval_millis;
        self
    }

    /// The tip actually offered to the block producer
    pub fn effective_gas_tip_cap(&self) -> u128 {
        if self.gas_tip_cap <= 0 {
            DEFAULT_GAS_TIP_CAP
        } else {
            self.gas_tip_cap as u128
        }
    }

    pub fn receipt_timeout(&self) -> Duration {
        Duration::from_secs(self.receipt_timeout_secs)
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_millis)
    }

    /// The receipt to emulate with, `None` when emulation is off.
    /// Emulation without a receipt is rejected.
    pub fn emulated_receipt(&self) -> HelperResult<Option<TransactionReceipt>> {
        match (self.emulation, &self.receipt_mock) {
            (false, _) => Ok(None),
            (true, Some(receipt)) => Ok(Some(receipt.clone())),
            (true, None) => Err(HelperError::Config(
                "emulation is enabled but no receipt mock was given".to_string(),
            )),
        }
    }
}
