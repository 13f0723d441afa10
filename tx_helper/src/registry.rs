//! Cache of helper instances, keyed by endpoint.
//!
//! The registry is owned by the application and handed to whoever needs a helper.
//! Entries live as long as the registry; there is no eviction.

use std::{
    collections::HashMap,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

use crate::{
    config::HelperConfig,
    helper::Eip1559TxHelper,
    utils::{
        error::HelperResult,
        evm_rpc::{AlloyRpc, SharedRpc},
    },
};

#[derive(Default)]
pub struct HelperRegistry {
    helpers: Mutex<HashMap<String, Arc<Eip1559TxHelper>>>,
}

impl HelperRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    // A panic while holding the lock can not leave the map half-written.
    fn helpers(&self) -> MutexGuard<'_, HashMap<String, Arc<Eip1559TxHelper>>> {
        self.helpers.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn get(&self, endpoint: &str) -> Option<Arc<Eip1559TxHelper>> {
        self.helpers().get(endpoint).cloned()
    }

    /// Inserts `helper` unless its endpoint is already taken.
    /// Returns the instance kept in the registry: the first registration wins.
    pub fn register(&self, helper: Arc<Eip1559TxHelper>) -> Arc<Eip1559TxHelper> {
        self.helpers()
            .entry(helper.rpc_url().to_string())
            .or_insert(helper)
            .clone()
    }

    /// Returns the helper of `config.endpoint`, dialing the endpoint on first use.
    pub fn get_or_create(&self, config: &HelperConfig) -> HelperResult<Arc<Eip1559TxHelper>> {
        self.get_or_create_with(config, |endpoint| {
            Ok(Arc::new(AlloyRpc::connect(endpoint)?) as SharedRpc)
        })
    }

    /// Same as [`HelperRegistry::get_or_create`] with a caller supplied client factory.
    ///
    /// The lock is held while the helper is created, so `connect` runs at most once per
    /// endpoint. Later configurations for a known endpoint are ignored.
    pub fn get_or_create_with<F>(
        &self,
        config: &HelperConfig,
        connect: F,
    ) -> HelperResult<Arc<Eip1559TxHelper>>
    where
        F: FnOnce(&str) -> HelperResult<SharedRpc>,
    {
        let mut helpers = self.helpers();
        if let Some(helper) = helpers.get(&config.endpoint) {
            return Ok(helper.clone());
        }

        let helper = Arc::new(Eip1559TxHelper::with_rpc(
            config,
            connect(&config.endpoint)?,
        )?);
        log::info!(
            "created tx helper for {} (tip {} wei, emulation {})",
            config.endpoint,
            helper.gas_tip_cap(),
            helper.is_emulation()
        );
        helpers.insert(config.endpoint.clone(), helper.clone());

        Ok(helper)
    }

    pub fn len(&self) -> usize {
        self.helpers().len()
    }

    pub fn is_empty(&self) -> bool {
        self.helpers().is_empty()
    }
}
