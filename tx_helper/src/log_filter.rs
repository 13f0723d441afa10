//! Filtering of the logs emitted by one transaction.
//!
//! ```plain
//! query.topics:   [ {sig} , {}  , {T1, T2} ]        (no pattern at 3)
//! log.topics:     [ sig   , X   , T2       , Y ]
//!                   match   any   match      any  => kept
//! ```
//!
//! Block range and block hash are not part of the query: the logs are known to belong to
//! one specific transaction, and the filter never iterates over blocks.

use alloy::rpc::types::{Filter, Log, TransactionReceipt};
use alloy_primitives::{Address, B256};

use crate::utils::error::{HelperError, HelperResult};

/// A log carries at most this many topics
pub const MAX_TOPICS: usize = 4;

/// Address whitelist and positional topic patterns.
///
/// An empty whitelist matches any address. Each entry of `topics` is the set of values
/// accepted at that position; an empty set matches any value, and positions past the end
/// of `topics` are unconstrained.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LogFilterQuery {
    pub addresses: Vec<Address>,
    pub topics: Vec<Vec<B256>>,
}

impl LogFilterQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an emitting contract to the whitelist
    pub fn address(mut self, address: Address) -> Self {
        self.addresses.push(address);
        self
    }

    /// Adds the values accepted at topic `position`.
    /// Positions before it that were never set are left as "match any".
    ///
    /// No log has a topic at `position >= MAX_TOPICS`, so such a pattern can never reject
    /// anything and is ignored.
    pub fn topic<I>(mut self, position: usize, values: I) -> Self
    where
        I: IntoIterator<Item = B256>,
    {
        if position >= MAX_TOPICS {
            return self;
        }
        if self.topics.len() <= position {
            self.topics.resize_with(position + 1, Vec::new);
        }
        self.topics[position].extend(values);
        self
    }

    /// Accepts events whose signature hash (topic 0) is one of `signatures`
    pub fn event_signature<I>(self, signatures: I) -> Self
    where
        I: IntoIterator<Item = B256>,
    {
        self.topic(0, signatures)
    }

    /// Address and topics are compared as raw bytes, which is the same as comparing
    /// their canonical hex forms case-insensitively.
    pub fn matches(&self, log: &Log) -> bool {
        if !self.addresses.is_empty() && !self.addresses.contains(&log.address()) {
            return false;
        }

        for (position, topic) in log.topics().iter().enumerate() {
            let Some(accepted) = self.topics.get(position) else {
                // no pattern for this and the next topics
                break;
            };

            if !accepted.is_empty() && !accepted.contains(topic) {
                return false;
            }
        }

        true
    }

    /// Keeps the matching logs, in their original order
    pub fn apply<'a, I>(&self, logs: I) -> Vec<Log>
    where
        I: IntoIterator<Item = &'a Log>,
    {
        logs.into_iter()
            .filter(|log| self.matches(log))
            .cloned()
            .collect()
    }
}

/// Block range and block hash of the filter are dropped.
impl From<&Filter> for LogFilterQuery {
    fn from(filter: &Filter) -> Self {
        let addresses = filter.address.iter().copied().collect();

        let mut topics: Vec<Vec<B256>> = filter
            .topics
            .iter()
            .map(|set| set.iter().copied().collect())
            .collect();
        while topics.last().is_some_and(|set| set.is_empty()) {
            topics.pop();
        }

        Self { addresses, topics }
    }
}

/// Filters either the logs of `receipt` or the raw `logs`, never both.
///
/// Supplying both is a misuse and returns [`HelperError::AmbiguousInput`] instead of
/// silently preferring one of them. Supplying neither returns [`HelperError::NoInput`].
pub fn filter_transaction_logs(
    receipt: Option<&TransactionReceipt>,
    logs: Option<&[Log]>,
    query: &LogFilterQuery,
) -> HelperResult<Vec<Log>> {
    let logs_in = match (receipt, logs) {
        (Some(_), Some(_)) => return Err(HelperError::AmbiguousInput),
        (None, None) => return Err(HelperError::NoInput),
        (Some(receipt), None) => receipt.inner.logs(),
        (None, Some(logs)) => logs,
    };

    Ok(query.apply(logs_in))
}
