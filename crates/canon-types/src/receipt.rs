//! Transaction receipt and log types for CanonLedger

use bytes::Bytes;
use canon_primitives::{Address, Gas, H256};

use crate::block::{Bloom, Root};

/// Data record produced during the execution of a transaction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Log {
    /// Address that emitted the log
    pub address: Address,
    /// Log topics (indexed parameters)
    pub topics: Vec<H256>,
    /// Log data (non-indexed parameters)
    pub data: Bytes,
}

impl Log {
    /// Create a new log entry
    pub fn new(address: Address, topics: Vec<H256>, data: Bytes) -> Self {
        Self {
            address,
            topics,
            data,
        }
    }

    /// First topic, usually the event signature
    pub fn topic0(&self) -> Option<&H256> {
        self.topics.first()
    }
}

/// Result of a transaction, as committed to the receipts trie.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Receipt {
    /// State root after this transaction
    pub post_state: Root,
    /// Cumulative gas used in the block up to and including this transaction
    pub cumulative_gas_used: Gas,
    /// Bloom filter for the logs
    pub bloom: Bloom,
    /// Logs emitted by this transaction
    pub logs: Vec<Log>,
}
