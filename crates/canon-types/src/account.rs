//! Per-address ledger entry

use std::collections::HashMap;

use bytes::Bytes;
use canon_primitives::{Nonce, H256, U256};

/// State associated with one address.
///
/// An account with zero nonce, zero balance, no code and no storage is
/// *empty*; the world state treats its presence and its absence as the same
/// thing and never persists it.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Account {
    /// Number of transactions sent from this address
    pub nonce: Nonce,
    /// Balance in the native currency's smallest unit
    pub balance: U256,
    /// Contract bytecode (empty for externally owned accounts)
    pub code: Bytes,
    /// Contract storage (32-byte slot key to 256-bit word)
    pub storage: HashMap<H256, U256>,
}

impl Account {
    /// The canonical empty account.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Whether this account equals the canonical empty account.
    pub fn is_empty(&self) -> bool {
        self.nonce == 0
            && self.balance.is_zero()
            && self.code.is_empty()
            && self.storage.is_empty()
    }
}
