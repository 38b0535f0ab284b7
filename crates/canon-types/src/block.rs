//! Block and header types for CanonLedger

use bytes::Bytes;
use canon_primitives::{Address, BlockHeight, Gas, H256, H64, U256};

use crate::transaction::Transaction;

/// Trie root digest; the trie layer owns the encoding.
pub type Root = Bytes;

/// Logs bloom filter.
pub type Bloom = H256;

/// Header portion of a block on the chain.
///
/// A plain record produced and validated outside the execution core; only
/// `coinbase` feeds execution (as the beneficiary address).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Header {
    /// Parent block hash
    pub parent_hash: H256,
    /// Ommers list hash
    pub ommers_hash: H256,
    /// Beneficiary address
    pub coinbase: Address,
    /// State root after executing the block
    pub state_root: Root,
    /// Transactions trie root
    pub transactions_root: Root,
    /// Receipts trie root
    pub receipt_root: Root,
    /// Logs bloom filter
    pub bloom: Bloom,
    /// Proof-of-work difficulty
    pub difficulty: U256,
    /// Block number (height)
    pub number: BlockHeight,
    /// Gas limit for the block
    pub gas_limit: Gas,
    /// Gas used by all transactions
    pub gas_used: Gas,
    /// Block timestamp (Unix seconds)
    pub timestamp: u64,
    /// Extra data
    pub extra_data: Bytes,
    /// Proof-of-work mix digest
    pub mix_digest: H256,
    /// Proof-of-work nonce
    pub nonce: H64,
}

/// A complete block.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Block {
    /// Block header
    pub header: Header,
    /// List of transactions
    pub transactions: Vec<Transaction>,
    /// Ommer (uncle) headers
    pub ommers: Vec<Header>,
}
