//! Transaction type for CanonLedger

use bytes::Bytes;
use canon_primitives::{Address, Gas, Nonce, U256};

/// Base gas charged by every transaction
pub const TX_BASE_COST: Gas = 21_000;

/// Gas charged per non-zero byte of transaction data
pub const TX_DATA_COST_PER_NON_ZERO: Gas = 68;

/// Gas charged per zero byte of transaction data
pub const TX_DATA_COST_PER_ZERO: Gas = 4;

/// Atomic operation performed on the chain.
///
/// A plain record: validation, signature recovery and execution belong to
/// other layers. `data`, `gas` and `value` seed the execution message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transaction {
    /// Sender nonce
    pub nonce: Nonce,
    /// Gas price in the smallest currency unit
    pub gas_price: U256,
    /// Gas limit
    pub gas: Gas,
    /// Recipient address (None for contract creation)
    pub to: Option<Address>,
    /// Value to transfer
    pub value: U256,
    /// Input data
    pub data: Bytes,
    /// Signature recovery ID
    pub v: u64,
    /// Signature R component
    pub r: U256,
    /// Signature S component
    pub s: U256,
}

impl Transaction {
    /// Whether this transaction creates a contract.
    pub fn is_create(&self) -> bool {
        self.to.is_none()
    }

    /// Gas charged before execution starts: the base cost plus a per-byte
    /// cost of the input data, zero bytes cheaper than non-zero ones.
    pub fn intrinsic_cost(&self) -> Gas {
        let data_cost: Gas = self
            .data
            .iter()
            .map(|&byte| {
                if byte == 0 {
                    TX_DATA_COST_PER_ZERO
                } else {
                    TX_DATA_COST_PER_NON_ZERO
                }
            })
            .sum();
        TX_BASE_COST + data_cost
    }
}
