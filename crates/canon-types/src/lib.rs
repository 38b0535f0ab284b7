//! # canon-types
//!
//! Core chain types for CanonLedger.
//!
//! This crate provides:
//! - [`Account`](account::Account) - Per-address ledger entry
//! - [`State`](state::State) - The world state and its mutation protocol
//! - [`Transaction`](transaction::Transaction) - Atomic chain operation
//! - [`Block`](block::Block) / [`Receipt`](receipt::Receipt) - Chain data shapes

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod account;
pub mod block;
pub mod receipt;
pub mod state;
pub mod transaction;

// Re-export commonly used types
pub use account::Account;
pub use block::{Block, Bloom, Header, Root};
pub use receipt::{Log, Receipt};
pub use state::State;
pub use transaction::Transaction;
