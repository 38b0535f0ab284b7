//! # canon-primitives
//!
//! Primitive types for the CanonLedger execution core.
//!
//! Fixed-width byte newtypes used as identifiers and hashes, the 256-bit
//! word type shared by every EVM-visible value, and the byte-padding
//! conventions for variable-length operands.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod address;
mod error;
mod hash;
pub mod padding;

pub use address::{Address, AddressError};
pub use error::PrimitiveError;
pub use hash::{HashError, H256, H512, H64};

// Re-export primitive-types for U256
pub use primitive_types::U256;

/// Block height type
pub type BlockHeight = u64;

/// Transaction nonce type
pub type Nonce = u64;

/// Gas type
pub type Gas = u64;
