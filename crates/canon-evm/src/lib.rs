//! # canon-evm
//!
//! Deterministic execution core: the bounded operand stack, the gas meter,
//! per-frame execution context and the precompiled contracts.
//!
//! Everything in this crate is a pure function of its inputs. Running the
//! same message twice yields the same output, the same gas consumption and
//! the same error, which is what lets every node agree on the result.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod context;
pub mod error;
pub mod gas;
pub mod precompiles;
pub mod stack;

pub use context::{Evm, Message};
pub use error::{EvmError, EvmResult};
pub use gas::subtract_gas;
pub use stack::{Stack, MAX_STACK_SIZE};
