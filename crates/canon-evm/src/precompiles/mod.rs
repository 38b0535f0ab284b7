//! Precompiled contracts
//!
//! Native operations reachable through calls to reserved low addresses.
//! Each precompile runs against the frame in [`Evm`], charging its own
//! gas and writing its own output.

pub mod modexp;

use canon_primitives::Address;

use crate::context::Evm;
use crate::error::EvmResult;

/// Entry point shared by every precompiled contract
pub type PrecompileFn = fn(&mut Evm) -> EvmResult<()>;

/// Address of the modular exponentiation precompile
pub const MODEXP_ADDRESS: Address = Address::from_low_u64(5);

/// Resolve `address` to the precompiled contract registered there, if any
pub fn lookup(address: &Address) -> Option<PrecompileFn> {
    if *address == MODEXP_ADDRESS {
        Some(modexp::modexp)
    } else {
        None
    }
}
