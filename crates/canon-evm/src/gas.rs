//! Gas accounting

use canon_primitives::Gas;

use crate::error::{EvmError, EvmResult};

/// Subtract `amount` from `gas_left`, failing when the budget cannot
/// cover it
///
/// Returns the remaining gas on success. The counter never goes
/// negative: an insufficient budget fails with [`EvmError::OutOfGas`]
/// and leaves `gas_left` untouched at the caller.
pub fn subtract_gas(gas_left: Gas, amount: Gas) -> EvmResult<Gas> {
    if amount > gas_left {
        return Err(EvmError::OutOfGas);
    }
    Ok(gas_left - amount)
}
