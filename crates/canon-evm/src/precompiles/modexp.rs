//! Modular exponentiation precompiled contract
//!
//! Computes `(base ** exp) % modulus` for arbitrary-sized operands taken
//! from the call data. The output is exactly as long as the modulus.

use bytes::Bytes;
use num_bigint::BigUint;
use num_traits::{One, ToPrimitive, Zero};

use canon_primitives::padding::{left_pad_zero_bytes, read_right_padded};
use canon_primitives::U256;

use crate::context::Evm;
use crate::error::{EvmError, EvmResult};
use crate::gas::subtract_gas;

/// Divisor applied to the iteration count in the cost formula
pub const GQUADDIVISOR: u64 = 20;

/// Floor of the cost formula
pub const MODEXP_MIN_GAS: u64 = 200;

/// Run the precompile against the frame in `evm`
///
/// Gas is charged in two stages. A lower bound computed with the exponent
/// taken as zero is checked before any operand is read, so absurd claimed
/// lengths cannot force huge allocations on an underfunded call. The exact
/// data-dependent cost is charged once the operands are known.
pub fn modexp(evm: &mut Evm) -> EvmResult<()> {
    let data = evm.message.data.clone();

    let base_length = U256::from_big_endian(&read_right_padded(&data, 0, 32));
    let exp_length = U256::from_big_endian(&read_right_padded(&data, 32, 32));
    let modulus_length = U256::from_big_endian(&read_right_padded(&data, 64, 32));

    if base_length.is_zero() && modulus_length.is_zero() {
        evm.output = Bytes::new();
        return Ok(());
    }

    let lower_bound = gas_cost(base_length, modulus_length, exp_length, &BigUint::zero());
    if BigUint::from(evm.gas_left) < lower_bound {
        return Err(EvmError::OutOfGas);
    }

    // Claimed lengths beyond the low 64 bits can never be materialized;
    // their full value still participates in the cost formulas above.
    let base_len = base_length.low_u64() as usize;
    let exp_len = exp_length.low_u64() as usize;
    let modulus_len = modulus_length.low_u64() as usize;

    let mut pointer = 96usize;
    let base = BigUint::from_bytes_be(&read_right_padded(&data, pointer, base_len));
    pointer = pointer.saturating_add(base_len);
    let exp = BigUint::from_bytes_be(&read_right_padded(&data, pointer, exp_len));
    pointer = pointer.saturating_add(exp_len);
    let modulus = BigUint::from_bytes_be(&read_right_padded(&data, pointer, modulus_len));

    // A cost that does not fit in the gas counter cannot be paid
    let gas_used = gas_cost(base_length, modulus_length, exp_length, &exp)
        .to_u64()
        .ok_or(EvmError::OutOfGas)?;
    evm.gas_left = subtract_gas(evm.gas_left, gas_used)?;
    tracing::trace!("modexp charged {} gas", gas_used);

    evm.output = if modulus.is_zero() {
        Bytes::from(vec![0u8; modulus_len])
    } else {
        let result = base.modpow(&exp, &modulus);
        Bytes::from(left_pad_zero_bytes(&result.to_bytes_be(), modulus_len))
    };

    Ok(())
}

/// Word-level cost of one modular multiplication:
/// `ceil(max(base_length, modulus_length) / 8) ** 2`
fn complexity(base_length: U256, modulus_length: U256) -> BigUint {
    let max_length = big(base_length.max(modulus_length));
    let words = (max_length + 7u32) / 8u32;
    &words * &words
}

/// Number of squaring rounds the exponent is worth, never less than one
///
/// Exponents longer than 32 bytes contribute 8 rounds per extra byte plus
/// the bit length of their low 256 bits.
fn iterations(exponent_length: U256, exponent: &BigUint) -> BigUint {
    let count = if exponent_length <= U256::from(32u64) && exponent.is_zero() {
        BigUint::zero()
    } else if exponent_length <= U256::from(32u64) {
        BigUint::from(exponent.bits() - 1)
    } else {
        let length_part = (big(exponent_length) - 32u32) * 8u32;
        let mask = (BigUint::one() << 256u32) - 1u32;
        let bits_part = (exponent & &mask).bits();
        // length_part is at least 8 here, so the subtraction cannot wrap
        length_part + bits_part - 1u32
    };

    count.max(BigUint::one())
}

/// Total charge for one call: `max(200, complexity * (iterations / 20))`
fn gas_cost(
    base_length: U256,
    modulus_length: U256,
    exponent_length: U256,
    exponent: &BigUint,
) -> BigUint {
    let multiplication_complexity = complexity(base_length, modulus_length);
    let iteration_count = iterations(exponent_length, exponent);
    let cost = multiplication_complexity * (iteration_count / GQUADDIVISOR);
    cost.max(BigUint::from(MODEXP_MIN_GAS))
}

/// Widen a 256-bit word into an unbounded integer
fn big(value: U256) -> BigUint {
    let mut bytes = [0u8; 32];
    value.to_big_endian(&mut bytes);
    BigUint::from_bytes_be(&bytes)
}
