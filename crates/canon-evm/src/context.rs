//! Execution context for one call frame

use bytes::Bytes;
use canon_primitives::{Address, Gas, U256};

/// Immutable inputs of one call
#[derive(Clone, Debug)]
pub struct Message {
    /// Caller address
    pub caller: Address,
    /// Callee address (contract or precompile)
    pub target: Address,
    /// Value transferred with the call, in wei
    pub value: U256,
    /// Call data
    pub data: Bytes,
    /// Gas budget for this frame
    pub gas: Gas,
}

impl Message {
    /// Create a new message
    pub fn new(caller: Address, target: Address, value: U256, data: Bytes, gas: Gas) -> Self {
        Self {
            caller,
            target,
            value,
            data,
            gas,
        }
    }
}

impl Default for Message {
    fn default() -> Self {
        Self {
            caller: Address::ZERO,
            target: Address::ZERO,
            value: U256::zero(),
            data: Bytes::new(),
            gas: 0,
        }
    }
}

/// Mutable state of one executing frame
///
/// Holds the message plus the two pieces that change while it runs: the
/// remaining gas, decreased only through the gas meter, and the output
/// buffer, written at most once when execution succeeds.
#[derive(Clone, Debug)]
pub struct Evm {
    /// Frame inputs
    pub message: Message,
    /// Remaining gas
    pub gas_left: Gas,
    /// Output returned by the frame
    pub output: Bytes,
}

impl Evm {
    /// Start a frame with the message's full gas budget
    pub fn new(message: Message) -> Self {
        let gas_left = message.gas;
        Self {
            message,
            gas_left,
            output: Bytes::new(),
        }
    }
}
