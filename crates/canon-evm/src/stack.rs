//! Bounded operand stack

use canon_primitives::U256;

use crate::error::{EvmError, EvmResult};

/// Hard capacity of the operand stack, a consensus constant
pub const MAX_STACK_SIZE: usize = 1024;

/// Operand stack for one call frame (max 1024 items, 256-bit each)
#[derive(Clone, Debug)]
pub struct Stack {
    data: Vec<U256>,
}

impl Stack {
    /// Create a new empty stack
    pub fn new() -> Self {
        Self {
            data: Vec::with_capacity(MAX_STACK_SIZE),
        }
    }

    /// Push a value onto the stack
    ///
    /// Fails with [`EvmError::StackOverflow`] once the stack holds
    /// [`MAX_STACK_SIZE`] items; the stack is left unchanged.
    pub fn push(&mut self, value: U256) -> EvmResult<()> {
        if self.data.len() >= MAX_STACK_SIZE {
            return Err(EvmError::StackOverflow);
        }
        self.data.push(value);
        Ok(())
    }

    /// Pop the most recently pushed value
    ///
    /// Fails with [`EvmError::StackUnderflow`] on an empty stack; the
    /// stack is left unchanged.
    pub fn pop(&mut self) -> EvmResult<U256> {
        self.data.pop().ok_or(EvmError::StackUnderflow)
    }

    /// Peek at the top of the stack without removing it
    pub fn peek(&self) -> EvmResult<&U256> {
        self.data.last().ok_or(EvmError::StackUnderflow)
    }

    /// Get current stack size
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if stack is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl Default for Stack {
    fn default() -> Self {
        Self::new()
    }
}
