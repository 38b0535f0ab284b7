//! Execution error types

use thiserror::Error;

/// Errors raised while executing a call frame.
///
/// Every variant is deterministic: the same message and gas budget always
/// fail (or succeed) the same way on every node.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EvmError {
    /// The gas budget cannot cover the next charge
    #[error("out of gas")]
    OutOfGas,

    /// Pop from an empty operand stack
    #[error("stack underflow")]
    StackUnderflow,

    /// Push onto a full operand stack
    #[error("stack overflow (max 1024)")]
    StackOverflow,
}

/// Result type for execution operations
pub type EvmResult<T> = Result<T, EvmError>;

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Display and equality ====================

    #[test]
    fn test_error_display() {
        assert_eq!(EvmError::OutOfGas.to_string(), "out of gas");
        assert_eq!(EvmError::StackUnderflow.to_string(), "stack underflow");
        assert_eq!(
            EvmError::StackOverflow.to_string(),
            "stack overflow (max 1024)"
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(EvmError::OutOfGas, EvmError::OutOfGas);
        assert_ne!(EvmError::OutOfGas, EvmError::StackUnderflow);
        assert_eq!(EvmError::OutOfGas.clone(), EvmError::OutOfGas);
    }
}
