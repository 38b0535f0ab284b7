//! Fixed-width hash and identifier types (H64, H256, H512)

use std::fmt;
use thiserror::Error;

/// Hash parsing error
#[derive(Debug, Error)]
pub enum HashError {
    /// Invalid hex string
    #[error("invalid hex string: {0}")]
    InvalidHex(String),
    /// Invalid length
    #[error("invalid hash length: expected {expected} bytes, got {got}")]
    InvalidLength { expected: usize, got: usize },
}

/// 256-bit hash (32 bytes): block hashes, storage keys, trie digests
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct H256([u8; 32]);

impl H256 {
    /// Size in bytes
    pub const LEN: usize = 32;

    /// Zero hash
    pub const ZERO: H256 = H256([0u8; 32]);

    /// Create from bytes
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        H256(bytes)
    }

    /// Create from a slice
    pub fn from_slice(slice: &[u8]) -> Result<Self, HashError> {
        if slice.len() != 32 {
            return Err(HashError::InvalidLength {
                expected: 32,
                got: slice.len(),
            });
        }
        let mut bytes = [0u8; 32];
        bytes.copy_from_slice(slice);
        Ok(H256(bytes))
    }

    /// Parse from a hex string (with or without 0x prefix)
    pub fn from_hex(s: &str) -> Result<Self, HashError> {
        let s = s.strip_prefix("0x").unwrap_or(s);
        let bytes = hex::decode(s).map_err(|e| HashError::InvalidHex(e.to_string()))?;
        Self::from_slice(&bytes)
    }

    /// Get as bytes
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Check if zero
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 32]
    }

    /// Convert to a hex string with 0x prefix
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }
}

impl fmt::Debug for H256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "H256({})", self.to_hex())
    }
}

impl fmt::Display for H256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl From<[u8; 32]> for H256 {
    fn from(bytes: [u8; 32]) -> Self {
        H256(bytes)
    }
}

impl AsRef<[u8]> for H256 {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// 64-bit identifier (8 bytes): the block-header nonce field
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Debug)]
pub struct H64([u8; 8]);

impl H64 {
    /// Size in bytes
    pub const LEN: usize = 8;

    /// Zero value
    pub const ZERO: H64 = H64([0u8; 8]);

    /// Create from bytes
    pub const fn from_bytes(bytes: [u8; 8]) -> Self {
        H64(bytes)
    }

    /// Create from a slice
    pub fn from_slice(slice: &[u8]) -> Result<Self, HashError> {
        if slice.len() != 8 {
            return Err(HashError::InvalidLength {
                expected: 8,
                got: slice.len(),
            });
        }
        let mut bytes = [0u8; 8];
        bytes.copy_from_slice(slice);
        Ok(H64(bytes))
    }

    /// Get as bytes
    pub fn as_bytes(&self) -> &[u8; 8] {
        &self.0
    }

    /// Check if zero
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 8]
    }
}

impl From<[u8; 8]> for H64 {
    fn from(bytes: [u8; 8]) -> Self {
        H64(bytes)
    }
}

/// 512-bit value (64 bytes): uncompressed public keys at the signature boundary
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct H512([u8; 64]);

impl H512 {
    /// Size in bytes
    pub const LEN: usize = 64;

    /// Zero value
    pub const ZERO: H512 = H512([0u8; 64]);

    /// Create from bytes
    pub const fn from_bytes(bytes: [u8; 64]) -> Self {
        H512(bytes)
    }

    /// Create from a slice
    pub fn from_slice(slice: &[u8]) -> Result<Self, HashError> {
        if slice.len() != 64 {
            return Err(HashError::InvalidLength {
                expected: 64,
                got: slice.len(),
            });
        }
        let mut bytes = [0u8; 64];
        bytes.copy_from_slice(slice);
        Ok(H512(bytes))
    }

    /// Get as bytes
    pub fn as_bytes(&self) -> &[u8; 64] {
        &self.0
    }

    /// Check if zero
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 64]
    }
}

impl Default for H512 {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Debug for H512 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "H512(0x{})", hex::encode(self.0))
    }
}

impl From<[u8; 64]> for H512 {
    fn from(bytes: [u8; 64]) -> Self {
        H512(bytes)
    }
}
