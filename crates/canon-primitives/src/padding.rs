//! Byte-buffer padding conventions
//!
//! Variable-length operands are read from input buffers that are
//! conceptually infinite: bytes past the end are zero. Outputs are rendered
//! big-endian at a fixed width, zero-filled on the left.

/// Extend `data` on the right with zero bytes to `size`.
///
/// Returns a copy; input longer than `size` is returned unchanged.
pub fn right_pad_zero_bytes(data: &[u8], size: usize) -> Vec<u8> {
    let mut out = data.to_vec();
    if out.len() < size {
        out.resize(size, 0);
    }
    out
}

/// Extend `data` on the left with zero bytes to `size`.
///
/// Returns a copy; input longer than `size` is returned unchanged.
pub fn left_pad_zero_bytes(data: &[u8], size: usize) -> Vec<u8> {
    if data.len() >= size {
        return data.to_vec();
    }
    let mut out = vec![0u8; size - data.len()];
    out.extend_from_slice(data);
    out
}

/// Read `len` bytes of `data` starting at `offset`, zero-extending past the
/// end of the buffer. Reads entirely out of range yield all zeros.
pub fn read_right_padded(data: &[u8], offset: usize, len: usize) -> Vec<u8> {
    let start = offset.min(data.len());
    let end = offset.saturating_add(len).min(data.len());
    right_pad_zero_bytes(&data[start..end], len)
}
