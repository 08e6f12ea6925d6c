//! 64-bit values as they appear outside the binary wire format.
//!
//! Node JSON cannot carry full-width integers, so every u64 travels as a
//! `[low32, high32]` pair. Inside transaction bodies everything is fixed
//! width little-endian and written with `to_le_bytes` directly.

/// Recombines a `[low, high]` pair.
pub fn from_pair(low: u32, high: u32) -> u64 {
    (u64::from(high) << 32) | u64::from(low)
}

/// Splits a value into its `[low, high]` pair.
pub fn to_pair(value: u64) -> [u32; 2] {
    [value as u32, (value >> 32) as u32]
}

/// Reads the first eight bytes of `bytes` as a little-endian u64.
pub fn from_le_prefix(bytes: &[u8]) -> Option<u64> {
    let prefix: [u8; 8] = bytes.get(..8)?.try_into().ok()?;
    Some(u64::from_le_bytes(prefix))
}
