//! # Identifier Derivation
//!
//! Namespace and mosaic ids are 64-bit values derived deterministically from
//! their names. Each level hashes the parent id together with its own name:
//!
//! ```text
//! id(name, parent) = u64_le( SHA3-256( u64_le(parent) ++ utf8(name) )[0..8] )
//! ```
//!
//! Root namespaces use parent `0`. A mosaic's parent is the id of the last
//! namespace in its path.

use crate::codec::uint64;
use crate::config::MAX_NAMESPACE_DEPTH;
use crate::crypto::hash::sha3_256_parts;
use crate::error::{Nem2Error, Result};

/// Derives the id of `name` under `parent_id`.
pub fn generate_id(name: &str, parent_id: u64) -> u64 {
    let digest = sha3_256_parts(&[&parent_id.to_le_bytes(), name.as_bytes()]);
    uint64::from_le_prefix(&digest).unwrap_or_default()
}

/// Derives the id of every level of a dot-separated namespace name.
///
/// `"foo.bar"` yields `[id("foo", 0), id("bar", id("foo", 0))]`.
///
/// # Errors
///
/// - `"too many parts"` when the name has more than three levels.
/// - `"invalid namespace name"` when any level is empty or does not match
///   `[a-z0-9][a-z0-9_-]*`.
pub fn generate_namespace_path(full_name: &str) -> Result<Vec<u64>> {
    let parts: Vec<&str> = full_name.split('.').collect();
    if parts.len() > MAX_NAMESPACE_DEPTH {
        return Err(Nem2Error::illegal("too many parts"));
    }

    let mut parent_id = 0u64;
    let mut path = Vec::with_capacity(parts.len());
    for part in parts {
        if !is_valid_name(part) {
            return Err(Nem2Error::illegal("invalid namespace name"));
        }
        parent_id = generate_id(part, parent_id);
        path.push(parent_id);
    }
    Ok(path)
}

/// Id of the last level of `full_name`.
pub fn generate_namespace_id(full_name: &str) -> Result<u64> {
    generate_namespace_path(full_name)?
        .last()
        .copied()
        .ok_or_else(|| Nem2Error::illegal("invalid namespace name"))
}

/// Id of a single-level namespace `name` nested under `parent_id`.
pub fn generate_sub_namespace_id(name: &str, parent_id: u64) -> Result<u64> {
    if !is_valid_name(name) {
        return Err(Nem2Error::illegal("invalid namespace name"));
    }
    Ok(generate_id(name, parent_id))
}

/// Id of `mosaic_name` owned by the namespace `namespace_full_name`.
///
/// # Errors
///
/// - `"having zero length"` for an empty mosaic name, checked first.
/// - Any namespace error from [`generate_namespace_path`].
/// - `"invalid mosaic name"` when the mosaic name breaks the naming rule.
pub fn generate_mosaic_id(namespace_full_name: &str, mosaic_name: &str) -> Result<u64> {
    if mosaic_name.is_empty() {
        return Err(Nem2Error::illegal("having zero length"));
    }
    let namespace_id = generate_namespace_id(namespace_full_name)?;
    if !is_valid_name(mosaic_name) {
        return Err(Nem2Error::illegal("invalid mosaic name"));
    }
    Ok(generate_id(mosaic_name, namespace_id))
}

/// `[a-z0-9][a-z0-9_-]*`
fn is_valid_name(name: &str) -> bool {
    let mut bytes = name.bytes();
    match bytes.next() {
        Some(first) if first.is_ascii_lowercase() || first.is_ascii_digit() => {}
        _ => return false,
    }
    bytes.all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-' || b == b'_')
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
