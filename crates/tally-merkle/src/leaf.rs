//! Leaf commitment scheme
//!
//! A leaf commits to one (recipient, total entitlement) pair:
//!
//! ```text
//! encode(recipient, amount) = recipient (32 bytes) || amount as u64 LE (8 bytes)
//! leaf = BLAKE3(BLAKE3(encode(recipient, amount)))
//! ```
//!
//! The entitlement amount is the cumulative lifetime total committed by
//! the current tree, never an increment.
//!
//! The second hash round hardens the leaf against second-preimage
//! construction and domain-separates leaves from interior nodes: an
//! interior node hashes 64 bytes of child material in one round, while a
//! leaf preimage is 40 bytes hashed twice. Both rounds must be preserved
//! exactly - external tree-generation tooling pins the same scheme, and a
//! single-round leaf will not verify.

use crate::hash::hash_blake3;
use tally_core::AccountId;

/// Byte length of the pinned leaf encoding
pub const LEAF_ENCODING_LEN: usize = 40;

/// Pinned byte encoding of one entitlement entry
pub fn encode_entry(recipient: &AccountId, amount: u64) -> [u8; LEAF_ENCODING_LEN] {
    let mut buf = [0u8; LEAF_ENCODING_LEN];
    buf[..32].copy_from_slice(recipient.as_bytes());
    buf[32..].copy_from_slice(&amount.to_le_bytes());
    buf
}

/// Double-hash leaf commitment for one (recipient, amount) pair
pub fn leaf_hash(recipient: &AccountId, amount: u64) -> [u8; 32] {
    hash_blake3(&hash_blake3(&encode_entry(recipient, amount)))
}
