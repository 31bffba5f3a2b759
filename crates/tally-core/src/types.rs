//! Core type definitions for the Tally claims ledger
//!
//! Identifiers are opaque 32-byte values. Token and account identities are
//! assigned by the host environment (a chain address, a registry key, a
//! public key hash); the ledger never interprets them beyond equality and
//! use as map keys.

use serde::{Deserialize, Serialize};
use std::fmt;

/// TokenId - identifies one fungible token tracked by the ledger
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct TokenId {
    id: [u8; 32],
}

impl TokenId {
    /// Create a TokenId from raw bytes
    pub fn new(id: [u8; 32]) -> Self {
        Self { id }
    }

    /// Derive a TokenId from an arbitrary label using BLAKE3
    pub fn from_label(label: &str) -> Self {
        Self {
            id: *blake3::hash(label.as_bytes()).as_bytes(),
        }
    }

    /// Get the raw bytes
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.id
    }

    /// Convert to hex string
    pub fn to_hex(&self) -> String {
        hex::encode(self.id)
    }

    /// Parse from hex string
    pub fn from_hex(s: &str) -> Result<Self, hex::FromHexError> {
        let bytes = hex::decode(s)?;
        let mut id = [0u8; 32];
        if bytes.len() != 32 {
            return Err(hex::FromHexError::InvalidStringLength);
        }
        id.copy_from_slice(&bytes);
        Ok(Self { id })
    }
}

impl fmt::Debug for TokenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TokenId({})", &self.to_hex()[..16])
    }
}

impl fmt::Display for TokenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.to_hex()[..16])
    }
}

/// AccountId - identifies an external account (operator or recipient)
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct AccountId {
    id: [u8; 32],
}

impl AccountId {
    /// Create an AccountId from raw bytes
    pub fn new(id: [u8; 32]) -> Self {
        Self { id }
    }

    /// Derive an AccountId from an arbitrary label using BLAKE3
    pub fn from_label(label: &str) -> Self {
        Self {
            id: *blake3::hash(label.as_bytes()).as_bytes(),
        }
    }

    /// Get the raw bytes
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.id
    }

    /// Convert to hex string
    pub fn to_hex(&self) -> String {
        hex::encode(self.id)
    }

    /// Parse from hex string
    pub fn from_hex(s: &str) -> Result<Self, hex::FromHexError> {
        let bytes = hex::decode(s)?;
        let mut id = [0u8; 32];
        if bytes.len() != 32 {
            return Err(hex::FromHexError::InvalidStringLength);
        }
        id.copy_from_slice(&bytes);
        Ok(Self { id })
    }
}

impl fmt::Debug for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AccountId({})", &self.to_hex()[..16])
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.to_hex()[..16])
    }
}

/// Root - 32-byte Merkle commitment over a token's entitlement table
///
/// One current value per token, replaced wholesale on rotation. No history
/// is retained; rotating a root implicitly invalidates every proof built
/// against the previous tree.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Root {
    hash: [u8; 32],
}

impl Root {
    /// Create a Root from raw bytes
    pub fn new(hash: [u8; 32]) -> Self {
        Self { hash }
    }

    /// Get the raw bytes
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.hash
    }

    /// Convert to hex string
    pub fn to_hex(&self) -> String {
        hex::encode(self.hash)
    }

    /// Parse from hex string
    pub fn from_hex(s: &str) -> Result<Self, hex::FromHexError> {
        let bytes = hex::decode(s)?;
        let mut hash = [0u8; 32];
        if bytes.len() != 32 {
            return Err(hex::FromHexError::InvalidStringLength);
        }
        hash.copy_from_slice(&bytes);
        Ok(Self { hash })
    }

    /// All-zero root (no commitment)
    pub const ZERO: Self = Self { hash: [0u8; 32] };
}

impl fmt::Debug for Root {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Root({})", &self.to_hex()[..16])
    }
}

impl fmt::Display for Root {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.to_hex()[..16])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_id_hex_roundtrip() {
        let token = TokenId::from_label("GOLD");
        let parsed = TokenId::from_hex(&token.to_hex()).unwrap();
        assert_eq!(token, parsed);
    }

    #[test]
    fn test_account_id_from_label_is_deterministic() {
        assert_eq!(AccountId::from_label("alice"), AccountId::from_label("alice"));
        assert_ne!(AccountId::from_label("alice"), AccountId::from_label("bob"));
    }

    #[test]
    fn test_from_hex_rejects_wrong_length() {
        assert!(AccountId::from_hex("deadbeef").is_err());
        assert!(Root::from_hex("").is_err());
    }

    #[test]
    fn test_root_zero() {
        assert_eq!(Root::ZERO.as_bytes(), &[0u8; 32]);
        assert_eq!(Root::default(), Root::ZERO);
    }

    #[test]
    fn test_display_is_truncated_hex() {
        let root = Root::new([0xab; 32]);
        assert_eq!(format!("{root}"), "abababababababab");
    }
}
