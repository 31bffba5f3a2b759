//! # Tally Core
//!
//! Shared types for the Tally claims ledger:
//!
//! - `TokenId` / `AccountId` - opaque 32-byte identifiers
//! - `Root` - the per-token Merkle commitment over an entitlement table
//! - `TallyError` - the closed error taxonomy for ledger operations
//!
//! The ledger distributes reward tokens against a Merkle commitment
//! instead of a stored allocation table: an authority publishes a root per
//! token, recipients prove their total entitlement against it and withdraw
//! the delta over what they have already received.

pub mod error;
pub mod types;

pub use error::*;
pub use types::*;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{Result, TallyError};
    pub use crate::types::{AccountId, Root, TokenId};
}
