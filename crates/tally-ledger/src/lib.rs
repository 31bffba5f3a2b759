//! # Tally Ledger
//!
//! A claims ledger that distributes reward tokens against a Merkle
//! commitment instead of a stored allocation table. Two collaborating
//! components:
//!
//! - [`RootRegistry`] - the current root per token; authority-gated root
//!   rotation (which funds custody with the increment) and custody
//!   recovery (`skim`)
//! - [`ClaimLedger`] - cumulative claimed amount per (recipient, token);
//!   verifies entitlement proofs against the registry's current root and
//!   pays out the unclaimed delta exactly once per entitlement value
//!
//! Control flow: the authority rotates a token's root, supplying the
//! funds the new distribution requires; a recipient later presents their
//! total-entitlement leaf and a proof, and the ledger pays
//! `total - already_claimed` out of custody.
//!
//! ## Trust model
//!
//! The authority is trusted, and two behaviors are deliberately permitted
//! rather than prevented:
//!
//! - A rotation may publish any root, including one that lowers an
//!   individual's total below what they already received. Paid claims are
//!   never reversed; the shortfall surfaces as an `AlreadyClaimed` failure
//!   on the recipient's next claim.
//! - `skim` recovers the full custody balance without consulting the
//!   claim accounting.
//!
//! Token movement and authorization are injected capabilities
//! ([`TokenCustody`], [`Authorization`]); the core never touches an asset
//! backend directly, which is what makes it testable against the
//! in-memory implementations in [`capability`].
//!
//! Every operation is atomic and serializable: it either completes fully
//! or fails with state untouched and no event emitted.

pub mod capability;
pub mod claims;
pub mod event;
pub mod registry;

pub use capability::{
    Authorization, CustodyError, CustodyResult, MemoryCustody, StaticAuthority, TokenCustody,
};
pub use claims::ClaimLedger;
pub use event::{EventSink, LedgerEvent, MemoryEventSink};
pub use registry::RootRegistry;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::capability::{Authorization, TokenCustody};
    pub use crate::claims::ClaimLedger;
    pub use crate::event::{EventSink, LedgerEvent};
    pub use crate::registry::RootRegistry;
    pub use tally_core::prelude::*;
    pub use tally_merkle::MerkleProof;
}
