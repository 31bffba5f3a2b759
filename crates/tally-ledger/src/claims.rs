//! Claim ledger
//!
//! Verifies a recipient's entitlement proof against the registry's
//! current root and pays out the unclaimed delta, tracking the cumulative
//! amount paid per (recipient, token) pair. The mapping is monotonically
//! non-decreasing per key, created implicitly at zero, and never deleted.
//!
//! There is no state machine beyond this accounting: no claim sessions,
//! no expiry fields, no cancellation.

use crate::capability::TokenCustody;
use crate::event::{EventSink, LedgerEvent};
use crate::registry::RootRegistry;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use tally_core::{AccountId, Result, TallyError, TokenId};
use tally_merkle::{leaf_hash, verify, MerkleProof};
use tracing::{debug, info};

/// Cumulative-claimed accounting and payout authorization
pub struct ClaimLedger {
    claimed: RwLock<HashMap<(AccountId, TokenId), u64>>,
    registry: Arc<RootRegistry>,
    custody: Arc<dyn TokenCustody>,
    events: Arc<dyn EventSink>,
}

impl ClaimLedger {
    pub fn new(
        registry: Arc<RootRegistry>,
        custody: Arc<dyn TokenCustody>,
        events: Arc<dyn EventSink>,
    ) -> Self {
        Self {
            claimed: RwLock::new(HashMap::new()),
            registry,
            custody,
            events,
        }
    }

    /// Claim the unclaimed part of `recipient`'s entitlement for `token`.
    ///
    /// `total_entitlement` is the cumulative lifetime amount committed by
    /// the current tree, not an increment. Pays
    /// `total_entitlement - already_claimed` and caps the stored amount at
    /// the new total, so claims against a re-rotated root reconcile.
    /// Returns the amount paid out.
    pub fn claim(
        &self,
        recipient: AccountId,
        token: TokenId,
        total_entitlement: u64,
        proof: &MerkleProof,
    ) -> Result<u64> {
        // The write lock is held for the whole call: concurrent claims for
        // the same (recipient, token) serialize, and the second observes
        // the first's committed amount.
        let mut claimed = self.claimed.write();

        let root = self
            .registry
            .root(token)
            .ok_or(TallyError::ProofInvalidOrExpired)?;
        let leaf = leaf_hash(&recipient, total_entitlement);
        if !verify(leaf, proof, &root) {
            debug!(%recipient, %token, "claim rejected: proof does not verify under the current root");
            return Err(TallyError::ProofInvalidOrExpired);
        }

        let already = claimed.get(&(recipient, token)).copied().unwrap_or(0);
        if total_entitlement <= already {
            // Also covers a corrective rotation that lowered the
            // entitlement below what was already paid: the claim fails,
            // nothing is clawed back, nothing underflows.
            debug!(%recipient, %token, already, total_entitlement, "claim rejected: nothing left to pay");
            return Err(TallyError::AlreadyClaimed);
        }
        let owed = total_entitlement - already;

        // Pay before committing; with the lock held the pair is atomic,
        // and a failed payout leaves the previous claimed amount in place.
        self.custody
            .transfer_out(token, recipient, owed)
            .map_err(|e| TallyError::TransferFailed(e.to_string()))?;
        claimed.insert((recipient, token), total_entitlement);
        drop(claimed);

        info!(%recipient, %token, owed, total_entitlement, "rewards claimed");
        self.events.emit(LedgerEvent::RewardsClaimed {
            recipient,
            token,
            amount: owed,
        });
        Ok(owed)
    }

    /// Cumulative amount already paid to `recipient` for `token`
    pub fn claimed(&self, recipient: AccountId, token: TokenId) -> u64 {
        self.claimed
            .read()
            .get(&(recipient, token))
            .copied()
            .unwrap_or(0)
    }
}
