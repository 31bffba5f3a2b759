//! Root registry
//!
//! Authoritative source of the current Merkle root per token, and
//! gatekeeper for custody funding and balance recovery.
//!
//! Two trust assumptions are deliberate and documented rather than
//! enforced:
//!
//! - Rotation may replace a root arbitrarily - amounts are not required
//!   to be monotonic, which lets the authority correct a mis-published
//!   tree. An entitlement lowered below what a recipient already received
//!   surfaces as a failed claim, never a clawback.
//! - `skim` recovers the entire custody balance without consulting the
//!   claim accounting; the authority is trusted not to skim funds owed to
//!   pending claims.

use crate::capability::{Authorization, TokenCustody};
use crate::event::{EventSink, LedgerEvent};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use tally_core::{AccountId, Result, Root, TallyError, TokenId};
use tracing::{info, warn};

/// Current root-per-token mapping plus the funding/recovery gate
pub struct RootRegistry {
    roots: RwLock<HashMap<TokenId, Root>>,
    custody: Arc<dyn TokenCustody>,
    authorization: Arc<dyn Authorization>,
    events: Arc<dyn EventSink>,
}

impl RootRegistry {
    pub fn new(
        custody: Arc<dyn TokenCustody>,
        authorization: Arc<dyn Authorization>,
        events: Arc<dyn EventSink>,
    ) -> Self {
        Self {
            roots: RwLock::new(HashMap::new()),
            custody,
            authorization,
            events,
        }
    }

    /// Replace `token`'s root, pulling `funding_amount` from the caller
    /// into custody.
    ///
    /// The pull and the root store are one atomic step: the registry lock
    /// is held across both, and the pull runs first, so a failed pull
    /// leaves the previous root in place. Funding the increment on every
    /// rotation is what keeps custody able to cover all future payouts
    /// implied by the new tree.
    pub fn rotate_root(
        &self,
        caller: AccountId,
        token: TokenId,
        funding_amount: u64,
        new_root: Root,
    ) -> Result<()> {
        if !self.authorization.is_authority(&caller) {
            warn!(%token, %caller, "root rotation rejected: caller is not the authority");
            return Err(TallyError::Unauthorized);
        }

        let mut roots = self.roots.write();
        self.custody
            .transfer_in(token, caller, funding_amount)
            .map_err(|e| TallyError::TransferFailed(e.to_string()))?;
        roots.insert(token, new_root);
        drop(roots);

        info!(%token, funding_amount, %new_root, "root rotated");
        self.events.emit(LedgerEvent::RootUpdated {
            token,
            funding_amount,
            new_root,
        });
        Ok(())
    }

    /// Transfer the ledger's entire custody balance of `token` to the
    /// caller. Returns the amount recovered.
    pub fn skim(&self, caller: AccountId, token: TokenId) -> Result<u64> {
        if !self.authorization.is_authority(&caller) {
            warn!(%token, %caller, "skim rejected: caller is not the authority");
            return Err(TallyError::Unauthorized);
        }

        let amount = self.custody.balance_of(token);
        self.custody
            .transfer_out(token, caller, amount)
            .map_err(|e| TallyError::TransferFailed(e.to_string()))?;

        info!(%token, amount, "custody skimmed");
        Ok(amount)
    }

    /// Current root for `token`, if one has been published
    pub fn root(&self, token: TokenId) -> Option<Root> {
        self.roots.read().get(&token).copied()
    }
}
