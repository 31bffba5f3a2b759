//! Observable ledger events
//!
//! Emitted exactly once per successful call, after state commit; failed
//! calls emit nothing. Events exist for off-system indexers and operator
//! auditing, not for correctness.

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tally_core::{AccountId, Root, TokenId};

/// Events observable by off-system consumers
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LedgerEvent {
    /// A token's root was replaced and custody funded with the increment
    RootUpdated {
        token: TokenId,
        funding_amount: u64,
        new_root: Root,
    },
    /// A recipient was paid the unclaimed part of their entitlement
    RewardsClaimed {
        recipient: AccountId,
        token: TokenId,
        amount: u64,
    },
}

/// Event delivery seam
pub trait EventSink: Send + Sync {
    fn emit(&self, event: LedgerEvent);
}

/// Collects events in memory (tests, local indexing)
#[derive(Default)]
pub struct MemoryEventSink {
    events: RwLock<Vec<LedgerEvent>>,
}

impl MemoryEventSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of all events emitted so far, in emission order
    pub fn snapshot(&self) -> Vec<LedgerEvent> {
        self.events.read().clone()
    }

    /// Remove and return all collected events
    pub fn drain(&self) -> Vec<LedgerEvent> {
        std::mem::take(&mut *self.events.write())
    }
}

impl EventSink for MemoryEventSink {
    fn emit(&self, event: LedgerEvent) {
        self.events.write().push(event);
    }
}
