//! Error types for Tally ledger operations
//!
//! Every error is terminal for the triggering call: the core never
//! retries, and a failed call leaves all state exactly as it was and
//! emits no event.

use thiserror::Error;

/// Result type alias for ledger operations
pub type Result<T> = std::result::Result<T, TallyError>;

/// Errors that can occur in claims-ledger operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TallyError {
    // === Authorization ===
    /// Caller lacks root-rotation / skim rights
    #[error("caller is not the designated authority")]
    Unauthorized,

    // === Custody ===
    /// Custody movement could not complete
    #[error("token transfer failed: {0}")]
    TransferFailed(String),

    // === Claims ===
    /// Merkle verification failed, including because the root was rotated
    /// since the proof was generated
    #[error("proof invalid or expired under the current root")]
    ProofInvalidOrExpired,

    /// Entitlement already paid in full, or the proven total is below the
    /// amount already paid
    #[error("entitlement already claimed in full")]
    AlreadyClaimed,
}
