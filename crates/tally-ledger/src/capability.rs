//! External capability seams
//!
//! Token movement and authorization live outside the ledger core. The
//! traits here are the integration surface for a real backend (a chain
//! adapter, a bank service, a hardware custodian); the in-memory
//! implementations back the test suites and local demos.

use parking_lot::RwLock;
use std::collections::HashMap;
use tally_core::{AccountId, TokenId};
use thiserror::Error;

/// Failure reported by a custody backend
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct CustodyError(pub String);

/// Result type for custody operations
pub type CustodyResult = std::result::Result<(), CustodyError>;

/// Fungible-token custody capability
///
/// Moves funds between external accounts and the ledger's own custody
/// balance. Only three mutators touch custody anywhere in the system:
/// `rotate_root` funds it, `claim` and `skim` drain it.
pub trait TokenCustody: Send + Sync {
    /// Pull `amount` of `token` from `from` into custody
    fn transfer_in(&self, token: TokenId, from: AccountId, amount: u64) -> CustodyResult;

    /// Pay `amount` of `token` out of custody to `to`
    fn transfer_out(&self, token: TokenId, to: AccountId, amount: u64) -> CustodyResult;

    /// Current custody balance of `token`
    fn balance_of(&self, token: TokenId) -> u64;
}

/// Authorization capability: decides who may rotate roots and skim
pub trait Authorization: Send + Sync {
    fn is_authority(&self, caller: &AccountId) -> bool;
}

/// Single designated authority identity
pub struct StaticAuthority {
    authority: AccountId,
}

impl StaticAuthority {
    pub fn new(authority: AccountId) -> Self {
        Self { authority }
    }
}

impl Authorization for StaticAuthority {
    fn is_authority(&self, caller: &AccountId) -> bool {
        *caller == self.authority
    }
}

/// In-memory custody backend
///
/// Tracks external account balances and the per-token custody balance in
/// process memory. A deployment wires a real asset backend behind
/// [`TokenCustody`] instead.
pub struct MemoryCustody {
    accounts: RwLock<HashMap<(AccountId, TokenId), u64>>,
    custody: RwLock<HashMap<TokenId, u64>>,
}

impl MemoryCustody {
    pub fn new() -> Self {
        Self {
            accounts: RwLock::new(HashMap::new()),
            custody: RwLock::new(HashMap::new()),
        }
    }

    /// Credit an external account, e.g. to fund an operator
    pub fn mint(&self, account: AccountId, token: TokenId, amount: u64) {
        *self.accounts.write().entry((account, token)).or_insert(0) += amount;
    }

    /// Balance of an external account
    pub fn account_balance(&self, account: AccountId, token: TokenId) -> u64 {
        self.accounts
            .read()
            .get(&(account, token))
            .copied()
            .unwrap_or(0)
    }
}

impl Default for MemoryCustody {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenCustody for MemoryCustody {
    // Lock order is accounts before custody in both transfer directions.
    fn transfer_in(&self, token: TokenId, from: AccountId, amount: u64) -> CustodyResult {
        let mut accounts = self.accounts.write();
        let balance = accounts.entry((from, token)).or_insert(0);
        if *balance < amount {
            return Err(CustodyError(format!(
                "insufficient funds: account holds {balance}, transfer needs {amount}"
            )));
        }
        *balance -= amount;
        *self.custody.write().entry(token).or_insert(0) += amount;
        Ok(())
    }

    fn transfer_out(&self, token: TokenId, to: AccountId, amount: u64) -> CustodyResult {
        let mut accounts = self.accounts.write();
        let mut custody = self.custody.write();
        let held = custody.entry(token).or_insert(0);
        if *held < amount {
            return Err(CustodyError(format!(
                "insufficient custody: holds {held}, payout needs {amount}"
            )));
        }
        *held -= amount;
        *accounts.entry((to, token)).or_insert(0) += amount;
        Ok(())
    }

    fn balance_of(&self, token: TokenId) -> u64 {
        self.custody.read().get(&token).copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_authority() {
        let authority = AccountId::from_label("authority");
        let auth = StaticAuthority::new(authority);
        assert!(auth.is_authority(&authority));
        assert!(!auth.is_authority(&AccountId::from_label("mallory")));
    }

    #[test]
    fn test_transfer_in_moves_funds_to_custody() {
        let custody = MemoryCustody::new();
        let operator = AccountId::from_label("operator");
        let token = TokenId::from_label("GOLD");

        custody.mint(operator, token, 500);
        custody.transfer_in(token, operator, 300).unwrap();

        assert_eq!(custody.account_balance(operator, token), 200);
        assert_eq!(custody.balance_of(token), 300);
    }

    #[test]
    fn test_transfer_in_insufficient_funds() {
        let custody = MemoryCustody::new();
        let operator = AccountId::from_label("operator");
        let token = TokenId::from_label("GOLD");

        custody.mint(operator, token, 100);
        assert!(custody.transfer_in(token, operator, 101).is_err());
        // Nothing moved
        assert_eq!(custody.account_balance(operator, token), 100);
        assert_eq!(custody.balance_of(token), 0);
    }

    #[test]
    fn test_transfer_out_insufficient_custody() {
        let custody = MemoryCustody::new();
        let recipient = AccountId::from_label("recipient");
        let token = TokenId::from_label("GOLD");

        assert!(custody.transfer_out(token, recipient, 1).is_err());
        assert_eq!(custody.account_balance(recipient, token), 0);
    }

    #[test]
    fn test_balances_are_per_token() {
        let custody = MemoryCustody::new();
        let operator = AccountId::from_label("operator");
        let gold = TokenId::from_label("GOLD");
        let iron = TokenId::from_label("IRON");

        custody.mint(operator, gold, 100);
        custody.transfer_in(gold, operator, 100).unwrap();

        assert_eq!(custody.balance_of(gold), 100);
        assert_eq!(custody.balance_of(iron), 0);
    }
}
